use crate::error::AccountError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl AccountError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::BackendFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AccountError::InvalidRequest(reason) => tracing::debug!(%reason, "rejected request"),
            AccountError::NotFound(id) => tracing::info!(account_id = id, "account not found"),
            AccountError::BackendFailure(e) => tracing::error!(error = %e, "account lookup failed"),
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
