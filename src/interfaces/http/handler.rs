use super::AppState;
use crate::domain::account::{Account, AccountId};
use crate::error::{AccountError, Result};
use axum::Json;
use axum::extract::{Path, State};

/// GET /accounts/:id
///
/// The id is taken as raw text so that malformed and non-positive values are
/// both rejected by [`AccountId::parse`].
pub async fn get_account(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Account>> {
    let id = AccountId::parse(&raw_id)?;

    let account = match tokio::time::timeout(state.lookup_timeout, state.store.get_account(id)).await
    {
        Ok(outcome) => outcome?,
        Err(_) => {
            return Err(AccountError::backend(format!(
                "lookup of account {id} timed out after {:?}",
                state.lookup_timeout
            )));
        }
    };

    tracing::debug!(account_id = %id, "account found");
    Ok(Json(account))
}
