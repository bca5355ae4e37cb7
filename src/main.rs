use account_lookup::config::Config;
use account_lookup::domain::account::Account;
use account_lookup::domain::ports::AccountStoreRef;
use account_lookup::infrastructure::in_memory::InMemoryAccountStore;
use account_lookup::infrastructure::seed::read_accounts;
use account_lookup::interfaces::http::{AppState, router};
use account_lookup::logging;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config.log_level);

    let seed = match &config.seed {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            read_accounts(BufReader::new(file)).into_diagnostic()?
        }
        None => Vec::new(),
    };

    let store = build_store(&config, seed).await?;
    let app = router(AppState::new(store, config.lookup_timeout()));

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .into_diagnostic()?;
    tracing::info!(addr = %listener.local_addr().into_diagnostic()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("server stopped");
    Ok(())
}

#[cfg(feature = "storage-rocksdb")]
async fn build_store(config: &Config, seed: Vec<Account>) -> Result<AccountStoreRef> {
    use account_lookup::infrastructure::rocksdb::RocksDbAccountStore;

    if let Some(db_path) = &config.db_path {
        let store = RocksDbAccountStore::open(db_path).into_diagnostic()?;
        for account in &seed {
            store.put(account).into_diagnostic()?;
        }
        tracing::info!(path = %db_path.display(), seeded = seed.len(), "using RocksDB store");
        return Ok(Arc::new(store));
    }

    Ok(in_memory(seed).await)
}

#[cfg(not(feature = "storage-rocksdb"))]
async fn build_store(config: &Config, seed: Vec<Account>) -> Result<AccountStoreRef> {
    if config.db_path.is_some() {
        tracing::warn!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(in_memory(seed).await)
}

async fn in_memory(seed: Vec<Account>) -> AccountStoreRef {
    let store = InMemoryAccountStore::from_accounts(seed);
    tracing::info!(seeded = store.len().await, "using in-memory store");
    Arc::new(store)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
