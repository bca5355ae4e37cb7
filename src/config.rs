use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, read from flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "ACCOUNT_LOOKUP_LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// Upper bound for a single backend lookup, in milliseconds.
    #[arg(long, env = "ACCOUNT_LOOKUP_TIMEOUT_MS", default_value = "2000")]
    pub lookup_timeout_ms: NonZeroU64,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "ACCOUNT_LOOKUP_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// JSON file with an array of accounts loaded into the store at startup.
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset.
    #[arg(long, env = "ACCOUNT_LOOKUP_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms.get())
    }
}
