/// Runtime configuration for the roster core.
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | ./work_dir/roster.db | SQLite database file |
/// | LOG_LEVEL | info | tracing filter level |
/// | LOG_DIR | (unset) | optional directory for rotating file logs |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./work_dir/roster.db".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// JSON console logs in production, pretty logs everywhere else.
    pub fn json_logs(&self) -> bool {
        self.environment == "production"
    }
}
