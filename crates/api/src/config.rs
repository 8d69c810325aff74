/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database file, relative to the working directory.
    pub database_path: String,
    /// Directory where uploaded images are stored and served from.
    pub upload_dir: String,
    /// Maximum accepted upload request size in bytes (default: 16 MiB).
    pub max_upload_bytes: usize,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Debug mode; widens the default log filter (default: disabled).
    pub debug: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `5000`                  |
    /// | `DATABASE_PATH`        | `inventory.db`          |
    /// | `UPLOAD_DIR`           | `uploads`               |
    /// | `MAX_UPLOAD_BYTES`     | `16777216`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `DEBUG`                | `false`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "inventory.db".into());

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (16 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let debug = std::env::var("DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);

        Self {
            host,
            port,
            database_path,
            upload_dir,
            max_upload_bytes,
            request_timeout_secs,
            cors_origins,
            debug,
        }
    }
}
