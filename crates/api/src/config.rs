/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. `DATABASE_URL` is
/// read separately at startup and has no default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Image hosting collaborator settings.
    pub image_host: ImageHostConfig,
}

/// Connection settings for the external image/file hosting service.
///
/// The service accepts a multipart upload plus an upload-preset identifier
/// and returns a durable public URL; only that URL is ever persisted.
#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    /// Base URL of the hosting API (`IMAGE_HOST_BASE_URL`).
    pub base_url: String,
    /// Upload preset controlling folder/transformation rules
    /// (`IMAGE_HOST_UPLOAD_PRESET`).
    pub upload_preset: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `3000`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `IMAGE_HOST_BASE_URL`      | `http://localhost:9000` |
    /// | `IMAGE_HOST_UPLOAD_PRESET` | `stonegate-dev`         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let image_host = ImageHostConfig {
            base_url: std::env::var("IMAGE_HOST_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:9000".into()),
            upload_preset: std::env::var("IMAGE_HOST_UPLOAD_PRESET")
                .unwrap_or_else(|_| "stonegate-dev".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            image_host,
        }
    }
}
