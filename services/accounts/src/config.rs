/// Accounts service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3214). Env var: `ACCOUNTS_PORT`.
    pub accounts_port: u16,
    /// Whether the one-shot admin bootstrap endpoint is open.
    /// Env var: `ENABLE_ADMIN_SETUP` ("true" to enable; default off).
    pub setup_enabled: bool,
    /// Shared secret required by the bootstrap endpoint.
    /// Env var: `ADMIN_SETUP_SECRET`. Leaving it unset keeps the endpoint
    /// sealed even when `ENABLE_ADMIN_SETUP` is true.
    pub setup_secret: Option<String>,
}

impl AccountsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            accounts_port: std::env::var("ACCOUNTS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3214),
            setup_enabled: std::env::var("ENABLE_ADMIN_SETUP")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            setup_secret: std::env::var("ADMIN_SETUP_SECRET")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}
