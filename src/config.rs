//! Environment-derived configuration.

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    /// PostgreSQL schema holding the collection tables.
    pub database_name: Option<String>,
    pub port: u16,
}

impl AppConfig {
    /// Read `DATABASE_URL`, `DATABASE_NAME` and `PORT` (default 8000) from the
    /// environment. Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            database_url: env_nonempty("DATABASE_URL"),
            database_name: env_nonempty("DATABASE_NAME"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
