//! Process settings from environment variables.

/// Runtime settings. `DATABASE_URL` points at the SQLite file (created on
/// first run); `BIND_ADDR` is the listen address for the server binary.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://db.sqlite".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
        Settings {
            database_url,
            bind_addr,
        }
    }
}
