use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Allowed CORS origins. Empty means any origin is accepted.
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// `true` when cross-origin access is left wide open.
    #[must_use]
    pub fn cors_unrestricted(&self) -> bool {
        self.cors_origins.is_empty()
    }
}
