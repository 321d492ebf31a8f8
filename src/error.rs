#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
}
