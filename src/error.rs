use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Operation '{operation}' is not supported on {target}")]
    UnsupportedOperation {
        operation: &'static str,
        target: String,
    },

    #[error("Invalid notification type specified: '{0}'")]
    UnknownNotificationKind(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
