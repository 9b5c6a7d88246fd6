use thiserror::Error;

/// Errors raised by the toast API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToastError {
    #[error("toast API used outside a mounted ToastProvider")]
    ProviderUnmounted,
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
