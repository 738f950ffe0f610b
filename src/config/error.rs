//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file is not valid toml")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("tagline.toml"),
            Error::new(ErrorKind::NotFound, "no such file"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("cannot read"));
        assert!(display.contains("tagline.toml"));

        let validation_err = ConfigError::Validation("`listing.per_page` must be at least 1".into());
        assert!(format!("{validation_err}").contains("per_page"));
    }
}
