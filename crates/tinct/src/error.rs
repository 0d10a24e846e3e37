#![forbid(unsafe_code)]

//! Top-level error type.
//!
//! Attribute misses and guarded transitions are not errors; they degrade and
//! are logged. What remains is loading configuration and parsing stored
//! theme values.

use std::fmt;

use tinct_palette::{ParseColorError, ParseRoleError, ParseThemeVariantError};
use tinct_runtime::ConfigError;

/// Any recoverable tinct failure.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Color(ParseColorError),
    Role(ParseRoleError),
    Variant(ParseThemeVariantError),
    #[cfg(feature = "subscriber")]
    Logging(tinct_runtime::logging::LoggingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Color(err) => write!(f, "{err}"),
            Self::Role(err) => write!(f, "{err}"),
            Self::Variant(err) => write!(f, "{err}"),
            #[cfg(feature = "subscriber")]
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Role(err) => Some(err),
            Self::Variant(err) => Some(err),
            #[cfg(feature = "subscriber")]
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ParseColorError> for Error {
    fn from(err: ParseColorError) -> Self {
        Self::Color(err)
    }
}

impl From<ParseRoleError> for Error {
    fn from(err: ParseRoleError) -> Self {
        Self::Role(err)
    }
}

impl From<ParseThemeVariantError> for Error {
    fn from(err: ParseThemeVariantError) -> Self {
        Self::Variant(err)
    }
}

#[cfg(feature = "subscriber")]
impl From<tinct_runtime::logging::LoggingError> for Error {
    fn from(err: tinct_runtime::logging::LoggingError) -> Self {
        Self::Logging(err)
    }
}

/// Standard result type for tinct APIs.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_palette::{Color, ThemeVariant};

    fn parse_pair(color: &str, variant: &str) -> Result<(Color, ThemeVariant)> {
        Ok((color.parse()?, variant.parse()?))
    }

    #[test]
    fn question_mark_converts_parse_errors() {
        assert!(parse_pair("#112233", "dark").is_ok());
        assert!(matches!(parse_pair("112233", "dark"), Err(Error::Color(_))));
        assert!(matches!(parse_pair("#112233", "sepia"), Err(Error::Variant(_))));
    }

    #[test]
    fn config_errors_keep_their_source() {
        let err = Error::from(ConfigError::Validation(vec!["bad".into()]));
        assert_eq!(err.to_string(), "config: validation errors: bad");
        assert!(std::error::Error::source(&err).is_some());
    }
}
