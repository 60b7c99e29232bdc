//! Conversions from boundary error types into ConverterError

use super::{ConverterError, ErrorKind};

impl From<std::io::Error> for ConverterError {
    fn from(err: std::io::Error) -> Self {
        ConverterError::new(ErrorKind::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for ConverterError {
    fn from(err: serde_json::Error) -> Self {
        ConverterError::new(ErrorKind::JsonError, err.to_string())
    }
}
