use std::fmt::{self, Debug, Display};

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct DisplayError(Error);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<Error>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}

/// Failure to decode a serialized routes document.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid yaml routes: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid json routes: {0}")]
    Json(#[from] serde_json::Error),
}
