use thiserror::Error;

pub type DisplayResult<T> = Result<T, DisplayError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DisplayError {
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid color value '{value}' for '{context}.{role}': {reason}")]
    InvalidColor {
        context: String,
        role: String,
        value: String,
        reason: String,
    },

    #[error("Invalid content width {value}: must be a positive integer")]
    InvalidContentWidth { value: i64 },

    #[error("Failed to read '{path}': {reason}")]
    Io { path: String, reason: String },
}

impl From<serde_yaml::Error> for DisplayError {
    fn from(err: serde_yaml::Error) -> Self {
        DisplayError::DeserializationError(err.to_string())
    }
}
