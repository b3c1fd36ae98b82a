use thiserror::Error;

/// Errors produced while turning a raw record into a feature vector.
///
/// Unknown codes are never an error: they resolve to a fallback bucket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The raw record lacks a field the encoder needs.
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    /// The assembled features do not cover every name the classifier expects.
    #[error("feature vector does not match the model schema; missing: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },
}

impl EncodeError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }
}

/// Errors raised while loading or validating a classifier file.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model: {0}")]
    Invalid(String),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<EncodeError> for AppError {
    fn from(err: EncodeError) -> Self {
        let exit_code = match err {
            EncodeError::MissingField { .. } => 2,
            EncodeError::SchemaMismatch { .. } => 3,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::new(2, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = EncodeError::missing_field("Admission_grade");
        assert_eq!(err.to_string(), "missing required field `Admission_grade`");
        assert_eq!(AppError::from(err).exit_code(), 2);
    }

    #[test]
    fn schema_mismatch_lists_every_missing_name() {
        let err = EncodeError::SchemaMismatch {
            missing: vec!["GDP".to_string(), "Foo".to_string()],
        };
        assert!(err.to_string().ends_with("missing: GDP, Foo"));
        assert_eq!(AppError::from(err).exit_code(), 3);
    }
}
