use thiserror::Error;

/// Request-level failure of a symptom check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("{0}")]
    InvalidInput(String),
}

impl CheckError {
    pub fn missing_symptoms() -> Self {
        CheckError::InvalidInput(
            "Please provide symptom text in the \"symptoms\" field.".to_string(),
        )
    }
}

/// Startup failure while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}
