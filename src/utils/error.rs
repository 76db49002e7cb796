use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    DatabaseError(String),
    InvalidId(String),
    NotFound(String),
    ValidationError(String),
    InvalidBody(String),
    ConfigError(String),
}

impl AppError {
    /// Error kind as reported to clients in the `name` field
    pub fn name(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "MongoError",
            AppError::InvalidId(_) => "CastError",
            AppError::NotFound(_) => "DocumentNotFoundError",
            AppError::ValidationError(_) => "ValidationError",
            AppError::InvalidBody(_) => "SyntaxError",
            AppError::ConfigError(_) => "ConfigError",
        }
    }

    /// JSON object placed in the `error` / `Details` fields of a failed response
    pub fn detail(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name(),
            "message": self.to_string(),
        })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::InvalidId(id) => write!(f, "Cast to ObjectId failed for value \"{}\"", id),
            AppError::NotFound(id) => write!(f, "No user found for id \"{}\"", id),
            AppError::ValidationError(msg) => write!(f, "User validation failed: {}", msg),
            AppError::InvalidBody(msg) => write!(f, "Invalid request body: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_carries_name_and_message() {
        let err = AppError::InvalidId("abc".to_string());
        let detail = err.detail();

        assert_eq!(detail["name"], "CastError");
        assert_eq!(detail["message"], "Cast to ObjectId failed for value \"abc\"");
    }

    #[test]
    fn test_validation_message() {
        let err = AppError::ValidationError("email: Path `email` is required.".to_string());
        assert_eq!(err.name(), "ValidationError");
        assert!(err.to_string().starts_with("User validation failed"));
    }
}
