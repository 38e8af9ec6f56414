use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("authentication required")]
    Unauthorized,

    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    TokenExpired,

    #[error("not found")]
    NotFound,

    #[error("unknown symptom: {0}")]
    UnknownSymptom(Uuid),

    #[error("symptom recorded more than once: {0}")]
    DuplicateSymptom(Uuid),

    #[error("no canonical ingredient matches '{0}'")]
    NoIngredientMatch(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation(vec![FieldViolation::new(field, message)])
    }
}

/// Collects field violations and turns them into a single `CoreError::Validation`.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_violations_are_ok() {
        assert_eq!(Violations::new().into_result(), Ok(()));
    }

    #[test]
    fn violations_keep_insertion_order() {
        let mut violations = Violations::new();
        violations.push("start_date", "must be a valid date");
        violations.push("limit", "must be between 1 and 50");

        let Err(CoreError::Validation(fields)) = violations.into_result() else {
            panic!("expected validation error");
        };
        assert_eq!(fields[0].field, "start_date");
        assert_eq!(fields[1].field, "limit");
    }
}
