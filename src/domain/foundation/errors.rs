//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
///
/// Each code belongs to exactly one user-visible error kind (see
/// [`ErrorKind`]); the HTTP adapter maps kinds to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Bad request errors
    ValidationFailed,
    DuplicatedName,
    DuplicatedNickname,
    AlreadyDeleted,
    AnswerAlreadyExists,

    // Authorization errors
    Unauthorized,
    InvalidToken,
    TokenExpired,

    // Not found errors
    UserNotFound,
    CenterNotFound,
    LectorNotFound,
    FeeNotFound,
    PostNotFound,
    ReviewNotFound,
    AnswerNotFound,

    // Conflict / unprocessable errors
    Conflict,
    UnprocessableEntity,

    // Infrastructure errors
    DatabaseError,
    StorageError,
    InternalError,
}

/// Coarse error kind with a fixed HTTP status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    UnprocessableEntity,
    Internal,
}

impl ErrorCode {
    /// Returns the user-visible kind for this code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::DuplicatedName
            | ErrorCode::DuplicatedNickname
            | ErrorCode::AlreadyDeleted
            | ErrorCode::AnswerAlreadyExists => ErrorKind::BadRequest,

            ErrorCode::Unauthorized | ErrorCode::InvalidToken | ErrorCode::TokenExpired => {
                ErrorKind::Unauthorized
            }

            ErrorCode::UserNotFound
            | ErrorCode::CenterNotFound
            | ErrorCode::LectorNotFound
            | ErrorCode::FeeNotFound
            | ErrorCode::PostNotFound
            | ErrorCode::ReviewNotFound
            | ErrorCode::AnswerNotFound => ErrorKind::NotFound,

            ErrorCode::Conflict => ErrorKind::Conflict,
            ErrorCode::UnprocessableEntity => ErrorKind::UnprocessableEntity,

            ErrorCode::DatabaseError | ErrorCode::StorageError | ErrorCode::InternalError => {
                ErrorKind::Internal
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::DuplicatedName => "DUPLICATED_NAME",
            ErrorCode::DuplicatedNickname => "DUPLICATED_NICKNAME",
            ErrorCode::AlreadyDeleted => "ALREADY_DELETED",
            ErrorCode::AnswerAlreadyExists => "ANSWER_ALREADY_EXISTS",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::TokenExpired => "TOKEN_EXPIRED",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::CenterNotFound => "CENTER_NOT_FOUND",
            ErrorCode::LectorNotFound => "LECTOR_NOT_FOUND",
            ErrorCode::FeeNotFound => "FEE_NOT_FOUND",
            ErrorCode::PostNotFound => "POST_NOT_FOUND",
            ErrorCode::ReviewNotFound => "REVIEW_NOT_FOUND",
            ErrorCode::AnswerNotFound => "ANSWER_NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// The message is a human-readable display string; callers must not
/// match on it.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an unauthorized error with a fixed message.
    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::Unauthorized, "Not authorized for this operation")
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::CenterNotFound, "Center not found");
        assert_eq!(format!("{}", err), "[CENTER_NOT_FOUND] Center not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::DuplicatedName, "Duplicated name")
            .with_detail("name", "Test Gym");

        assert_eq!(err.details.get("name"), Some(&"Test Gym".to_string()));
    }

    #[test]
    fn error_codes_map_to_expected_kinds() {
        assert_eq!(ErrorCode::AlreadyDeleted.kind(), ErrorKind::BadRequest);
        assert_eq!(ErrorCode::DuplicatedName.kind(), ErrorKind::BadRequest);
        assert_eq!(ErrorCode::Unauthorized.kind(), ErrorKind::Unauthorized);
        assert_eq!(ErrorCode::FeeNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ErrorCode::StorageError.kind(), ErrorKind::Internal);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DuplicatedName), "DUPLICATED_NAME");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
