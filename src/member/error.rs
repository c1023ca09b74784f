use thiserror::Error;

/// Caller-facing failures of the member operations. Every variant is surfaced
/// immediately at the point of detection and is not retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemberError {
    #[error("The value \"{value}\" provided for the field \"{field}\" is invalid.")]
    InvalidData { field: String, value: String },
    #[error("A member named \"{0}\" already exists.")]
    AlreadyExists(String),
    #[error("No member named \"{0}\" could be found.")]
    NotFound(String),
    #[error("The password doesn't match.")]
    WrongPassword,
}

/// Signals a value that doesn't belong to the enumerated member types.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a recognized member type.")]
pub struct UnknownMemberType(pub String);
