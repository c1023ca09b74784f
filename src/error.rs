use crate::member::error::MemberError;
use crate::store::error::StoreError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("An error has occurred within the member registry.")]
    Member(#[from] MemberError),
    #[error("An error has occurred with the member store.")]
    Store(#[from] StoreError),
}
