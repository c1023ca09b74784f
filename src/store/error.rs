use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("A member named \"{0}\" is already stored.")]
    DuplicateMember(String),
    #[error("No member named \"{0}\" is stored.")]
    UnknownMember(String),

    #[error("The members file folder couldn't be created.")]
    CantCreateMembersFileFolder,
    #[error("The members file folder couldn't be opened.")]
    CantOpenMembersFileFolder,
    #[error("The members file folder couldn't be browsed through.")]
    CantBrowseThroughFiles,
    #[error("The members file couldn't be opened.")]
    CantOpenMembersFile,
    #[error("The members file couldn't be written.")]
    CantWriteMembersFile,
    #[error("No members file could be found.")]
    NoFileFound,
    #[error("The members file pattern couldn't be compiled.")]
    WrongRegex,
    #[error("The members file name holds an invalid date.")]
    InvalidDate,
}
