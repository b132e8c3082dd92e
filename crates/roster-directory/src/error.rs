use roster_types::FieldKind;
use thiserror::Error;

/// A single field failed its format, range or membership rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid email format")]
    Email,
    #[error("Invalid age")]
    Age,
    #[error("Invalid mobile number")]
    Mobile,
    #[error("Invalid gender")]
    Gender,
    #[error("Invalid blood group")]
    BloodGroup,
    #[error("Invalid country")]
    Country,
}

impl FieldError {
    pub fn field(&self) -> FieldKind {
        match self {
            FieldError::Email => FieldKind::Email,
            FieldError::Age => FieldKind::Age,
            FieldError::Mobile => FieldKind::Mobile,
            FieldError::Gender => FieldKind::Gender,
            FieldError::BloodGroup => FieldKind::BloodGroup,
            FieldError::Country => FieldKind::Country,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input or a business-rule violation. The caller can fix and retry.
    Validation,
    /// The requester lacks rights for the operation.
    Permission,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),
    #[error("User not found: {username}")]
    NotFound { username: String },
    #[error("User already exists: {username}")]
    AlreadyExists { username: String },
    #[error("Unauthorized access by {requester}")]
    Unauthorized { requester: String },
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::Unauthorized { .. } => ErrorKind::Permission,
            DirectoryError::InvalidField(_)
            | DirectoryError::NotFound { .. }
            | DirectoryError::AlreadyExists { .. } => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(DirectoryError::from(FieldError::Age).kind(), ErrorKind::Validation);
        assert_eq!(
            DirectoryError::NotFound { username: "ghost".into() }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            DirectoryError::Unauthorized { requester: "bob".into() }.kind(),
            ErrorKind::Permission
        );
    }

    #[test]
    fn test_field_error_messages_pass_through() {
        let err = DirectoryError::from(FieldError::BloodGroup);
        assert_eq!(err.to_string(), "Invalid blood group");
    }
}
