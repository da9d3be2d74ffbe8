use thiserror::Error;

use crate::store::StoreKey;

/// Rejections from admin and team-manager operations.
///
/// Returned before anything is written, except `SaveFailed`, which reports
/// that the final whole-collection write did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {0}")]
    MissingField(&'static str),

    #[error("{kind} already exists: {name}")]
    Duplicate { kind: &'static str, name: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("New passwords do not match")]
    PasswordMismatch,

    #[error("You can only manage students from your own team ({0})")]
    NotManagedTeam(String),

    #[error("Maximum of {0} gallery images allowed")]
    TooManyImages(usize),

    #[error("Failed to save {0}")]
    SaveFailed(StoreKey),
}

impl ValidationError {
    pub fn duplicate(kind: &'static str, name: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            kind,
            name: name.into(),
        }
    }

    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        ValidationError::NotFound {
            kind,
            name: name.into(),
        }
    }
}

/// Rejections from the login forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please enter both username and password")]
    MissingCredentials,

    #[error("Please select a team to manage")]
    NoTeamSelected,

    #[error("Invalid username or password")]
    InvalidAdminCredentials,

    #[error("Invalid username, password, or team assignment")]
    InvalidTeamManagerCredentials,
}

/// Turn a store write result into a `SaveFailed` error.
pub(crate) fn ensure_saved(saved: bool, key: StoreKey) -> Result<(), ValidationError> {
    if saved {
        Ok(())
    } else {
        Err(ValidationError::SaveFailed(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::duplicate("Username", "mgr1").to_string(),
            "Username already exists: mgr1"
        );
        assert_eq!(
            ValidationError::SaveFailed(StoreKey::TeamManagers).to_string(),
            "Failed to save teamManagers"
        );
        assert_eq!(
            LoginError::InvalidTeamManagerCredentials.to_string(),
            "Invalid username, password, or team assignment"
        );
    }

    #[test]
    fn test_ensure_saved() {
        assert!(ensure_saved(true, StoreKey::Teams).is_ok());
        assert_eq!(
            ensure_saved(false, StoreKey::Teams),
            Err(ValidationError::SaveFailed(StoreKey::Teams))
        );
    }
}
