use sea_orm::DbErr;
use thiserror::Error;

/// Storage and credential errors
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("User not found")]
    NotFound,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<DbErr> for UserError {
    fn from(err: DbErr) -> Self {
        UserError::Database(err.to_string())
    }
}

/// Errors surfaced by [`AuthService`](crate::AuthService)
#[derive(Debug, Error)]
pub enum AuthError {
    /// Every login failure collapses into this variant so callers
    /// cannot tell an unknown email from a wrong password.
    #[error("Login failed")]
    LoginFailed,

    #[error("Bad credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(String),

    #[error(transparent)]
    User(#[from] UserError),
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_message() {
        let err = UserError::DuplicateEmail("a@x.com".to_string());
        assert_eq!(err.to_string(), "User with email 'a@x.com' already exists");
    }

    #[test]
    fn test_user_error_is_transparent_inside_auth_error() {
        let err: AuthError = UserError::NotFound.into();
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_login_failed_message() {
        assert_eq!(AuthError::LoginFailed.to_string(), "Login failed");
    }

    #[test]
    fn test_db_err_maps_to_database() {
        let err: UserError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, UserError::Database(msg) if msg.contains("boom")));
    }
}
