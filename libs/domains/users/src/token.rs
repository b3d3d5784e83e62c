use axum_helpers::JwtAuth;

use crate::error::{AuthError, AuthResult};

/// Issues a bearer token for an authenticated subject
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &str) -> AuthResult<String>;
}

impl TokenIssuer for JwtAuth {
    fn issue(&self, subject: &str) -> AuthResult<String> {
        self.issue_token(subject)
            .map_err(|e| AuthError::Token(e.to_string()))
    }
}
