use std::sync::Arc;
use tracing::instrument;

use crate::credentials::{CredentialVerifier, RepositoryCredentialVerifier, hash_password};
use crate::error::{AuthError, AuthResult};
use crate::models::{NewUser, User};
use crate::repository::UserRepository;
use crate::token::TokenIssuer;

/// Registration and login
pub struct AuthService<R, V, T>
where
    R: UserRepository,
    V: CredentialVerifier,
    T: TokenIssuer,
{
    repository: Arc<R>,
    verifier: Arc<V>,
    issuer: Arc<T>,
}

impl<R, V, T> AuthService<R, V, T>
where
    R: UserRepository,
    V: CredentialVerifier,
    T: TokenIssuer,
{
    pub fn new(repository: R, verifier: V, issuer: T) -> Self {
        Self {
            repository: Arc::new(repository),
            verifier: Arc::new(verifier),
            issuer: Arc::new(issuer),
        }
    }

    /// Hash the password and store a new account.
    ///
    /// Email format and password strength are not checked.
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str) -> AuthResult<User> {
        let password_hash = hash_password(password)?;

        let user = self
            .repository
            .create(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and issue a token whose subject is the email.
    ///
    /// Every failure is reported as [`AuthError::LoginFailed`]; the cause is only logged.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<String> {
        self.authenticate(email, password).await.map_err(|e| {
            tracing::warn!(error = %e, "Login rejected");
            AuthError::LoginFailed
        })
    }

    async fn authenticate(&self, email: &str, password: &str) -> AuthResult<String> {
        if !self.verifier.verify(email, password).await? {
            return Err(AuthError::InvalidCredentials);
        }
        self.issuer.issue(email)
    }
}

impl<R, T> AuthService<R, RepositoryCredentialVerifier<R>, T>
where
    R: UserRepository + Clone,
    T: TokenIssuer,
{
    /// Service that verifies logins against the same repository it registers into.
    pub fn with_repository(repository: R, issuer: T) -> Self {
        let verifier = RepositoryCredentialVerifier::new(repository.clone());
        Self::new(repository, verifier, issuer)
    }
}

impl<R, V, T> Clone for AuthService<R, V, T>
where
    R: UserRepository,
    V: CredentialVerifier,
    T: TokenIssuer,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            verifier: Arc::clone(&self.verifier),
            issuer: Arc::clone(&self.issuer),
        }
    }
}
