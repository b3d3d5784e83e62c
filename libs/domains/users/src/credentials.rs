//! Password hashing and credential checks

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::repository::UserRepository;

/// Hash a password with Argon2id and a random salt, returning the PHC string.
pub fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Check a password against a stored PHC string.
pub fn verify_password(password: &str, hash: &str) -> UserResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Decides whether an email/password pair is valid
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// `Ok(false)` for a wrong password, `Err(UserError::NotFound)` for an unknown email
    async fn verify(&self, email: &str, password: &str) -> UserResult<bool>;
}

/// Verifies credentials against hashes held in a [`UserRepository`]
pub struct RepositoryCredentialVerifier<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> RepositoryCredentialVerifier<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

impl<R: UserRepository> Clone for RepositoryCredentialVerifier<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: UserRepository> CredentialVerifier for RepositoryCredentialVerifier<R> {
    async fn verify(&self, email: &str, password: &str) -> UserResult<bool> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound)?;

        verify_password(password, &user.password_hash)
    }
}
