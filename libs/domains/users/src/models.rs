use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered account.
///
/// Never serialized: the hash must not leave the service.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Row to insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Body of `POST /signup`
#[derive(Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "secret")]
    pub password: String,
}

/// Body of `POST /login`
#[derive(Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "secret")]
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,
}
