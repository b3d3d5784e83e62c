//! Stateless JWT authentication.
//!
//! - [`JwtAuth`] signs and verifies HS256 bearer tokens
//! - [`jwt_auth_middleware`] protects routes and exposes [`JwtClaims`] to handlers
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//! let token = auth.issue_token("user@example.com")?;
//!
//! let protected = Router::new()
//!     .route("/api/protected", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims, JwtError, JwtResult};
pub use middleware::jwt_auth_middleware;
