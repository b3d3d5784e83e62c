//! Users Domain
//!
//! Email/password registration and login issuing bearer tokens.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /signup, POST /login
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ AuthService │  ← Password hashing, credential check, token issuing
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼───┐ ┌─▼───────────┐
//! │ Repo │ │ TokenIssuer │  ← JWT signer from axum-helpers
//! └──────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_users::{handlers, AuthService, InMemoryUserRepository};
//!
//! let service = AuthService::with_repository(InMemoryUserRepository::new(), jwt_auth);
//! let router = handlers::router(service);
//! ```

pub mod credentials;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod token;

pub use credentials::{CredentialVerifier, RepositoryCredentialVerifier};
pub use error::{AuthError, AuthResult, UserError, UserResult};
pub use models::{AuthResponse, LoginRequest, NewUser, RegisterRequest, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::AuthService;
pub use token::TokenIssuer;
