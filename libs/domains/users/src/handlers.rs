//! HTTP handlers for authentication
//!
//! Mounted under `/api/auth`. Failures answer with plain-text bodies.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::credentials::CredentialVerifier;
use crate::error::AuthError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::repository::UserRepository;
use crate::service::AuthService;
use crate::token::TokenIssuer;

pub const REGISTERED_MESSAGE: &str = "User registered successfully.";

/// OpenAPI documentation for Auth API
#[derive(OpenApi)]
#[openapi(
    paths(signup, login),
    components(schemas(RegisterRequest, LoginRequest, AuthResponse)),
    tags(
        (name = "Auth", description = "Registration and token issuing")
    )
)]
pub struct ApiDoc;

type SharedService<R, V, T> = Arc<AuthService<R, V, T>>;

/// Auth router: `POST /signup` and `POST /login`
pub fn router<R, V, T>(service: AuthService<R, V, T>) -> Router
where
    R: UserRepository + 'static,
    V: CredentialVerifier + 'static,
    T: TokenIssuer + 'static,
{
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .with_state(Arc::new(service))
}

fn registration_failed(reason: impl std::fmt::Display) -> Response {
    (
        StatusCode::BAD_REQUEST,
        format!("Registration failed: {}", reason),
    )
        .into_response()
}

fn login_failed(err: AuthError) -> Response {
    (StatusCode::UNAUTHORIZED, format!("Login failed: {}", err)).into_response()
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = String, example = "User registered successfully."),
        (status = 400, description = "Registration failed", body = String,
            example = "Registration failed: User with email 'a@x.com' already exists")
    )
)]
async fn signup<R, V, T>(
    State(service): State<SharedService<R, V, T>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response
where
    R: UserRepository,
    V: CredentialVerifier,
    T: TokenIssuer,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return registration_failed(rejection.body_text()),
    };

    match service.register(&request.email, &request.password).await {
        Ok(_) => (StatusCode::OK, REGISTERED_MESSAGE).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            registration_failed(e)
        }
    }
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = AuthResponse),
        (status = 401, description = "Login failed", body = String, example = "Login failed: Login failed")
    )
)]
async fn login<R, V, T>(
    State(service): State<SharedService<R, V, T>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response
where
    R: UserRepository,
    V: CredentialVerifier,
    T: TokenIssuer,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Unreadable login request");
            return login_failed(AuthError::LoginFailed);
        }
    };

    match service.login(&request.email, &request.password).await {
        Ok(token) => Json(AuthResponse { token }).into_response(),
        Err(e) => login_failed(e),
    }
}
