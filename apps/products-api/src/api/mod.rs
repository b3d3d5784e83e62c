//! API route table
//!
//! | Prefix          | Router                          |
//! |-----------------|---------------------------------|
//! | `/products`     | `domain_products::handlers`     |
//! | `/auth`         | `domain_users::handlers`        |
//!
//! `create_router` nests the whole table under `/api`; `/health` and `/ready`
//! stay at the root.

pub mod health;

use axum::Router;
use axum_helpers::JwtAuth;
use domain_products::{PgProductRepository, ProductRepository, ProductService};
use domain_users::{AuthService, CredentialVerifier, PgUserRepository, TokenIssuer, UserRepository};

use crate::state::AppState;

/// Build the API routes over PostgreSQL-backed repositories.
pub fn routes(state: &AppState) -> Router {
    let products = ProductService::new(PgProductRepository::new(state.db.clone()));
    let auth = AuthService::with_repository(
        PgUserRepository::new(state.db.clone()),
        state.jwt.clone(),
    );

    compose(products, auth, &state.jwt, state.config.require_auth_for_writes)
}

/// Assemble the route table from already-built services.
pub fn compose<P, R, V, T>(
    products: ProductService<P>,
    auth: AuthService<R, V, T>,
    jwt: &JwtAuth,
    require_auth_for_writes: bool,
) -> Router
where
    P: ProductRepository + 'static,
    R: UserRepository + 'static,
    V: CredentialVerifier + 'static,
    T: TokenIssuer + 'static,
{
    let products = if require_auth_for_writes {
        domain_products::handlers::guarded_router(products, jwt.clone())
    } else {
        domain_products::handlers::router(products)
    };

    Router::new()
        .nest("/products", products)
        .nest("/auth", domain_users::handlers::router(auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode, header};
    use axum_helpers::{JwtConfig, create_cors_layer, create_router, health_router};
    use core_config::app_info;
    use domain_products::InMemoryProductRepository;
    use domain_users::InMemoryUserRepository;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:3000";

    fn jwt() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("route-table-test-secret-0123456789ab").unwrap())
    }

    fn app(require_auth_for_writes: bool) -> Router {
        let jwt = jwt();
        let apis = compose(
            ProductService::new(InMemoryProductRepository::new()),
            AuthService::with_repository(InMemoryUserRepository::new(), jwt.clone()),
            &jwt,
            require_auth_for_writes,
        );
        create_router::<ApiDoc>(
            apis,
            health_router(app_info!()),
            create_cors_layer(HeaderValue::from_static(ORIGIN)),
        )
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_products_are_served_under_api_prefix() {
        let app = app(false);

        let created = app
            .clone()
            .oneshot(post_json("/api/products", json!({ "name": "Lamp", "price": 20.0 })))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let listed = app
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(listed.status(), StatusCode::OK);

        let products: Value = serde_json::from_str(&body_text(listed).await).unwrap();
        assert_eq!(products[0]["name"], "Lamp");
    }

    #[tokio::test]
    async fn test_filter_route_is_not_shadowed_by_id_route() {
        let response = app(false)
            .oneshot(
                Request::get("/api/products/filter?minPrice=10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "[]");
    }

    #[tokio::test]
    async fn test_auth_routes_are_served_under_api_prefix() {
        let response = app(false)
            .oneshot(post_json(
                "/api/auth/signup",
                json!({ "email": "a@x.com", "password": "secret" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "User registered successfully.");
    }

    #[tokio::test]
    async fn test_guard_off_allows_anonymous_writes() {
        let response = app(false)
            .oneshot(
                Request::delete("/api/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Product not found.");
    }

    #[tokio::test]
    async fn test_guard_on_rejects_anonymous_writes_but_not_reads() {
        let app = app(true);

        let write = app
            .clone()
            .oneshot(post_json("/api/products", json!({ "name": "Lamp" })))
            .await
            .unwrap();
        assert_eq!(write.status(), StatusCode::UNAUTHORIZED);

        let read = app
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(read.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_guard_on_accepts_token_from_login() {
        let app = app(true);

        app.clone()
            .oneshot(post_json(
                "/api/auth/signup",
                json!({ "email": "a@x.com", "password": "secret" }),
            ))
            .await
            .unwrap();
        let login = app
            .clone()
            .oneshot(post_json(
                "/api/auth/login",
                json!({ "email": "a@x.com", "password": "secret" }),
            ))
            .await
            .unwrap();
        let token: Value = serde_json::from_str(&body_text(login).await).unwrap();
        let token = token["token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::post("/api/products")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::from(json!({ "name": "Lamp" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_cors_echoes_frontend_origin() {
        let response = app(false)
            .oneshot(
                Request::get("/api/products")
                    .header(header::ORIGIN, ORIGIN)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            ORIGIN
        );
    }

    #[tokio::test]
    async fn test_health_gets_cors_and_security_headers() {
        let response = app(false)
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, ORIGIN)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            ORIGIN
        );
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }
}
