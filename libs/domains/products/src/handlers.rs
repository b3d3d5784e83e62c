//! HTTP handlers for the Products API
//!
//! Mounted under `/api/products`.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use axum_helpers::{
    AppError, JwtAuth,
    errors::responses::{InternalServerErrorResponse, UnauthorizedResponse},
    jwt_auth_middleware,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const DELETED_MESSAGE: &str = "Product deleted successfully.";
pub const NOT_FOUND_MESSAGE: &str = "Product not found.";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        delete_product,
        filter_products,
    ),
    components(
        schemas(Product, ProductInput, ProductFilter),
        responses(InternalServerErrorResponse, UnauthorizedResponse)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = Arc<ProductService<R>>;

/// Products router with every endpoint public
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);
    read_routes(shared_service.clone()).merge(write_routes(shared_service))
}

/// Products router where POST/PUT/DELETE require a valid bearer token
pub fn guarded_router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    auth: JwtAuth,
) -> Router {
    let shared_service = Arc::new(service);
    let writes = write_routes(shared_service.clone())
        .route_layer(middleware::from_fn_with_state(auth, jwt_auth_middleware));

    read_routes(shared_service).merge(writes)
}

fn read_routes<R: ProductRepository + 'static>(service: SharedService<R>) -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/filter", get(filter_products))
        .route("/{id}", get(get_product))
        .with_state(service)
}

fn write_routes<R: ProductRepository + 'static>(service: SharedService<R>) -> Router {
    Router::new()
        .route("/", post(create_product))
        .route("/{id}", put(update_product).delete(delete_product))
        .with_state(service)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<SharedService<R>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_all_products().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found (empty body)"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<i64>,
) -> ProductResult<Response> {
    Ok(match service.get_product(id).await? {
        Some(product) => Json(product).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// Create a product
///
/// Any `id` in the body is ignored. Storage failures answer 500 with a JSON `null` body.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, description = "Product could not be stored (body is null)")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;

    match service.create_product(input).await {
        Ok(product) => Ok((StatusCode::CREATED, Json(product)).into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create product");
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(None::<Product>)).into_response())
        }
    }
}

/// Replace every field of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, description = "Product not found (body is null)"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<i64>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;

    Ok(match service.update_product(id, input).await? {
        Some(product) => Json(product).into_response(),
        None => (StatusCode::NOT_FOUND, Json(None::<Product>)).into_response(),
    })
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = String, example = "Product deleted successfully."),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, description = "Product not found", body = String, example = "Product not found."),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<i64>,
) -> ProductResult<impl IntoResponse> {
    Ok(if service.delete_product(id).await? {
        (StatusCode::OK, DELETED_MESSAGE)
    } else {
        (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    })
}

/// Filter products by category, price range and rating range
///
/// Every criterion is optional and bounds are inclusive.
#[utoipa::path(
    get,
    path = "/filter",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn filter_products<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.filter_products(filter).await?;
    Ok(Json(products))
}
