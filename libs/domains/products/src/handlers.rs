use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::{
        ErrorResponse,
        responses::{BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse},
    },
};
use std::sync::Arc;
use utoipa::{OpenApi, ToResponse};

use crate::error::ProductResult;
use crate::models::{Category, CreateCategory, CreateProduct, Product, ProductFilter};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const PRODUCTS_TAG: &str = "products";
const CATEGORIES_TAG: &str = "categories";

#[derive(ToResponse)]
#[response(
    description = "Duplicate name, non-numeric price or unknown category",
    content_type = "application/json",
    examples(
        ("duplicate" = (value = json!({ "error": "Product with this name already exists" }))),
        ("price" = (value = json!({ "error": "Price must be a number" }))),
        ("category" = (value = json!({ "error": "Category not found" })))
    )
)]
pub struct BadRequestProductResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Product not found",
    content_type = "application/json",
    example = json!({ "error": "Product not found" })
)]
pub struct ProductNotFoundResponse(pub ErrorResponse);

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        delete_product,
        list_categories,
        create_category,
    ),
    components(
        schemas(Product, Category, CreateProduct, CreateCategory, ProductFilter, ErrorResponse),
        responses(
            BadRequestProductResponse,
            ProductNotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = PRODUCTS_TAG, description = "Product catalog endpoints"),
        (name = CATEGORIES_TAG, description = "Product category endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product).delete(delete_product))
        .route("/categories", get(list_categories).post(create_category))
        .with_state(shared_service)
}

/// List products, optionally filtered by name
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCTS_TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "Products in ascending id order", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCTS_TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestProductResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORIES_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Category>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "/categories",
    tag = CATEGORIES_TAG,
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> ProductResult<impl IntoResponse> {
    let category = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
