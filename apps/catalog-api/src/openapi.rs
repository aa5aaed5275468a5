//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog with name search and categories",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::health::ready),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
struct CatalogDoc;

/// Combined OpenAPI documentation for the catalog API
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = CatalogDoc::openapi();
        doc.merge(domain_products::ApiDoc::openapi());
        doc
    }
}
