//! API Documentation
//!
//! OpenAPI document generation and the Swagger UI viewer.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use super::routes;

/// Display name of the API in the documentation viewer
pub const API_TITLE: &str = "Hello World API";

/// Location of the machine-readable description
pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";

/// Location of the interactive viewer
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hello World API",
        version = "v4",
        description = "Simple RESTful API built with Rust and axum to show how to create RESTful services using a service-oriented architecture.",
        contact(name = "OpsVerse", url = "https://opsverse.io/"),
        license(name = "MIT")
    ),
    paths(routes::hello_world),
    tags(
        (name = "HelloWorld", description = "Greeting endpoint")
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document and the Swagger UI
pub fn router() -> Router {
    SwaggerUi::new(SWAGGER_UI_PATH)
        .url(Url::new(API_TITLE, OPENAPI_JSON_PATH), ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_info() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, API_TITLE);
        assert_eq!(doc.info.version, "v4");

        let contact = doc.info.contact.expect("contact should be set");
        assert_eq!(contact.name.as_deref(), Some("OpsVerse"));
        assert_eq!(contact.url.as_deref(), Some("https://opsverse.io/"));

        let license = doc.info.license.expect("license should be set");
        assert_eq!(license.name, "MIT");
    }

    #[test]
    fn test_openapi_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/hello"));
        assert_eq!(doc.paths.paths.len(), 1);
    }

    #[test]
    fn test_openapi_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["info"]["title"], "Hello World API");
        assert!(value["openapi"].as_str().unwrap().starts_with("3."));
        assert!(value["paths"]["/hello"]["get"].is_object());
    }
}
