use utoipa::OpenApi;

use routes_api::app::ApiDoc;
use routes_api::methods::routes::{API_V1_PREFIX, SERVICE_HEALTH_PATH};

#[test]
fn test_openapi_spec_has_all_endpoints() {
    let spec = ApiDoc::openapi();
    let paths = spec.paths.paths;

    // Documented where the router serves them
    assert!(paths.contains_key("/v1/routes"), "Missing /v1/routes path");
    assert!(paths.contains_key("/v1/routes/entries"), "Missing /v1/routes/entries path");
    assert!(paths.contains_key("/v1/routes/resolve"), "Missing /v1/routes/resolve path");
    assert!(paths.contains_key("/health"), "Missing /health path");
    assert_eq!(paths.len(), 4, "Unexpected paths: {:?}", paths.keys().collect::<Vec<_>>());

    for (path, item) in &paths {
        assert!(item.get.is_some(), "Missing GET {path}");
        assert!(item.post.is_none(), "Unexpected POST {path}");
    }
}

#[test]
fn test_openapi_versioned_paths_use_api_prefix() {
    let spec = ApiDoc::openapi();

    for path in spec.paths.paths.keys().filter(|p| p.as_str() != SERVICE_HEALTH_PATH) {
        assert!(
            path.starts_with(&format!("{API_V1_PREFIX}/")),
            "{path} is not under {API_V1_PREFIX}"
        );
    }
}

#[test]
fn test_openapi_spec_has_schemas() {
    let spec = ApiDoc::openapi();
    let components = spec.components.expect("Missing components");

    for schema in [
        "RouteTableResponse",
        "RouteEntryResponse",
        "ResolvedRouteResponse",
        "ErrorResponse",
    ] {
        assert!(components.schemas.contains_key(schema), "Missing schema {schema}");
    }
}

#[test]
fn test_openapi_spec_serializes() {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to generate OpenAPI JSON");

    assert!(json.contains("\"/v1/routes/resolve\""));
    assert!(json.contains("\"routes\""));
}
