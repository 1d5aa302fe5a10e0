// API v1 routes (nested under /v1)
pub const ROUTES_PATH: &str = "/routes";
pub const ROUTE_ENTRIES_PATH: &str = "/routes/entries";
pub const RESOLVE_ROUTE_PATH: &str = "/routes/resolve";

// Root-level service routes (not versioned)
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";

// API version prefix, matches `ROUTES_V1.version`
pub const API_V1_PREFIX: &str = "/v1";
