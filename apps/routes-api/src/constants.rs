pub const SERVICE: &str = "routes-api";
pub const ENV: &str = "ENV";

pub const LOCAL_ENV: &str = "local";

pub const ROUTES_API_PORT: &str = "ROUTES_API_PORT";
pub const DEFAULT_PORT: u16 = 3333;

// Middleware configuration
pub const RATE_LIMIT_PER_MINUTE: &str = "RATE_LIMIT_PER_MINUTE";
pub const RATE_LIMIT_BURST: &str = "RATE_LIMIT_BURST";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const MAX_BODY_SIZE_BYTES: &str = "MAX_BODY_SIZE_BYTES";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";

// Query parameters of the resolve endpoint that are not template placeholders
pub const NAME_QUERY_PARAM: &str = "name";
pub const PREFIX_QUERY_PARAM: &str = "prefix";

pub const REQUEST_ID_HEADER: &str = "x-request-id";
