use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::MiddlewareConfig;
use crate::constants::REQUEST_ID_HEADER;
use crate::error::ErrorResponse;
use crate::methods::entities::{
    AccountRoutesResponse, ResolvedRouteResponse, RouteEntryResponse, RouteTableResponse,
    TransactionRoutesResponse, UserRoutesResponse,
};
use crate::methods::get_route_entries::{__path_get_route_entries, get_route_entries};
use crate::methods::get_route_table::{__path_get_route_table, get_route_table};
use crate::methods::health_check::{__path_health_check, health_check};
use crate::methods::resolve_route::{__path_resolve_route, resolve_route};
use crate::methods::routes::{
    API_V1_PREFIX, OPENAPI_JSON_PATH, RESOLVE_ROUTE_PATH, ROUTES_PATH, ROUTE_ENTRIES_PATH,
    SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH,
};
use crate::state::AppState;

/// Handlers served under the `/v1` nest, documented relative to it.
#[derive(OpenApi)]
#[openapi(paths(get_route_table, get_route_entries, resolve_route))]
pub struct V1Doc;

#[derive(OpenApi)]
#[openapi(
    nest((path = "/v1", api = V1Doc)),
    paths(health_check),
    components(schemas(
        RouteTableResponse, UserRoutesResponse, AccountRoutesResponse,
        TransactionRoutesResponse, RouteEntryResponse, ResolvedRouteResponse,
        ErrorResponse
    )),
    tags(
        (name = "routes", description = "Route table discovery endpoints")
    )
)]
pub struct ApiDoc;

/// Versioned API nested under `/v1`, health and docs at the root.
pub fn build_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route(ROUTES_PATH, get(get_route_table))
        .route(ROUTE_ENTRIES_PATH, get(get_route_entries))
        .route(RESOLVE_ROUTE_PATH, get(resolve_route));

    let root_routes = Router::new()
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));

    Router::new()
        .nest(API_V1_PREFIX, v1_routes)
        .merge(root_routes)
        .with_state(state)
}

/// Applies the middleware stack, inner to outer:
/// Timeout → CORS → Body Limit → Request ID → Trace → Handler
pub fn with_middleware(mut app: Router, config: &MiddlewareConfig) -> Router {
    // 1. Trace layer (innermost - closest to handler)
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    // 2. Request ID layers
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    app = app
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid));

    // 3. Body limit layer
    app = app.layer(RequestBodyLimitLayer::new(config.max_body_size));

    // 4. CORS layer, read-only API
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, x_request_id]);
    let cors_layer = if config.allows_any_origin() {
        cors_layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors_layer.allow_origin(origins)
    };
    app = app.layer(cors_layer);

    // 5. Timeout layer (returns 408 Request Timeout)
    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        config.request_timeout,
    ))
}
