use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use routes_lib::join_path;

use crate::constants::{NAME_QUERY_PARAM, PREFIX_QUERY_PARAM};
use crate::error::{ApiError, ErrorResponse};
use crate::methods::entities::ResolvedRouteResponse;
use crate::methods::routes::RESOLVE_ROUTE_PATH;
use crate::state::AppState;

/// Every query parameter other than `name` and `prefix` is bound to the
/// placeholder of the same name.
#[utoipa::path(
    get,
    path = RESOLVE_ROUTE_PATH,
    tag = "routes",
    params(
        ("name" = String, Query, description = "Dotted route name, e.g. account.balance"),
        ("prefix" = Option<String>, Query, description = "Prefix prepended to the resolved path"),
    ),
    responses(
        (status = 200, description = "Resolved path", body = ResolvedRouteResponse),
        (status = 400, description = "Missing, empty or unknown placeholder value", body = ErrorResponse),
        (status = 404, description = "Unknown route name", body = ErrorResponse),
    )
)]
pub async fn resolve_route(
    State(state): State<AppState>,
    Query(mut query): Query<HashMap<String, String>>,
) -> Result<Json<ResolvedRouteResponse>, ApiError> {
    let name = query
        .remove(NAME_QUERY_PARAM)
        .ok_or_else(|| ApiError::missing_query_param(NAME_QUERY_PARAM))?;
    let prefix = query.remove(PREFIX_QUERY_PARAM).unwrap_or_default();

    let template = state.routes.lookup(&name).map_err(|e| {
        tracing::debug!(env = %state.env, name = %name, error = %e, "route lookup failed");
        ApiError::from(e)
    })?;

    let values: Vec<(String, String)> = query.into_iter().collect();
    let path = template.resolve(&values).map_err(|e| {
        tracing::debug!(env = %state.env, name = %name, error = %e, "route resolution failed");
        ApiError::from(e)
    })?;

    Ok(Json(ResolvedRouteResponse {
        template: template.to_string(),
        path: join_path(&prefix, &path),
        name,
    }))
}
