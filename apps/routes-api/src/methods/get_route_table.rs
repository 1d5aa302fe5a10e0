use axum::{extract::State, Json};

use crate::methods::entities::RouteTableResponse;
use crate::methods::routes::ROUTES_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = ROUTES_PATH,
    tag = "routes",
    responses(
        (status = 200, description = "The full route table", body = RouteTableResponse),
    )
)]
pub async fn get_route_table(State(state): State<AppState>) -> Json<RouteTableResponse> {
    tracing::debug!(env = %state.env, version = state.routes.version, "serving route table");
    Json(RouteTableResponse::from(state.routes))
}
