use axum::{extract::State, Json};

use crate::methods::entities::RouteEntryResponse;
use crate::methods::routes::ROUTE_ENTRIES_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = ROUTE_ENTRIES_PATH,
    tag = "routes",
    responses(
        (status = 200, description = "Every named template in table order", body = Vec<RouteEntryResponse>),
    )
)]
pub async fn get_route_entries(State(state): State<AppState>) -> Json<Vec<RouteEntryResponse>> {
    Json(
        state
            .routes
            .entries()
            .into_iter()
            .map(RouteEntryResponse::from)
            .collect(),
    )
}
