use routes_lib::{RouteTable, ROUTES_V1};

#[derive(Debug, Clone)]
pub struct AppState {
    pub routes: RouteTable,
    pub env: String,
}

impl AppState {
    pub fn new(env: impl Into<String>) -> Self {
        Self {
            routes: ROUTES_V1,
            env: env.into(),
        }
    }
}
