pub mod entities;
pub mod get_route_entries;
pub mod get_route_table;
pub mod health_check;
pub mod resolve_route;
pub mod routes;
