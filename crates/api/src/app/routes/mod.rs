use axum::Router;

pub mod menu_groups;
pub mod orders;
pub mod system;

/// Router for all `/api` endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/orders", orders::router())
        .nest("/menu-groups", menu_groups::router())
}
