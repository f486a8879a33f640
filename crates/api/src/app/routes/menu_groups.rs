use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(create_menu_group).get(list_menu_groups))
}

pub async fn create_menu_group(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::MenuGroupRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match services.menu_groups.create(body.into()) {
        Ok(group) => (StatusCode::CREATED, Json(group)).into_response(),
        Err(e) => errors::menu_group_error_to_response(e),
    }
}

pub async fn list_menu_groups(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.menu_groups.list() {
        Ok(groups) => (StatusCode::OK, Json(groups)).into_response(),
        Err(e) => errors::menu_group_error_to_response(e),
    }
}
