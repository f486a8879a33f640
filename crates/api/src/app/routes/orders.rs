use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};

use kitchenpos_core::OrderId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id/order-status", put(change_order_status))
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::OrderRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let cmd = match body.into_command() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders.create(cmd) {
        Ok(order) => {
            let location = format!("/api/orders/{}", order.id);
            (StatusCode::CREATED, [(header::LOCATION, location)], Json(order)).into_response()
        }
        Err(e) => errors::order_error_to_response(e),
    }
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.orders.list() {
        Ok(orders) => (StatusCode::OK, Json(orders)).into_response(),
        Err(e) => errors::order_error_to_response(e),
    }
}

pub async fn change_order_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    payload: Result<Json<dto::OrderStatusRequest>, JsonRejection>,
) -> axum::response::Response {
    let order_id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let Json(body) = match payload {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match services.orders.change_order_status(order_id, body.into()) {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => errors::order_error_to_response(e),
    }
}
