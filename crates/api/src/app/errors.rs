use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use kitchenpos_core::DomainError;
use kitchenpos_menus::MenuGroupError;
use kitchenpos_orders::OrderError;

pub fn order_error_to_response(err: OrderError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        OrderError::InvalidOrder(_) => json_error(StatusCode::BAD_REQUEST, "invalid_order", message),
        OrderError::TerminalOrder => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", message)
        }
        OrderError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", message),
        OrderError::Conflict(_) => json_error(StatusCode::CONFLICT, "conflict", message),
        OrderError::Store(_) => {
            tracing::error!("order store failure: {message}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", message)
        }
    }
}

pub fn menu_group_error_to_response(err: MenuGroupError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        MenuGroupError::BlankName => json_error(StatusCode::BAD_REQUEST, "validation_error", message),
        MenuGroupError::Store(_) => {
            tracing::error!("menu group store failure: {message}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", message)
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::Validation(_) => json_error(StatusCode::BAD_REQUEST, "validation_error", message),
        DomainError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, "invalid_id", message),
    }
}

/// Malformed or unparseable JSON body (including unknown order statuses).
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_request", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
