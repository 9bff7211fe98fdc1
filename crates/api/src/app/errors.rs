use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use sweetshop_inventory::ShopError;

/// Map a domain error to its HTTP response: duplicate ids are conflicts,
/// missing sweets are not-found, and everything else (insufficient stock
/// included) is a bad request.
pub fn shop_error_to_response(err: ShopError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        ShopError::DuplicateId(_) => json_error(StatusCode::CONFLICT, "duplicate_id", message),
        ShopError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", message),
        ShopError::InvalidField(_) => json_error(StatusCode::BAD_REQUEST, "invalid_field", message),
        ShopError::InvalidQuantity(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_quantity", message)
        }
        ShopError::InsufficientStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_stock", message)
        }
    }
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
