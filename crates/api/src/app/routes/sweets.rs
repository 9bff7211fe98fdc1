use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use sweetshop_inventory::{ShopError, Sweet, SweetId};

use crate::app::{dto, errors, read_shop, write_shop, SharedShop};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_sweets).post(add_sweet))
        .route("/search", get(search_sweets))
        .route("/:id", get(get_sweet).delete(delete_sweet))
        .route("/:id/purchase", post(purchase_sweet))
        .route("/:id/restock", post(restock_sweet))
}

pub async fn list_sweets(Extension(shop): Extension<SharedShop>) -> axum::response::Response {
    let shop = read_shop(&shop);
    (StatusCode::OK, Json(shop.sweets().to_vec())).into_response()
}

pub async fn add_sweet(
    Extension(shop): Extension<SharedShop>,
    Json(body): Json<dto::AddSweetRequest>,
) -> axum::response::Response {
    let sweet = match Sweet::new(
        SweetId(body.sweet_id),
        body.name,
        body.category,
        body.price,
        body.quantity,
    ) {
        Ok(sweet) => sweet,
        Err(e) => return errors::shop_error_to_response(e),
    };

    let stored = sweet.clone();
    if let Err(e) = write_shop(&shop).add(sweet) {
        return errors::shop_error_to_response(e);
    }

    tracing::info!(sweet_id = %stored.id(), "sweet added");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Sweet added successfully",
            "sweet": stored,
        })),
    )
        .into_response()
}

pub async fn get_sweet(
    Extension(shop): Extension<SharedShop>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    let id = SweetId(id);
    let shop = read_shop(&shop);
    match shop.get(id) {
        Some(sweet) => (StatusCode::OK, Json(sweet.clone())).into_response(),
        None => errors::shop_error_to_response(ShopError::NotFound(id)),
    }
}

pub async fn delete_sweet(
    Extension(shop): Extension<SharedShop>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    let id = SweetId(id);
    match write_shop(&shop).delete(id) {
        Ok(_) => {
            tracing::info!(sweet_id = %id, "sweet deleted");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": format!("Sweet with ID {id} deleted successfully"),
                })),
            )
                .into_response()
        }
        Err(e) => errors::shop_error_to_response(e),
    }
}

pub async fn search_sweets(
    Extension(shop): Extension<SharedShop>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let filter = params.into_filter();
    let results = read_shop(&shop).search(&filter);
    (StatusCode::OK, Json(results)).into_response()
}

pub async fn purchase_sweet(
    Extension(shop): Extension<SharedShop>,
    Path(id): Path<u64>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id = SweetId(id);
    match write_shop(&shop).purchase(id, body.quantity) {
        Ok(remaining) => {
            tracing::info!(sweet_id = %id, quantity = body.quantity, remaining, "sweet purchased");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": format!("Purchased {} of sweet ID {id}", body.quantity),
                    "quantity": remaining,
                })),
            )
                .into_response()
        }
        Err(e) => errors::shop_error_to_response(e),
    }
}

pub async fn restock_sweet(
    Extension(shop): Extension<SharedShop>,
    Path(id): Path<u64>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id = SweetId(id);
    match write_shop(&shop).restock(id, body.quantity) {
        Ok(total) => {
            tracing::info!(sweet_id = %id, quantity = body.quantity, total, "sweet restocked");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": format!("Restocked {} of sweet ID {id}", body.quantity),
                    "quantity": total,
                })),
            )
                .into_response()
        }
        Err(e) => errors::shop_error_to_response(e),
    }
}
