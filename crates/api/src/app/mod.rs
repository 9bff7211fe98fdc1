//! HTTP API application wiring (axum router + shared state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and query-parameter mapping
//! - `errors.rs`: consistent error responses

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use sweetshop_inventory::SweetShop;

pub mod dto;
pub mod errors;
pub mod routes;

/// Handle to the single store instance shared across handlers.
///
/// Mutating handlers take the write lock, read handlers the read lock, and
/// no handler awaits while holding either, so every operation observes a
/// consistent store.
pub type SharedShop = Arc<RwLock<SweetShop>>;

/// A fresh, empty shared store.
pub fn shared_shop() -> SharedShop {
    Arc::new(RwLock::new(SweetShop::new()))
}

pub fn read_shop(shop: &SharedShop) -> RwLockReadGuard<'_, SweetShop> {
    // A panic can only land between store mutations (each operation
    // validates before it commits), so a poisoned lock still guards a
    // consistent store and can be recovered.
    shop.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_shop(shop: &SharedShop) -> RwLockWriteGuard<'_, SweetShop> {
    shop.write().unwrap_or_else(PoisonError::into_inner)
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests). The store handle is injected explicitly; there is no
/// hidden global instance.
pub fn build_app(shop: SharedShop) -> Router {
    Router::new()
        .route("/", get(routes::system::home))
        .route("/health", get(routes::system::health))
        .nest("/sweets", routes::sweets::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // The browser front-end is served from a different origin.
                .layer(CorsLayer::permissive())
                .layer(Extension(shop)),
        )
}
