use serde::Deserialize;

use sweetshop_inventory::SearchFilter;

// -------------------------
// Request DTOs
// -------------------------

/// Body for `POST /sweets`. Field names match the wire shape of a sweet.
#[derive(Debug, Deserialize)]
pub struct AddSweetRequest {
    pub sweet_id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

/// Body for `POST /sweets/:id/purchase` and `POST /sweets/:id/restock`.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i64,
}

/// Query parameters for `GET /sweets/search`; absent parameters impose no
/// constraint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl SearchParams {
    pub fn into_filter(self) -> SearchFilter {
        SearchFilter {
            name: self.name,
            category: self.category,
            price_min: self.price_min,
            price_max: self.price_max,
        }
    }
}
