use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};

/// Sweet identifier (externally assigned, unique within a store).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SweetId(pub u64);

impl core::fmt::Display for SweetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A single shop product record.
///
/// Fields are validated once in [`Sweet::new`]; after that the only mutation
/// is to `quantity`, and only through the store's `purchase`/`restock`.
/// The serialized field names (`sweet_id`, `name`, `category`, `price`,
/// `quantity`) are fixed for compatibility with the presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sweet {
    #[serde(rename = "sweet_id")]
    id: SweetId,
    name: String,
    category: String,
    price: f64,
    quantity: i64,
}

impl Sweet {
    /// Validating constructor: non-empty `name` and `category`, finite
    /// `price >= 0`, `quantity >= 0`. Violations fail with
    /// [`ShopError::InvalidField`] before a value ever reaches a store.
    pub fn new(
        id: SweetId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> ShopResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(ShopError::invalid_field("name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(ShopError::invalid_field("category cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ShopError::invalid_field("price must be a non-negative number"));
        }
        if quantity < 0 {
            return Err(ShopError::invalid_field("quantity must be non-negative"));
        }

        Ok(Self {
            id,
            name,
            category,
            price,
            quantity,
        })
    }

    pub fn id(&self) -> SweetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Store-internal: callers go through `purchase`/`restock`, which
    /// validate before committing.
    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        debug_assert!(quantity >= 0);
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_fields() {
        let sweet = Sweet::new(SweetId(1001), "Kaju Katli", "Nut-Based", 50.0, 20).unwrap();
        assert_eq!(sweet.id(), SweetId(1001));
        assert_eq!(sweet.name(), "Kaju Katli");
        assert_eq!(sweet.category(), "Nut-Based");
        assert_eq!(sweet.price(), 50.0);
        assert_eq!(sweet.quantity(), 20);
    }

    #[test]
    fn new_accepts_zero_price_and_zero_quantity() {
        assert!(Sweet::new(SweetId(1), "Free Sample", "Promo", 0.0, 0).is_ok());
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Sweet::new(SweetId(1), "   ", "Nut-Based", 50.0, 20).unwrap_err();
        match err {
            ShopError::InvalidField(msg) => assert!(msg.contains("name")),
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_blank_category() {
        let err = Sweet::new(SweetId(1), "Kaju Katli", "", 50.0, 20).unwrap_err();
        match err {
            ShopError::InvalidField(msg) => assert!(msg.contains("category")),
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_negative_price() {
        let err = Sweet::new(SweetId(1), "Kaju Katli", "Nut-Based", -0.01, 20).unwrap_err();
        assert!(matches!(err, ShopError::InvalidField(_)));
    }

    #[test]
    fn new_rejects_non_finite_price() {
        assert!(Sweet::new(SweetId(1), "Kaju Katli", "Nut-Based", f64::NAN, 20).is_err());
        assert!(Sweet::new(SweetId(1), "Kaju Katli", "Nut-Based", f64::INFINITY, 20).is_err());
    }

    #[test]
    fn new_rejects_negative_quantity() {
        let err = Sweet::new(SweetId(1), "Kaju Katli", "Nut-Based", 50.0, -1).unwrap_err();
        assert!(matches!(err, ShopError::InvalidField(_)));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let sweet = Sweet::new(SweetId(1001), "Kaju Katli", "Nut-Based", 50.0, 20).unwrap();
        let json = serde_json::to_value(&sweet).unwrap();
        assert_eq!(json["sweet_id"], 1001);
        assert_eq!(json["name"], "Kaju Katli");
        assert_eq!(json["category"], "Nut-Based");
        assert_eq!(json["price"], 50.0);
        assert_eq!(json["quantity"], 20);
    }
}
