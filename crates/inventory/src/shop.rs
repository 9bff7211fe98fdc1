use crate::error::{ShopError, ShopResult};
use crate::sweet::{Sweet, SweetId};

/// Conjunctive search filter: a sweet must satisfy every provided criterion
/// to be included. Absent fields impose no constraint.
#[derive(Debug, Default, Clone)]
pub struct SearchFilter {
    /// Case-insensitive substring match against the sweet's name.
    pub name: Option<String>,
    /// Case-insensitive exact match against the sweet's category.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub price_min: Option<f64>,
    /// Inclusive upper price bound.
    pub price_max: Option<f64>,
}

impl SearchFilter {
    fn matches(&self, sweet: &Sweet) -> bool {
        if let Some(name) = &self.name {
            if !sweet.name().to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if sweet.category().to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if sweet.price() < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if sweet.price() > max {
                return false;
            }
        }
        true
    }
}

/// The in-memory inventory store.
///
/// Insertion-ordered and linearly scanned: the expected catalogue is small,
/// and listing must be deterministic. The store owns every sweet
/// exclusively; quantity changes happen only through [`SweetShop::purchase`]
/// and [`SweetShop::restock`], and every failing operation leaves the store
/// unchanged.
#[derive(Debug, Default)]
pub struct SweetShop {
    sweets: Vec<Sweet>,
}

impl SweetShop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sweet to the store. Fails with [`ShopError::DuplicateId`] if
    /// the id is already taken.
    pub fn add(&mut self, sweet: Sweet) -> ShopResult<()> {
        if self.sweets.iter().any(|s| s.id() == sweet.id()) {
            return Err(ShopError::DuplicateId(sweet.id()));
        }
        self.sweets.push(sweet);
        Ok(())
    }

    /// All sweets, in insertion order.
    pub fn sweets(&self) -> &[Sweet] {
        &self.sweets
    }

    pub fn get(&self, id: SweetId) -> Option<&Sweet> {
        self.sweets.iter().find(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.sweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sweets.is_empty()
    }

    /// Remove the sweet with `id`, returning it. The remaining sweets keep
    /// their relative order.
    pub fn delete(&mut self, id: SweetId) -> ShopResult<Sweet> {
        match self.sweets.iter().position(|s| s.id() == id) {
            Some(idx) => Ok(self.sweets.remove(idx)),
            None => Err(ShopError::NotFound(id)),
        }
    }

    /// Sweets matching every provided criterion, in insertion order. Never
    /// errors: an empty filter returns everything, a filter matching nothing
    /// returns an empty vec.
    pub fn search(&self, filter: &SearchFilter) -> Vec<Sweet> {
        self.sweets
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect()
    }

    /// Decrement stock by `quantity`, returning the remaining quantity.
    ///
    /// Non-positive quantities are rejected with
    /// [`ShopError::InvalidQuantity`] (a negative "purchase" must not grow
    /// stock), and a purchase that would take stock below zero is rejected
    /// in full with [`ShopError::InsufficientStock`].
    pub fn purchase(&mut self, id: SweetId, quantity: i64) -> ShopResult<i64> {
        if quantity <= 0 {
            return Err(ShopError::InvalidQuantity(quantity));
        }
        let sweet = self.get_mut(id)?;
        let remaining = sweet.quantity() - quantity;
        if remaining < 0 {
            return Err(ShopError::InsufficientStock {
                requested: quantity,
                available: sweet.quantity(),
            });
        }
        sweet.set_quantity(remaining);
        Ok(remaining)
    }

    /// Increment stock by `quantity`, returning the new quantity.
    pub fn restock(&mut self, id: SweetId, quantity: i64) -> ShopResult<i64> {
        if quantity <= 0 {
            return Err(ShopError::InvalidQuantity(quantity));
        }
        let sweet = self.get_mut(id)?;
        let total = sweet.quantity().saturating_add(quantity);
        sweet.set_quantity(total);
        Ok(total)
    }

    fn get_mut(&mut self, id: SweetId) -> ShopResult<&mut Sweet> {
        self.sweets
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(ShopError::NotFound(id))
    }
}
