//! Domain error model.

use thiserror::Error;

use crate::sweet::SweetId;

/// Result type used across the inventory domain.
pub type ShopResult<T> = Result<T, ShopError>;

/// Domain-level error.
///
/// All of these are expected, recoverable business conditions; every failing
/// store operation leaves the store unchanged. Infrastructure concerns
/// (serving, IO) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShopError {
    /// A field failed validation at construction time.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// A sweet with this id is already in the store.
    #[error("sweet {0} already exists")]
    DuplicateId(SweetId),

    /// No sweet with this id exists in the store.
    #[error("sweet {0} not found")]
    NotFound(SweetId),

    /// A purchase asked for more than is on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// Purchase/restock quantities must be positive integers.
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i64),
}

impl ShopError {
    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::InvalidField(msg.into())
    }
}
