//! Inventory domain module.
//!
//! This crate contains the business rules for the sweet shop inventory,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The boundary layers (`sweetshop-api`, `sweetshop-console`)
//! call in through [`SweetShop`] and translate [`ShopError`] values into
//! status codes or console messages.

pub mod error;
pub mod shop;
pub mod sweet;

pub use error::{ShopError, ShopResult};
pub use shop::{SearchFilter, SweetShop};
pub use sweet::{Sweet, SweetId};
