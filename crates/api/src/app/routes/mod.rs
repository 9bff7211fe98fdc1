pub mod sweets;
pub mod system;
