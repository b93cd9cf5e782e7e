//! Domain layer types and invariants.

pub mod article;
pub mod elements;
pub mod error;
pub mod navigation;
pub mod types;
