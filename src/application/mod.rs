//! Application services: element rendering and page assembly.

pub mod article;
pub mod error;
pub mod headline;
pub mod navigation;
pub mod render;
