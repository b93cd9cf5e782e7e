pub mod elements;
pub mod views;
