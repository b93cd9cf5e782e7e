//! Article presentation layer.
//!
//! Decodes structured article documents, maps their content blocks to
//! component views and renders full pages with askama templates.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
