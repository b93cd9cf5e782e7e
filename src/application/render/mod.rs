//! Element rendering for article bodies.
//!
//! The pipeline is pure apart from diagnostics: it accepts decoded content
//! blocks, produces component views in document order and surfaces a single
//! structured error when mandatory content cannot be shown.

mod diagnostics;
mod service;
mod types;

pub use diagnostics::{DiagnosticsSink, TracingDiagnostics};
pub use service::{
    AmmoniaCleaner, ElementRenderer, HtmlCleaner, RenderConfigError, RenderPipelineConfig,
    configure_element_renderer, element_renderer,
};
pub use types::{ElementRenderService, RenderContext, RenderError};
