mod dispatch;
mod embeds;
mod sanitize;

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::application::render::diagnostics::{DiagnosticsSink, TracingDiagnostics};
use crate::application::render::types::{ElementRenderService, RenderContext, RenderError};
use crate::domain::elements::{ContentBlock, Element, UnsupportedBlock};
use crate::presentation::elements::RenderedNode;

pub use sanitize::{AmmoniaCleaner, HtmlCleaner};

use dispatch::dispatch;

/// Maps article content blocks to component views.
///
/// Every markup-bearing field is passed through the cleaner exactly once before
/// dispatch. Unsupported blocks are reported to the diagnostics sink and
/// dropped, unless they are marked mandatory, which aborts the whole render.
pub struct ElementRenderer {
    cleaner: Arc<dyn HtmlCleaner>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl ElementRenderer {
    pub fn new(cleaner: Arc<dyn HtmlCleaner>, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            cleaner,
            diagnostics,
        }
    }

    fn from_config(config: &RenderPipelineConfig) -> Self {
        Self::new(
            Arc::new(AmmoniaCleaner::new(config.base_url.clone())),
            Arc::new(TracingDiagnostics),
        )
    }

    /// The cleaner used for body markup, shared with other article fields.
    pub fn cleaner(&self) -> Arc<dyn HtmlCleaner> {
        Arc::clone(&self.cleaner)
    }
}

impl Default for ElementRenderer {
    fn default() -> Self {
        Self::from_config(&RenderPipelineConfig::default())
    }
}

/// Per-block result of the dispatch stage.
enum BlockOutcome {
    Rendered(RenderedNode),
    Omitted,
    Fatal(RenderError),
}

/// A block after the cleaning stage.
enum Prepared<'a> {
    Supported(Element),
    Unsupported(&'a UnsupportedBlock),
}

impl ElementRenderService for ElementRenderer {
    fn render(
        &self,
        blocks: &[ContentBlock],
        context: &RenderContext,
    ) -> Result<Vec<RenderedNode>, RenderError> {
        let prepared = sanitize_stage(blocks, self.cleaner.as_ref());

        let outcomes = prepared
            .into_iter()
            .map(|block| dispatch_stage(block, context, self.diagnostics.as_ref()));

        let nodes = reduce_stage(outcomes)?;

        debug!(
            target = "application::render::elements",
            blocks = blocks.len(),
            rendered = nodes.len(),
            "Rendered article elements"
        );

        Ok(nodes)
    }
}

fn sanitize_stage<'a>(blocks: &'a [ContentBlock], cleaner: &dyn HtmlCleaner) -> Vec<Prepared<'a>> {
    blocks
        .iter()
        .map(|block| match block {
            ContentBlock::Supported(element) => {
                let mut element = element.clone();
                for field in element.html_fields_mut() {
                    *field = cleaner.clean(field.as_str());
                }
                Prepared::Supported(element)
            }
            ContentBlock::Unsupported(unsupported) => Prepared::Unsupported(unsupported),
        })
        .collect()
}

fn dispatch_stage(
    block: Prepared<'_>,
    context: &RenderContext,
    diagnostics: &dyn DiagnosticsSink,
) -> BlockOutcome {
    match block {
        Prepared::Supported(element) => BlockOutcome::Rendered(dispatch(element, context)),
        Prepared::Unsupported(unsupported) => {
            diagnostics.record(unsupported);
            if unsupported.is_mandatory {
                BlockOutcome::Fatal(RenderError::MandatoryContent {
                    tag: unsupported.tag.clone(),
                })
            } else {
                BlockOutcome::Omitted
            }
        }
    }
}

fn reduce_stage(
    outcomes: impl Iterator<Item = BlockOutcome>,
) -> Result<Vec<RenderedNode>, RenderError> {
    let mut nodes = Vec::new();
    for outcome in outcomes {
        match outcome {
            BlockOutcome::Rendered(node) => nodes.push(node),
            BlockOutcome::Omitted => {}
            BlockOutcome::Fatal(err) => return Err(err),
        }
    }
    Ok(nodes)
}

#[derive(Debug, Clone, Default)]
pub struct RenderPipelineConfig {
    pub base_url: Option<Url>,
}

impl From<&crate::config::RenderSettings> for RenderPipelineConfig {
    fn from(settings: &crate::config::RenderSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderConfigError {
    #[error("element renderer already configured")]
    AlreadyConfigured,
}

static RENDER_PIPELINE_CONFIG: OnceCell<RenderPipelineConfig> = OnceCell::new();

static ELEMENT_RENDERER: Lazy<Arc<ElementRenderer>> =
    Lazy::new(|| Arc::new(ElementRenderer::from_config(&active_render_config())));

/// Must be called before the first [`element_renderer`] access to take effect.
pub fn configure_element_renderer(config: RenderPipelineConfig) -> Result<(), RenderConfigError> {
    RENDER_PIPELINE_CONFIG
        .set(config)
        .map_err(|_| RenderConfigError::AlreadyConfigured)
}

/// Access the shared element renderer, initialised on first use.
pub fn element_renderer() -> Arc<ElementRenderer> {
    Arc::clone(&ELEMENT_RENDERER)
}

fn active_render_config() -> RenderPipelineConfig {
    RENDER_PIPELINE_CONFIG.get().cloned().unwrap_or_default()
}
