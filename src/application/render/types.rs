use thiserror::Error;

use crate::domain::{
    article::{AdTargeting, ArticleDocument},
    elements::ContentBlock,
    types::Pillar,
};
use crate::presentation::elements::RenderedNode;

/// Ambient parameters applied uniformly to every element that accepts them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderContext {
    pub pillar: Pillar,
    pub is_immersive: bool,
    pub ad_targeting: Option<AdTargeting>,
}

impl RenderContext {
    pub fn new(pillar: Pillar) -> Self {
        Self {
            pillar,
            is_immersive: false,
            ad_targeting: None,
        }
    }

    pub fn immersive(mut self, is_immersive: bool) -> Self {
        self.is_immersive = is_immersive;
        self
    }

    pub fn with_ad_targeting(mut self, ad_targeting: AdTargeting) -> Self {
        self.ad_targeting = Some(ad_targeting);
        self
    }

    pub fn for_document(document: &ArticleDocument) -> Self {
        Self {
            pillar: document.pillar,
            is_immersive: document.is_immersive(),
            ad_targeting: document.ad_targeting.clone(),
        }
    }
}

/// Structured errors surfaced by the element renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(
        "This page cannot be rendered due to incompatible content that is marked as mandatory (unsupported element `{tag}`)."
    )]
    MandatoryContent { tag: String },
}

/// Trait exposed by the element renderer. Implementations hold no state between
/// calls: the same blocks and context always produce the same nodes or error.
pub trait ElementRenderService: Send + Sync {
    fn render(
        &self,
        blocks: &[ContentBlock],
        context: &RenderContext,
    ) -> Result<Vec<RenderedNode>, RenderError>;
}
