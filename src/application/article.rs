use std::{sync::Arc, time::Instant};

use metrics::{counter, histogram};
use tracing::{info, warn};

use crate::application::error::AppError;
use crate::application::headline::{byline_view, select_headline};
use crate::application::navigation::{SubscribeLink, build_navigation};
use crate::application::render::{
    ElementRenderService, ElementRenderer, HtmlCleaner, RenderContext, element_renderer,
};
use crate::domain::article::ArticleDocument;
use crate::presentation::elements::RenderedNode;
use crate::presentation::views::{ArticlePageView, ArticleTemplate, TemplateRenderError, render_template};

const SOURCE: &str = "application::article::ArticleService";

/// Assembles full article pages from documents.
#[derive(Clone)]
pub struct ArticleService {
    renderer: Arc<dyn ElementRenderService>,
    cleaner: Arc<dyn HtmlCleaner>,
    site_title: String,
}

impl ArticleService {
    pub fn new(
        renderer: Arc<dyn ElementRenderService>,
        cleaner: Arc<dyn HtmlCleaner>,
        site_title: impl Into<String>,
    ) -> Self {
        Self {
            renderer,
            cleaner,
            site_title: site_title.into(),
        }
    }

    /// Service backed by the shared element renderer and its cleaner.
    pub fn shared(site_title: impl Into<String>) -> Self {
        let renderer: Arc<ElementRenderer> = element_renderer();
        let cleaner = renderer.cleaner();
        Self::new(renderer, cleaner, site_title)
    }

    /// Rendered element fragments in document order.
    pub fn render_body(&self, document: &ArticleDocument) -> Result<Vec<String>, AppError> {
        let nodes = self.render_nodes(document)?;
        nodes_to_html(&nodes).map_err(AppError::from)
    }

    pub fn render_page(&self, document: &ArticleDocument) -> Result<ArticlePageView, AppError> {
        let started = Instant::now();
        let result = self.build_page(document);
        let elapsed = started.elapsed().as_secs_f64() * 1000.0;

        match &result {
            Ok(view) => {
                counter!("folio_articles_rendered_total").increment(1);
                histogram!("folio_article_render_ms").record(elapsed);
                info!(
                    target = "application::article",
                    headline = %view.headline.text,
                    pillar = view.pillar.as_str(),
                    fragments = view.body.len(),
                    elapsed_ms = elapsed,
                    "Article rendered"
                );
            }
            Err(err) => {
                counter!("folio_articles_rejected_total", "reason" => err.reason()).increment(1);
                warn!(
                    target = "application::article",
                    reason = err.reason(),
                    error = %err,
                    "Article rejected"
                );
            }
        }

        result
    }

    /// Full HTML document for the article.
    pub fn render_html(&self, document: &ArticleDocument) -> Result<String, AppError> {
        let view = self.render_page(document)?;
        Ok(render_template(&ArticleTemplate { view })?)
    }

    fn build_page(&self, document: &ArticleDocument) -> Result<ArticlePageView, AppError> {
        document.validate()?;

        let body = self.render_body(document)?;
        let standfirst = self.cleaner.clean(&document.standfirst);

        let byline = document
            .byline
            .as_deref()
            .and_then(|byline| byline_view(byline, document.contributors()));
        let headline = select_headline(
            document.display,
            document.design,
            document.pillar,
            &document.headline,
            byline,
        );

        let navigation = build_navigation(
            &document.nav,
            document.pillar,
            document.display,
            SubscribeLink {
                url: document.subscribe_url.as_deref(),
                edition: document.edition.as_deref(),
            },
        );

        Ok(ArticlePageView {
            site_title: self.site_title.clone(),
            headline,
            standfirst,
            navigation,
            body,
            pillar: document.pillar,
            display: document.display,
        })
    }

    fn render_nodes(&self, document: &ArticleDocument) -> Result<Vec<RenderedNode>, AppError> {
        let context = RenderContext::for_document(document);
        Ok(self.renderer.render(&document.elements, &context)?)
    }
}

fn nodes_to_html(nodes: &[RenderedNode]) -> Result<Vec<String>, TemplateRenderError> {
    nodes
        .iter()
        .map(|node| {
            node.to_html()
                .map_err(|err| TemplateRenderError::new(SOURCE, "Element rendering failed", err))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use serde_json::{Value, json};

    use super::*;
    use crate::application::render::{AmmoniaCleaner, DiagnosticsSink};
    use crate::domain::elements::UnsupportedBlock;
    use crate::presentation::views::HeadlineShape;

    struct SilentSink;

    impl DiagnosticsSink for SilentSink {
        fn record(&self, _block: &UnsupportedBlock) {}
    }

    fn service() -> ArticleService {
        let cleaner: Arc<dyn HtmlCleaner> = Arc::new(AmmoniaCleaner::default());
        let renderer = ElementRenderer::new(Arc::clone(&cleaner), Arc::new(SilentSink));
        ArticleService::new(Arc::new(renderer), cleaner, "Folio")
    }

    fn document(value: Value) -> ArticleDocument {
        serde_json::from_value(value).expect("document decodes")
    }

    #[test]
    fn page_combines_headline_standfirst_and_body() {
        let page = service()
            .render_page(&document(json!({
                "headline": "Storm hits coast",
                "standfirst": "<p>Thousands <b>evacuated</b></p><script>x()</script>",
                "byline": "Jane Doe",
                "design": "comment",
                "pillar": "opinion",
                "tags": [{"id": "profile/jane-doe", "type": "Contributor", "title": "Jane Doe"}],
                "elements": [
                    {"_type": "TextBlockElement", "html": "<p>First</p>"},
                    {"_type": "UnknownFutureBlock"},
                    {"_type": "TextBlockElement", "html": "<p>Second</p>"}
                ]
            })))
            .expect("page renders");

        assert_eq!(page.standfirst, "<p>Thousands <b>evacuated</b></p>");
        assert_eq!(page.body.len(), 2);
        assert!(page.body[0].contains("<p>First</p>"));
        assert_eq!(page.headline.shape, HeadlineShape::Light);
        assert!(page.headline.byline.is_some());
        assert_eq!(page.page_title(), "Storm hits coast | Folio");
    }

    #[test]
    fn blank_headline_is_rejected_before_rendering() {
        let err = service()
            .render_page(&document(json!({"headline": "  "})))
            .expect_err("blank headline");

        assert!(matches!(err, AppError::Domain(_)));
    }

    #[test]
    fn mandatory_content_rejects_page_and_counts_reason() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        let doc = document(json!({
            "headline": "Live",
            "elements": [{"_type": "InteractiveLiveBlock", "isMandatory": true}]
        }));

        let result = metrics::with_local_recorder(&recorder, || service().render_page(&doc));

        assert!(matches!(result, Err(AppError::Render(_))));
        let rejected: Vec<(Vec<String>, u64)> = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter_map(|(composite_key, _, _, value)| match value {
                DebugValue::Counter(count)
                    if composite_key.key().name() == "folio_articles_rejected_total" =>
                {
                    let labels = composite_key
                        .key()
                        .labels()
                        .map(|label| format!("{}={}", label.key(), label.value()))
                        .collect();
                    Some((labels, count))
                }
                _ => None,
            })
            .collect();
        assert_eq!(rejected, vec![(vec!["reason=mandatory_content".to_string()], 1)]);
    }

    #[test]
    fn html_page_includes_navigation_toggle() {
        let html = service()
            .render_html(&document(json!({
                "headline": "Match report",
                "pillar": "sport",
                "nav": {"pillars": [{"title": "Sport", "url": "/sport", "pillar": "sport"}]},
                "elements": [{"_type": "TextBlockElement", "html": "<p>Goal</p>"}]
            })))
            .expect("html renders");

        assert!(html.contains("id=\"main-menu-toggle\""));
        assert!(html.contains("id=\"main-menu\""));
        assert!(html.contains("pillar-link--active"));
        assert!(html.contains("<p>Goal</p>"));
    }
}
