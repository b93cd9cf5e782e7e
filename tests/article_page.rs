use std::sync::Arc;

use folio::{
    application::{
        article::ArticleService,
        error::AppError,
        render::{
            AmmoniaCleaner, ElementRenderService, ElementRenderer, HtmlCleaner, RenderContext,
            RenderError, TracingDiagnostics,
        },
    },
    domain::article::ArticleDocument,
    infra::document::parse_document,
    presentation::{elements::RenderedNode, views::HeadlineShape},
};
use url::Url;

fn fixture(name: &str, contents: &str) -> ArticleDocument {
    parse_document(name, contents).expect("fixture decodes")
}

fn article() -> ArticleDocument {
    fixture("article.json", include_str!("fixtures/article.json"))
}

fn service_with_base(base: &str) -> (Arc<ElementRenderer>, ArticleService) {
    let base = Url::parse(base).expect("valid base url");
    let cleaner: Arc<dyn HtmlCleaner> = Arc::new(AmmoniaCleaner::new(Some(base)));
    let renderer = Arc::new(ElementRenderer::new(
        Arc::clone(&cleaner),
        Arc::new(TracingDiagnostics),
    ));
    let service = ArticleService::new(renderer.clone(), cleaner, "Folio");
    (renderer, service)
}

#[test]
fn fixture_renders_supported_elements_in_order() {
    let document = article();
    let (renderer, _) = service_with_base("https://news.example/");

    let nodes = renderer
        .render(&document.elements, &RenderContext::for_document(&document))
        .expect("fixture renders");

    let kinds: Vec<&str> = nodes.iter().map(RenderedNode::kind).collect();
    insta::assert_snapshot!(kinds.join("\n"), @r"
    text
    image
    subheading
    pullquote
    rich_link
    video_youtube
    timeline
    expandable
    tweet
    ");
}

#[test]
fn markup_fields_are_cleaned_before_display() {
    let document = article();
    let (renderer, _) = service_with_base("https://news.example/");

    let nodes = renderer
        .render(&document.elements, &RenderContext::for_document(&document))
        .expect("fixture renders");

    let markup: Vec<&str> = nodes.iter().flat_map(RenderedNode::html_fields).collect();
    assert!(markup.iter().all(|html| !html.contains("<script")));
    assert!(markup.iter().all(|html| !html.contains("onclick")));
    assert!(markup[0].contains("href=\"https://news.example/world/weather\""));
    assert!(
        markup
            .iter()
            .any(|html| html.contains("<em>ordered</em>")),
        "timeline event bodies keep their inline markup"
    );
}

#[test]
fn full_page_renders_chrome_and_body() {
    let (_, service) = service_with_base("https://news.example/");

    let page = service.render_page(&article()).expect("page renders");

    assert_eq!(page.headline.shape, HeadlineShape::Standard);
    assert!(page.headline.byline.is_none());
    assert!(!page.standfirst.contains("onerror"));
    assert_eq!(page.body.len(), 9);
    assert_eq!(page.navigation.columns.len(), 4);
    assert!(page.navigation.subscribe.is_some());
    assert!(!page.navigation.show_roundel);

    let html = service.render_html(&article()).expect("html renders");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Storm makes landfall as thousands evacuate"));
    assert!(html.contains("id=\"main-menu-toggle\""));
    assert!(html.contains("https://media.example/storm/master.jpg"));
    assert!(html.contains("youtube-nocookie.com/embed/dQw4w9WgXcQ"));
    assert!(!html.contains("UnknownFutureBlock"));
}

#[test]
fn immersive_comment_keeps_linked_byline() {
    let mut document = article();
    document.display = folio::domain::types::Display::Immersive;
    document.design = folio::domain::types::Design::Comment;
    let (_, service) = service_with_base("https://news.example/");

    let page = service.render_page(&document).expect("page renders");

    assert_eq!(page.headline.shape, HeadlineShape::LightInverted);
    let byline = page.headline.byline.expect("byline shown");
    assert_eq!(
        byline.segments[0].href.as_deref(),
        Some("/profile/jane-doe")
    );
    assert!(page.navigation.show_roundel);
}

#[test]
fn mandatory_unsupported_block_fails_the_page() {
    let document = fixture("mandatory.json", include_str!("fixtures/mandatory.json"));
    let (_, service) = service_with_base("https://news.example/");

    let err = service.render_page(&document).expect_err("mandatory content");

    match err {
        AppError::Render(RenderError::MandatoryContent { tag }) => {
            assert_eq!(tag, "InteractiveLiveScoreboardBlockElement");
        }
        other => panic!("unexpected error: {other}"),
    }
}
