use std::{borrow::Cow, collections::HashSet};

use ammonia::{Builder as AmmoniaBuilder, UrlRelative};
use url::{ParseError, Url};

const LINK_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];
const FRAME_SCHEMES: [&str; 2] = ["http", "https"];
const BLOCKED_LINK: &str = "#";

/// The `clean(html) -> html` collaborator. Implementations must be total,
/// deterministic and idempotent.
pub trait HtmlCleaner: Send + Sync {
    fn clean(&self, html: &str) -> String;
}

/// Allow-list cleaner for article body markup.
pub struct AmmoniaCleaner {
    builder: AmmoniaBuilder<'static>,
}

impl AmmoniaCleaner {
    pub fn new(base_url: Option<Url>) -> Self {
        Self {
            builder: build_article_sanitizer(base_url),
        }
    }
}

impl Default for AmmoniaCleaner {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HtmlCleaner for AmmoniaCleaner {
    fn clean(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }
}

pub(crate) fn build_article_sanitizer(base_url: Option<Url>) -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    let tags: HashSet<&'static str> = HashSet::from([
        "a",
        "abbr",
        "b",
        "blockquote",
        "br",
        "caption",
        "cite",
        "code",
        "dd",
        "del",
        "div",
        "dl",
        "dt",
        "em",
        "figcaption",
        "figure",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "hr",
        "i",
        "iframe",
        "img",
        "ins",
        "li",
        "mark",
        "ol",
        "p",
        "pre",
        "q",
        "s",
        "small",
        "span",
        "strong",
        "sub",
        "sup",
        "table",
        "tbody",
        "td",
        "th",
        "thead",
        "time",
        "tr",
        "u",
        "ul",
    ]);
    builder.tags(tags);

    let generic: HashSet<&'static str> =
        HashSet::from(["class", "id", "title", "lang", "dir", "data-link-name"]);
    builder.generic_attributes(generic);

    builder.add_tag_attributes("a", &["href", "target"]);
    builder.add_tag_attributes("img", &["src", "alt", "width", "height", "loading"]);
    builder.add_tag_attributes(
        "iframe",
        &["src", "width", "height", "allowfullscreen", "loading"],
    );
    builder.add_tag_attributes("blockquote", &["cite"]);
    builder.add_tag_attributes("q", &["cite"]);
    builder.add_tag_attributes("time", &["datetime"]);
    builder.add_tag_attributes("th", &["align", "colspan", "rowspan", "scope"]);
    builder.add_tag_attributes("td", &["align", "colspan", "rowspan"]);

    builder.url_schemes(HashSet::from(LINK_SCHEMES));
    builder.link_rel(Some("noopener noreferrer"));
    builder.attribute_filter(|element, attribute, value| {
        if element == "iframe" && attribute == "src" && !has_allowed_scheme(value, &FRAME_SCHEMES) {
            None
        } else {
            Some(Cow::Borrowed(value))
        }
    });

    match base_url {
        Some(base) => {
            builder.url_relative(UrlRelative::RewriteWithBase(base));
        }
        None => {
            builder.url_relative(UrlRelative::PassThrough);
        }
    }

    builder
}

/// Plain URL fields rendered as `href`s follow the same scheme policy as
/// links inside markup. Anything else collapses to `#`.
pub(crate) fn safe_link(url: String) -> String {
    if has_allowed_scheme(&url, &LINK_SCHEMES) {
        url
    } else {
        BLOCKED_LINK.to_string()
    }
}

/// Relative URLs carry no scheme and are left to the base-URL policy.
fn has_allowed_scheme(value: &str, schemes: &[&str]) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => schemes.contains(&url.scheme()),
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_and_event_handlers() {
        let cleaner = AmmoniaCleaner::default();
        let html = cleaner.clean("<p onclick=\"steal()\">Hi<script>alert(1)</script></p>");

        assert_eq!(html, "<p>Hi</p>");
    }

    #[test]
    fn preserves_article_markup() {
        let cleaner = AmmoniaCleaner::default();
        let html = cleaner.clean("<p>A <strong>bold</strong> and <em>calm</em> claim</p>");

        assert_eq!(html, "<p>A <strong>bold</strong> and <em>calm</em> claim</p>");
    }

    #[test]
    fn rejects_javascript_urls() {
        let cleaner = AmmoniaCleaner::default();
        let html = cleaner.clean("<a href=\"javascript:alert(1)\">x</a>");

        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn links_gain_rel_attribute() {
        let cleaner = AmmoniaCleaner::default();
        let html = cleaner.clean("<a href=\"https://example.com\">x</a>");

        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn relative_links_are_rewritten_against_base() {
        let base = Url::parse("https://www.example.com/").expect("valid base");
        let cleaner = AmmoniaCleaner::new(Some(base));
        let html = cleaner.clean("<a href=\"/world/2020/story\">story</a>");

        assert!(html.contains("href=\"https://www.example.com/world/2020/story\""));
    }

    #[test]
    fn embed_iframes_survive_cleaning() {
        let cleaner = AmmoniaCleaner::default();
        let html = cleaner.clean(
            "<iframe src=\"https://www.youtube.com/embed/x\" width=\"560\" height=\"315\" \
             allowfullscreen onload=\"x()\"></iframe>",
        );

        assert!(html.starts_with("<iframe"), "{html}");
        assert!(html.contains("src=\"https://www.youtube.com/embed/x\""), "{html}");
        assert!(html.contains("width=\"560\""), "{html}");
        assert!(!html.contains("onload"), "{html}");
    }

    #[test]
    fn iframes_only_load_web_documents() {
        let cleaner = AmmoniaCleaner::default();

        for src in ["javascript:alert(1)", "mailto:a@example.com", "tel:123"] {
            let html = cleaner.clean(&format!("<iframe src=\"{src}\"></iframe>"));
            assert_eq!(html, "<iframe></iframe>", "{src}");
        }
    }

    #[test]
    fn plain_links_keep_allowed_schemes_only() {
        assert_eq!(safe_link("https://example.com/a".into()), "https://example.com/a");
        assert_eq!(safe_link("/world/story".into()), "/world/story");
        assert_eq!(safe_link("mailto:desk@example.com".into()), "mailto:desk@example.com");
        assert_eq!(safe_link("javascript:alert(1)".into()), "#");
        assert_eq!(safe_link("  JavaScript:alert(1)".into()), "#");
        assert_eq!(safe_link("data:text/html,<b>x</b>".into()), "#");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let cleaner = AmmoniaCleaner::default();
        let once = cleaner.clean("<p>x<img src=\"https://a/b.png\" onerror=\"x()\"><iframe></iframe></p>");
        let twice = cleaner.clean(&once);

        assert_eq!(once, twice);
    }
}
