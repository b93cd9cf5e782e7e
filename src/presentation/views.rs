use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::domain::types::{Display, Pillar};

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }

    pub fn origin(&self) -> &'static str {
        self.source
    }
}

pub fn render_template<T: Template>(template: &T) -> Result<String, TemplateRenderError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
    })
}

/// Visual treatment of the article headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineShape {
    Standard,
    Jumbo,
    /// Jumbo text on a black band.
    JumboInverted,
    LightInverted,
    /// Bold text in the pillar colour.
    Bold,
    Light,
    Underlined,
    Interview,
}

impl HeadlineShape {
    pub fn modifier(self) -> &'static str {
        match self {
            HeadlineShape::Standard => "headline--standard",
            HeadlineShape::Jumbo => "headline--jumbo",
            HeadlineShape::JumboInverted => "headline--jumbo-inverted",
            HeadlineShape::LightInverted => "headline--light-inverted",
            HeadlineShape::Bold => "headline--bold",
            HeadlineShape::Light => "headline--light",
            HeadlineShape::Underlined => "headline--underlined",
            HeadlineShape::Interview => "headline--interview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BylineSegment {
    pub text: String,
    pub href: Option<String>,
}

impl BylineSegment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: Some(href.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BylineView {
    pub segments: Vec<BylineSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineView {
    pub text: String,
    pub shape: HeadlineShape,
    pub pillar: Pillar,
    pub kicker: Option<&'static str>,
    pub byline: Option<BylineView>,
}

impl HeadlineView {
    pub fn classes(&self) -> String {
        format!(
            "headline {} pillar--{}",
            self.shape.modifier(),
            self.pillar.as_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillarLinkView {
    pub title: String,
    pub url: String,
    pub pillar: Option<Pillar>,
    pub is_active: bool,
}

impl PillarLinkView {
    pub fn classes(&self) -> String {
        let mut classes = String::from("pillar-link");
        if let Some(pillar) = self.pillar {
            classes.push_str(" pillar--");
            classes.push_str(pillar.as_str());
        }
        if self.is_active {
            classes.push_str(" pillar-link--active");
        }
        classes
    }
}

/// One column of the expanded menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavColumnView {
    pub title: String,
    pub pillar: Option<Pillar>,
    pub links: Vec<NavLinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeView {
    pub url: String,
    pub edition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub pillars: Vec<PillarLinkView>,
    pub columns: Vec<NavColumnView>,
    pub brand_extensions: Vec<NavLinkView>,
    pub subscribe: Option<SubscribeView>,
    pub show_roundel: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePageView {
    pub site_title: String,
    pub headline: HeadlineView,
    pub standfirst: String,
    pub navigation: NavigationView,
    pub body: Vec<String>,
    pub pillar: Pillar,
    pub display: Display,
}

impl ArticlePageView {
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.headline.text, self.site_title)
    }
}

#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    pub view: ArticlePageView,
}
