use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    application::render::RenderError, domain::error::DomainError, infra::error::InfraError,
    presentation::views::TemplateRenderError,
};

/// Error message chain collected for reporting.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, error: &dyn StdError) -> Self {
        let mut messages = vec![error.to_string()];
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self { source, messages }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Short reason label, used for metrics and the CLI summary line.
    pub fn reason(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::Validation { .. }) => "invalid_document",
            AppError::Render(RenderError::MandatoryContent { .. }) => "mandatory_content",
            AppError::Infra(InfraError::Document { .. }) => "malformed_document",
            AppError::Infra(InfraError::Io(_) | InfraError::Read { .. }) => "io",
            AppError::Infra(InfraError::Configuration { .. }) => "configuration",
            AppError::Infra(InfraError::Telemetry(_)) => "telemetry",
            AppError::Template(_) => "template",
            AppError::Unexpected(_) => "unexpected",
        }
    }

    /// Template failures report the view that raised them.
    pub fn report(&self) -> ErrorReport {
        let source = match self {
            AppError::Template(err) => err.origin(),
            _ => "application::error::AppError",
        };
        ErrorReport::from_error(source, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_walks_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = AppError::from(InfraError::Read {
            path: "article.json".into(),
            source: io,
        });

        let report = error.report();

        assert_eq!(report.messages.len(), 2);
        assert!(report.messages[0].contains("article.json"));
        assert_eq!(report.messages[1], "gone");
        assert_eq!(error.reason(), "io");
    }

    #[test]
    fn mandatory_content_keeps_render_message() {
        let error = AppError::from(RenderError::MandatoryContent {
            tag: "LiveBlock".to_string(),
        });

        assert!(error.to_string().starts_with(
            "This page cannot be rendered due to incompatible content that is marked as mandatory"
        ));
        assert_eq!(error.reason(), "mandatory_content");
    }

    #[test]
    fn template_report_names_the_failing_view() {
        let error = AppError::from(TemplateRenderError::new(
            "application::article::ArticleService",
            "Element rendering failed",
            askama::Error::Fmt,
        ));

        let report = error.report();

        assert_eq!(report.source, "application::article::ArticleService");
        assert_eq!(report.messages[0], "Element rendering failed");
        assert_eq!(error.reason(), "template");
    }
}
