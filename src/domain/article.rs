//! Article documents: metadata plus the ordered content blocks of the body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    elements::ContentBlock,
    error::DomainError,
    navigation::NavData,
    types::{Design, Display, Pillar},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDocument {
    pub headline: String,
    #[serde(default)]
    pub standfirst: String,
    #[serde(default)]
    pub byline: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub pillar: Pillar,
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub design: Design,
    #[serde(default)]
    pub ad_targeting: Option<AdTargeting>,
    #[serde(default)]
    pub elements: Vec<ContentBlock>,
    #[serde(default)]
    pub nav: NavData,
    #[serde(default)]
    pub subscribe_url: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
}

impl ArticleDocument {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.headline.trim().is_empty() {
            return Err(DomainError::validation("headline must not be empty"));
        }
        if let Some(tag) = self.tags.iter().find(|tag| tag.id.trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "tag `{}` is missing an id",
                tag.title
            )));
        }
        Ok(())
    }

    pub fn is_immersive(&self) -> bool {
        self.display == Display::Immersive
    }

    pub fn contributors(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(|tag| tag.kind == TagKind::Contributor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TagKind,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagKind {
    Contributor,
    Keyword,
    Series,
    Tone,
    Type,
    Publication,
    #[serde(other)]
    Other,
}

/// Advertising parameters forwarded to video players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdTargeting {
    pub ad_unit: String,
    #[serde(default)]
    pub custom_params: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document(value: Value) -> ArticleDocument {
        serde_json::from_value(value).expect("document decodes")
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let doc = document(json!({"headline": "Hello"}));

        assert_eq!(doc.pillar, Pillar::News);
        assert_eq!(doc.display, Display::Standard);
        assert_eq!(doc.design, Design::Article);
        assert!(doc.elements.is_empty());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn blank_headline_fails_validation() {
        let doc = document(json!({"headline": "   "}));
        assert!(matches!(
            doc.validate(),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn contributors_filters_tag_kinds() {
        let doc = document(json!({
            "headline": "Hello",
            "tags": [
                {"id": "profile/jane", "type": "Contributor", "title": "Jane Doe"},
                {"id": "world/europe", "type": "Keyword", "title": "Europe"},
                {"id": "tone/news", "type": "Blog", "title": "Blog"}
            ]
        }));

        let ids: Vec<&str> = doc.contributors().map(|tag| tag.id.as_str()).collect();
        assert_eq!(ids, vec!["profile/jane"]);
        assert_eq!(doc.tags[2].kind, TagKind::Other);
    }
}
