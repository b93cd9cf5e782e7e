//! Shared domain enumerations carried by article documents.

use serde::{Deserialize, Serialize};

/// Editorial section an article belongs to. Only affects styling hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    #[default]
    News,
    Opinion,
    Sport,
    Culture,
    Lifestyle,
    Labs,
}

impl Pillar {
    pub fn as_str(self) -> &'static str {
        match self {
            Pillar::News => "news",
            Pillar::Opinion => "opinion",
            Pillar::Sport => "sport",
            Pillar::Culture => "culture",
            Pillar::Lifestyle => "lifestyle",
            Pillar::Labs => "labs",
        }
    }
}

/// Overall page layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    #[default]
    Standard,
    Immersive,
    Showcase,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Standard => "standard",
            Display::Immersive => "immersive",
            Display::Showcase => "showcase",
        }
    }
}

/// Editorial design of an article; decides headline and byline treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Design {
    #[default]
    Article,
    Media,
    Review,
    Analysis,
    Comment,
    Feature,
    Live,
    Recipe,
    MatchReport,
    Interview,
    GuardianView,
    Quiz,
    PrintShop,
    /// Designs this renderer does not know get the standard treatment.
    #[serde(other)]
    Unknown,
}

impl Design {
    pub fn as_str(self) -> &'static str {
        match self {
            Design::Article => "article",
            Design::Media => "media",
            Design::Review => "review",
            Design::Analysis => "analysis",
            Design::Comment => "comment",
            Design::Feature => "feature",
            Design::Live => "live",
            Design::Recipe => "recipe",
            Design::MatchReport => "match_report",
            Design::Interview => "interview",
            Design::GuardianView => "guardian_view",
            Design::Quiz => "quiz",
            Design::PrintShop => "print_shop",
            Design::Unknown => "unknown",
        }
    }
}
