use serde::{Deserialize, Serialize};

use super::types::Pillar;

/// Navigation data shipped with every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NavData {
    #[serde(default)]
    pub pillars: Vec<NavLink>,
    #[serde(default)]
    pub other_links: Vec<NavLink>,
    #[serde(default)]
    pub brand_extensions: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub long_title: Option<String>,
    #[serde(default)]
    pub pillar: Option<Pillar>,
    #[serde(default)]
    pub children: Vec<NavLink>,
}

impl NavLink {
    pub fn label(&self) -> &str {
        self.long_title.as_deref().unwrap_or(&self.title)
    }
}
