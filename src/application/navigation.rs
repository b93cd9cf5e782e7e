use crate::domain::navigation::{NavData, NavLink};
use crate::domain::types::{Display, Pillar};
use crate::presentation::views::{
    NavColumnView, NavLinkView, NavigationView, PillarLinkView, SubscribeView,
};

const MORE_COLUMN_TITLE: &str = "More";

/// Optional subscription call-to-action shown next to the pillar links.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscribeLink<'a> {
    pub url: Option<&'a str>,
    pub edition: Option<&'a str>,
}

pub fn build_navigation(
    nav: &NavData,
    pillar: Pillar,
    display: Display,
    subscribe: SubscribeLink<'_>,
) -> NavigationView {
    let pillars = nav
        .pillars
        .iter()
        .map(|link| PillarLinkView {
            title: link.title.clone(),
            url: link.url.clone(),
            pillar: link.pillar,
            is_active: link.pillar == Some(pillar),
        })
        .collect();

    let mut columns: Vec<NavColumnView> = nav
        .pillars
        .iter()
        .map(|link| NavColumnView {
            title: link.title.clone(),
            pillar: link.pillar,
            links: link.children.iter().map(nav_link).collect(),
        })
        .collect();
    if !nav.other_links.is_empty() {
        columns.push(NavColumnView {
            title: MORE_COLUMN_TITLE.to_string(),
            pillar: None,
            links: nav.other_links.iter().map(nav_link).collect(),
        });
    }

    let subscribe = subscribe
        .url
        .filter(|url| !url.trim().is_empty())
        .map(|url| SubscribeView {
            url: url.to_string(),
            edition: subscribe.edition.map(str::to_owned),
        });

    NavigationView {
        pillars,
        columns,
        brand_extensions: nav.brand_extensions.iter().map(nav_link).collect(),
        subscribe,
        show_roundel: display == Display::Immersive,
    }
}

fn nav_link(link: &NavLink) -> NavLinkView {
    NavLinkView {
        title: link.label().to_string(),
        url: link.url.clone(),
    }
}
