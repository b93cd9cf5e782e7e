//! Headline and byline treatment chosen from display and design.

use std::cmp::Reverse;

use crate::domain::article::Tag;
use crate::domain::types::{Design, Display, Pillar};
use crate::presentation::views::{BylineSegment, BylineView, HeadlineShape, HeadlineView};

const INTERVIEW_KICKER: &str = "Interview";

pub fn select_headline(
    display: Display,
    design: Design,
    pillar: Pillar,
    headline: &str,
    byline: Option<BylineView>,
) -> HeadlineView {
    let (shape, kicker, show_byline) = match (display, design) {
        (Display::Immersive, Design::PrintShop) => (HeadlineShape::Jumbo, None, false),
        (Display::Immersive, Design::Comment | Design::GuardianView) => {
            (HeadlineShape::LightInverted, None, true)
        }
        (Display::Immersive, _) => (HeadlineShape::JumboInverted, None, false),
        (_, Design::Review | Design::Recipe | Design::Feature) => {
            (HeadlineShape::Bold, None, false)
        }
        (_, Design::Comment | Design::GuardianView) => (HeadlineShape::Light, None, true),
        (_, Design::Analysis) => (HeadlineShape::Underlined, None, false),
        (_, Design::Interview) => (HeadlineShape::Interview, Some(INTERVIEW_KICKER), true),
        _ => (HeadlineShape::Standard, None, false),
    };

    HeadlineView {
        text: headline.to_string(),
        shape,
        pillar,
        kicker,
        byline: byline.filter(|_| show_byline),
    }
}

/// Split a byline into plain text and links to the contributors it names.
///
/// Contributors are matched by their tag title as whole words; where two titles
/// start at the same offset the longer one wins.
pub fn byline_view<'a>(
    byline: &str,
    contributors: impl IntoIterator<Item = &'a Tag>,
) -> Option<BylineView> {
    if byline.trim().is_empty() {
        return None;
    }

    let contributors: Vec<&Tag> = contributors
        .into_iter()
        .filter(|tag| !tag.title.is_empty())
        .collect();

    let mut segments = Vec::new();
    let mut rest = byline;
    while let Some((offset, tag)) = contributors
        .iter()
        .filter_map(|tag| find_name(rest, &tag.title).map(|offset| (offset, *tag)))
        .min_by_key(|(offset, tag)| (*offset, Reverse(tag.title.len())))
    {
        if offset > 0 {
            segments.push(BylineSegment::text(&rest[..offset]));
        }
        segments.push(BylineSegment::link(
            tag.title.as_str(),
            format!("/{}", tag.id),
        ));
        rest = &rest[offset + tag.title.len()..];
    }
    if !rest.is_empty() {
        segments.push(BylineSegment::text(rest));
    }

    Some(BylineView { segments })
}

fn find_name(text: &str, name: &str) -> Option<usize> {
    text.match_indices(name)
        .map(|(offset, _)| offset)
        .find(|&offset| {
            let before = text[..offset].chars().next_back();
            let after = text[offset + name.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
}
