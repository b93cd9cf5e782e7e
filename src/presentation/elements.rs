//! Component views for article body elements.
//!
//! Every view owns an askama template under `templates/elements/`. Markup-bearing
//! fields hold HTML that already went through the cleaner and are emitted with
//! the `safe` filter; everything else is escaped by askama.

use askama::Template;

use crate::domain::types::Pillar;

/// One rendered article body component.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedNode {
    AtomEmbedMarkup(AtomEmbedMarkupView),
    AtomEmbedUrl(AtomEmbedUrlView),
    AudioAtom(AudioAtomView),
    Text(TextView),
    Comment(CommentView),
    ContentAtom(ContentAtomView),
    Disclaimer(DisclaimerView),
    Embed(EmbedView),
    Expandable(ExpandableView),
    GuVideo(GuVideoView),
    Image(ImageView),
    Instagram(InstagramView),
    Map(MapView),
    Pullquote(PullquoteView),
    RichLink(RichLinkView),
    Soundcloud(SoundcloudView),
    Subheading(SubheadingView),
    Timeline(TimelineView),
    Tweet(TweetView),
    VideoFacebook(EmbeddedVideoView),
    VideoVimeo(EmbeddedVideoView),
    VideoYoutube(EmbeddedVideoView),
    YoutubeAtom(YoutubeAtomView),
}

impl RenderedNode {
    /// Stable component name, used by diagnostics and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderedNode::AtomEmbedMarkup(_) => "atom_embed_markup",
            RenderedNode::AtomEmbedUrl(_) => "atom_embed_url",
            RenderedNode::AudioAtom(_) => "audio_atom",
            RenderedNode::Text(_) => "text",
            RenderedNode::Comment(_) => "comment",
            RenderedNode::ContentAtom(_) => "content_atom",
            RenderedNode::Disclaimer(_) => "disclaimer",
            RenderedNode::Embed(_) => "embed",
            RenderedNode::Expandable(_) => "expandable",
            RenderedNode::GuVideo(_) => "gu_video",
            RenderedNode::Image(_) => "image",
            RenderedNode::Instagram(_) => "instagram",
            RenderedNode::Map(_) => "map",
            RenderedNode::Pullquote(_) => "pullquote",
            RenderedNode::RichLink(_) => "rich_link",
            RenderedNode::Soundcloud(_) => "soundcloud",
            RenderedNode::Subheading(_) => "subheading",
            RenderedNode::Timeline(_) => "timeline",
            RenderedNode::Tweet(_) => "tweet",
            RenderedNode::VideoFacebook(_) => "video_facebook",
            RenderedNode::VideoVimeo(_) => "video_vimeo",
            RenderedNode::VideoYoutube(_) => "video_youtube",
            RenderedNode::YoutubeAtom(_) => "youtube_atom",
        }
    }

    /// Markup-bearing fields in the order the source element declared them.
    pub fn html_fields(&self) -> Vec<&str> {
        match self {
            RenderedNode::AtomEmbedMarkup(view) => vec![view.html.as_str()],
            RenderedNode::Text(view) => vec![view.html.as_str()],
            RenderedNode::Comment(view) => vec![view.body.as_str()],
            RenderedNode::Disclaimer(view) => vec![view.html.as_str()],
            RenderedNode::Embed(view) => vec![view.html.as_str()],
            RenderedNode::Expandable(view) => vec![view.html.as_str()],
            RenderedNode::Instagram(view) => vec![view.html.as_str()],
            RenderedNode::Pullquote(view) => vec![view.html.as_str()],
            RenderedNode::Soundcloud(view) => vec![view.html.as_str()],
            RenderedNode::Subheading(view) => vec![view.html.as_str()],
            RenderedNode::Timeline(view) => view
                .description
                .iter()
                .map(String::as_str)
                .chain(view.events.iter().filter_map(|event| event.body.as_deref()))
                .collect(),
            RenderedNode::Tweet(view) => vec![view.html.as_str()],
            RenderedNode::AtomEmbedUrl(_)
            | RenderedNode::AudioAtom(_)
            | RenderedNode::ContentAtom(_)
            | RenderedNode::GuVideo(_)
            | RenderedNode::Image(_)
            | RenderedNode::Map(_)
            | RenderedNode::RichLink(_)
            | RenderedNode::VideoFacebook(_)
            | RenderedNode::VideoVimeo(_)
            | RenderedNode::VideoYoutube(_)
            | RenderedNode::YoutubeAtom(_) => Vec::new(),
        }
    }

    pub fn to_html(&self) -> Result<String, askama::Error> {
        match self {
            RenderedNode::AtomEmbedMarkup(view) => view.render(),
            RenderedNode::AtomEmbedUrl(view) => view.render(),
            RenderedNode::AudioAtom(view) => view.render(),
            RenderedNode::Text(view) => view.render(),
            RenderedNode::Comment(view) => view.render(),
            RenderedNode::ContentAtom(view) => view.render(),
            RenderedNode::Disclaimer(view) => view.render(),
            RenderedNode::Embed(view) => view.render(),
            RenderedNode::Expandable(view) => view.render(),
            RenderedNode::GuVideo(view) => view.render(),
            RenderedNode::Image(view) => view.render(),
            RenderedNode::Instagram(view) => view.render(),
            RenderedNode::Map(view) => view.render(),
            RenderedNode::Pullquote(view) => view.render(),
            RenderedNode::RichLink(view) => view.render(),
            RenderedNode::Soundcloud(view) => view.render(),
            RenderedNode::Subheading(view) => view.render(),
            RenderedNode::Timeline(view) => view.render(),
            RenderedNode::Tweet(view) => view.render(),
            RenderedNode::VideoFacebook(view)
            | RenderedNode::VideoVimeo(view)
            | RenderedNode::VideoYoutube(view) => view.render(),
            RenderedNode::YoutubeAtom(view) => view.render(),
        }
    }
}

/// Interactive atom rendered inside a sandboxed frame.
#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/atom_embed_markup.html")]
pub struct AtomEmbedMarkupView {
    pub html: String,
    pub css: Option<String>,
    pub js: Option<String>,
}

impl AtomEmbedMarkupView {
    /// Document loaded into the frame's `srcdoc`; askama escapes it for the attribute.
    pub fn srcdoc(&self) -> String {
        let mut doc = String::new();
        if let Some(css) = self.css.as_deref() {
            doc.push_str("<style>");
            doc.push_str(css);
            doc.push_str("</style>");
        }
        doc.push_str(&self.html);
        if let Some(js) = self.js.as_deref() {
            doc.push_str("<script>");
            doc.push_str(js);
            doc.push_str("</script>");
        }
        doc
    }
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/atom_embed_url.html")]
pub struct AtomEmbedUrlView {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/audio_atom.html")]
pub struct AudioAtomView {
    pub id: String,
    pub kicker: String,
    pub title: Option<String>,
    pub track_url: String,
    pub duration_label: Option<String>,
    pub cover_url: Option<String>,
    pub pillar: Pillar,
}

/// Text paragraphs and block quotes.
#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/text.html")]
pub struct TextView {
    pub html: String,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/comment.html")]
pub struct CommentView {
    pub body: String,
    pub avatar_url: String,
    pub profile_url: String,
    pub profile_name: String,
    pub permalink: String,
    pub date_time: String,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/content_atom.html")]
pub struct ContentAtomView {
    pub atom_id: String,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/disclaimer.html")]
pub struct DisclaimerView {
    pub html: String,
    pub pillar: Pillar,
}

/// Third-party embed. Markup not flagged safe goes into a sandboxed frame.
#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/embed.html")]
pub struct EmbedView {
    pub html: String,
    pub alt: Option<String>,
    pub is_safe: bool,
}

/// Guide, profile and Q&A atoms, collapsed by default.
#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/expandable.html")]
pub struct ExpandableView {
    pub id: String,
    pub label: String,
    pub title: String,
    pub html: String,
    pub img: Option<String>,
    pub credit: String,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/gu_video.html")]
pub struct GuVideoView {
    pub sources: Vec<VideoSourceView>,
    pub caption: String,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoSourceView {
    pub url: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/image.html")]
pub struct ImageView {
    pub src: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: String,
    pub caption: Option<String>,
    pub credit: Option<String>,
    pub role: String,
    pub pillar: Pillar,
}

impl ImageView {
    pub fn has_caption(&self) -> bool {
        self.caption.is_some() || self.credit.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/instagram.html")]
pub struct InstagramView {
    pub html: String,
    pub url: String,
    pub has_caption: bool,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/map.html")]
pub struct MapView {
    pub embed_url: String,
    pub title: String,
    pub caption: String,
    pub width: u32,
    pub height: u32,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/pullquote.html")]
pub struct PullquoteView {
    pub html: String,
    pub attribution: Option<String>,
    pub role: String,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/rich_link.html")]
pub struct RichLinkView {
    pub url: String,
    pub text: String,
    pub prefix: String,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/soundcloud.html")]
pub struct SoundcloudView {
    pub html: String,
    pub player_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/subheading.html")]
pub struct SubheadingView {
    pub html: String,
    pub pillar: Pillar,
    pub is_immersive: bool,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/timeline.html")]
pub struct TimelineView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub events: Vec<TimelineEventView>,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEventView {
    pub title: String,
    pub date: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/tweet.html")]
pub struct TweetView {
    pub html: String,
    pub url: String,
    pub id: String,
    pub pillar: Pillar,
}

/// Facebook, Vimeo and YouTube page embeds. Without a resolvable player URL
/// the view degrades to a plain link.
#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/video_embed.html")]
pub struct EmbeddedVideoView {
    pub provider: &'static str,
    pub player_url: Option<String>,
    pub url: String,
    pub title: String,
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "elements/youtube_atom.html")]
pub struct YoutubeAtomView {
    pub id: String,
    pub title: String,
    pub player_url: Option<String>,
    pub poster: Option<String>,
    pub duration_label: Option<String>,
    pub pillar: Pillar,
}
