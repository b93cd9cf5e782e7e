//! Content elements as delivered in article documents.
//!
//! Each element record is discriminated by its `_type` field. Tags are accepted
//! either fully qualified (`model.dotcomrendering.pageElements.TextBlockElement`)
//! or in their short form (`TextBlockElement`). Records whose tag is outside the
//! supported set are kept as [`UnsupportedBlock`] so callers can decide whether
//! the document can still be shown.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::Value;

pub const TAG_FIELD: &str = "_type";
pub const MANDATORY_FIELD: &str = "isMandatory";
pub const QUALIFIED_TAG_PREFIX: &str = "model.dotcomrendering.pageElements.";

/// Short names of every element kind the renderer knows how to display.
pub const SUPPORTED_TAGS: [&str; 26] = [
    "AtomEmbedMarkupBlockElement",
    "AtomEmbedUrlBlockElement",
    "AudioAtomBlockElement",
    "BlockquoteBlockElement",
    "CommentBlockElement",
    "ContentAtomBlockElement",
    "DisclaimerBlockElement",
    "EmbedBlockElement",
    "GuideBlockElement",
    "GuVideoBlockElement",
    "ImageBlockElement",
    "InstagramBlockElement",
    "MapBlockElement",
    "ProfileBlockElement",
    "PullquoteBlockElement",
    "QABlockElement",
    "RichLinkBlockElement",
    "SoundcloudBlockElement",
    "SubheadingBlockElement",
    "TextBlockElement",
    "TimelineBlockElement",
    "TweetBlockElement",
    "VideoFacebookBlockElement",
    "VideoVimeoBlockElement",
    "VideoYoutubeBlockElement",
    "YoutubeBlockElement",
];

/// Resolve a raw `_type` value to its short supported name, if any.
pub fn supported_tag(tag: &str) -> Option<&'static str> {
    let short = tag.strip_prefix(QUALIFIED_TAG_PREFIX).unwrap_or(tag);
    SUPPORTED_TAGS
        .iter()
        .copied()
        .find(|candidate| *candidate == short)
}

/// One content block of an article body.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Supported(Element),
    Unsupported(UnsupportedBlock),
}

impl ContentBlock {
    /// Tag as it appeared in the document (short form for supported elements).
    pub fn tag(&self) -> &str {
        match self {
            ContentBlock::Supported(element) => element.tag(),
            ContentBlock::Unsupported(block) => block.tag.as_str(),
        }
    }
}

impl From<Element> for ContentBlock {
    fn from(element: Element) -> Self {
        ContentBlock::Supported(element)
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut raw = Value::deserialize(deserializer)?;
        let tag = match raw.get(TAG_FIELD) {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let Some(short) = supported_tag(&tag) else {
            return Ok(ContentBlock::Unsupported(UnsupportedBlock::from_raw(tag, raw)));
        };

        if let Some(object) = raw.as_object_mut() {
            object.insert(
                TAG_FIELD.to_string(),
                Value::String(format!("{QUALIFIED_TAG_PREFIX}{short}")),
            );
        }

        Element::deserialize(raw)
            .map(ContentBlock::Supported)
            .map_err(|err| D::Error::custom(format!("malformed `{short}`: {err}")))
    }
}

impl Serialize for ContentBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ContentBlock::Supported(element) => element.serialize(serializer),
            ContentBlock::Unsupported(block) => block.raw.serialize(serializer),
        }
    }
}

/// A record whose tag the renderer does not recognise. The raw record is kept
/// verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedBlock {
    pub tag: String,
    pub is_mandatory: bool,
    pub raw: Value,
}

impl UnsupportedBlock {
    /// The mandatory flag follows loose truthiness, so `"true"` or `1` count
    /// as set while `""`, `0` and `null` do not.
    pub fn from_raw(tag: impl Into<String>, raw: Value) -> Self {
        let is_mandatory = raw.get(MANDATORY_FIELD).is_some_and(is_truthy);
        Self {
            tag: tag.into(),
            is_mandatory,
            raw,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Element {
    #[serde(rename = "model.dotcomrendering.pageElements.AtomEmbedMarkupBlockElement")]
    AtomEmbedMarkup(AtomEmbedMarkupBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.AtomEmbedUrlBlockElement")]
    AtomEmbedUrl(AtomEmbedUrlBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.AudioAtomBlockElement")]
    AudioAtom(AudioAtomBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.BlockquoteBlockElement")]
    Blockquote(HtmlBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.CommentBlockElement")]
    Comment(CommentBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.ContentAtomBlockElement")]
    ContentAtom(ContentAtomBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.DisclaimerBlockElement")]
    Disclaimer(HtmlBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.EmbedBlockElement")]
    Embed(EmbedBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.GuideBlockElement")]
    Guide(ExpandableAtomElement),
    #[serde(rename = "model.dotcomrendering.pageElements.GuVideoBlockElement")]
    GuVideo(GuVideoBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.ImageBlockElement")]
    Image(ImageBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.InstagramBlockElement")]
    Instagram(InstagramBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.MapBlockElement")]
    Map(MapBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.ProfileBlockElement")]
    Profile(ExpandableAtomElement),
    #[serde(rename = "model.dotcomrendering.pageElements.PullquoteBlockElement")]
    Pullquote(PullquoteBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.QABlockElement")]
    QuestionAnswer(ExpandableAtomElement),
    #[serde(rename = "model.dotcomrendering.pageElements.RichLinkBlockElement")]
    RichLink(RichLinkBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.SoundcloudBlockElement")]
    Soundcloud(SoundcloudBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.SubheadingBlockElement")]
    Subheading(HtmlBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.TextBlockElement")]
    Text(HtmlBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.TimelineBlockElement")]
    Timeline(TimelineBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.TweetBlockElement")]
    Tweet(TweetBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.VideoFacebookBlockElement")]
    VideoFacebook(VideoFacebookBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.VideoVimeoBlockElement")]
    VideoVimeo(ExternalVideoBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.VideoYoutubeBlockElement")]
    VideoYoutube(ExternalVideoBlockElement),
    #[serde(rename = "model.dotcomrendering.pageElements.YoutubeBlockElement")]
    YoutubeAtom(YoutubeBlockElement),
}

impl Element {
    /// Short tag name, matching an entry of [`SUPPORTED_TAGS`].
    pub fn tag(&self) -> &'static str {
        match self {
            Element::AtomEmbedMarkup(_) => "AtomEmbedMarkupBlockElement",
            Element::AtomEmbedUrl(_) => "AtomEmbedUrlBlockElement",
            Element::AudioAtom(_) => "AudioAtomBlockElement",
            Element::Blockquote(_) => "BlockquoteBlockElement",
            Element::Comment(_) => "CommentBlockElement",
            Element::ContentAtom(_) => "ContentAtomBlockElement",
            Element::Disclaimer(_) => "DisclaimerBlockElement",
            Element::Embed(_) => "EmbedBlockElement",
            Element::Guide(_) => "GuideBlockElement",
            Element::GuVideo(_) => "GuVideoBlockElement",
            Element::Image(_) => "ImageBlockElement",
            Element::Instagram(_) => "InstagramBlockElement",
            Element::Map(_) => "MapBlockElement",
            Element::Profile(_) => "ProfileBlockElement",
            Element::Pullquote(_) => "PullquoteBlockElement",
            Element::QuestionAnswer(_) => "QABlockElement",
            Element::RichLink(_) => "RichLinkBlockElement",
            Element::Soundcloud(_) => "SoundcloudBlockElement",
            Element::Subheading(_) => "SubheadingBlockElement",
            Element::Text(_) => "TextBlockElement",
            Element::Timeline(_) => "TimelineBlockElement",
            Element::Tweet(_) => "TweetBlockElement",
            Element::VideoFacebook(_) => "VideoFacebookBlockElement",
            Element::VideoVimeo(_) => "VideoVimeoBlockElement",
            Element::VideoYoutube(_) => "VideoYoutubeBlockElement",
            Element::YoutubeAtom(_) => "YoutubeBlockElement",
        }
    }

    /// Fields holding raw markup that must pass through the HTML cleaner.
    pub fn html_fields(&self) -> Vec<&str> {
        match self {
            Element::AtomEmbedMarkup(el) => vec![el.html.as_str()],
            Element::Blockquote(el)
            | Element::Disclaimer(el)
            | Element::Subheading(el)
            | Element::Text(el) => vec![el.html.as_str()],
            Element::Comment(el) => vec![el.body.as_str()],
            Element::Embed(el) => vec![el.html.as_str()],
            Element::Guide(el) | Element::Profile(el) | Element::QuestionAnswer(el) => {
                vec![el.html.as_str()]
            }
            Element::Instagram(el) => vec![el.html.as_str()],
            Element::Pullquote(el) => vec![el.html.as_str()],
            Element::Soundcloud(el) => vec![el.html.as_str()],
            Element::Timeline(el) => el
                .description
                .iter()
                .map(String::as_str)
                .chain(el.events.iter().filter_map(|event| event.body.as_deref()))
                .collect(),
            Element::Tweet(el) => vec![el.html.as_str()],
            Element::AtomEmbedUrl(_)
            | Element::AudioAtom(_)
            | Element::ContentAtom(_)
            | Element::GuVideo(_)
            | Element::Image(_)
            | Element::Map(_)
            | Element::RichLink(_)
            | Element::VideoFacebook(_)
            | Element::VideoVimeo(_)
            | Element::VideoYoutube(_)
            | Element::YoutubeAtom(_) => Vec::new(),
        }
    }

    /// Mutable access to the same fields as [`Element::html_fields`].
    pub fn html_fields_mut(&mut self) -> Vec<&mut String> {
        match self {
            Element::AtomEmbedMarkup(el) => vec![&mut el.html],
            Element::Blockquote(el)
            | Element::Disclaimer(el)
            | Element::Subheading(el)
            | Element::Text(el) => vec![&mut el.html],
            Element::Comment(el) => vec![&mut el.body],
            Element::Embed(el) => vec![&mut el.html],
            Element::Guide(el) | Element::Profile(el) | Element::QuestionAnswer(el) => {
                vec![&mut el.html]
            }
            Element::Instagram(el) => vec![&mut el.html],
            Element::Pullquote(el) => vec![&mut el.html],
            Element::Soundcloud(el) => vec![&mut el.html],
            Element::Timeline(el) => el
                .description
                .iter_mut()
                .chain(el.events.iter_mut().filter_map(|event| event.body.as_mut()))
                .collect(),
            Element::Tweet(el) => vec![&mut el.html],
            Element::AtomEmbedUrl(_)
            | Element::AudioAtom(_)
            | Element::ContentAtom(_)
            | Element::GuVideo(_)
            | Element::Image(_)
            | Element::Map(_)
            | Element::RichLink(_)
            | Element::VideoFacebook(_)
            | Element::VideoVimeo(_)
            | Element::VideoYoutube(_)
            | Element::YoutubeAtom(_) => Vec::new(),
        }
    }
}

/// Text, blockquote, subheading and disclaimer blocks only carry markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlBlockElement {
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomEmbedMarkupBlockElement {
    pub html: String,
    #[serde(default)]
    pub css: Option<String>,
    #[serde(default)]
    pub js: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomEmbedUrlBlockElement {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAtomBlockElement {
    pub id: String,
    pub kicker: String,
    pub track_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBlockElement {
    pub body: String,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    #[serde(rename = "profileURL")]
    pub profile_url: String,
    pub profile_name: String,
    pub permalink: String,
    pub date_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAtomBlockElement {
    pub atom_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedBlockElement {
    pub html: String,
    #[serde(default)]
    pub safe: Option<bool>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Shared shape of guide, profile and Q&A atoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandableAtomElement {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub title: String,
    pub html: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub credit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuVideoBlockElement {
    #[serde(default)]
    pub assets: Vec<VideoAsset>,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAsset {
    pub url: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlockElement {
    pub media: ImageMedia,
    #[serde(default)]
    pub data: ImageData,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub display_credit: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageMedia {
    #[serde(default)]
    pub all_images: Vec<ImageAsset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    #[serde(default)]
    pub fields: ImageFields,
}

/// Image dimensions arrive as strings in the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageFields {
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub is_master: Option<String>,
}

impl ImageAsset {
    pub fn width(&self) -> Option<u32> {
        self.fields.width.as_deref()?.trim().parse().ok()
    }

    pub fn height(&self) -> Option<u32> {
        self.fields.height.as_deref()?.trim().parse().ok()
    }

    pub fn is_master(&self) -> bool {
        self.fields.is_master.as_deref() == Some("true")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageData {
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub credit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramBlockElement {
    pub html: String,
    pub url: String,
    #[serde(default)]
    pub has_caption: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBlockElement {
    pub embed_url: String,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullquoteBlockElement {
    pub html: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichLinkBlockElement {
    pub url: String,
    pub text: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundcloudBlockElement {
    pub html: String,
    pub id: String,
    pub is_track: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBlockElement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub unix_date: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetBlockElement {
    pub html: String,
    pub url: String,
    pub id: String,
    #[serde(default)]
    pub has_media: bool,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFacebookBlockElement {
    pub url: String,
    #[serde(default)]
    pub embed_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
}

/// Vimeo and YouTube embeds referenced by their public page URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalVideoBlockElement {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeBlockElement {
    pub id: String,
    pub asset_id: String,
    pub media_title: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub override_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn block(value: Value) -> ContentBlock {
        serde_json::from_value(value).expect("block should decode")
    }

    #[test]
    fn accepts_short_and_qualified_tags() {
        let short = block(json!({"_type": "TextBlockElement", "html": "<p>a</p>"}));
        let long = block(json!({
            "_type": "model.dotcomrendering.pageElements.TextBlockElement",
            "html": "<p>a</p>"
        }));

        assert_eq!(short, long);
        assert_eq!(short.tag(), "TextBlockElement");
    }

    #[test]
    fn unknown_tags_are_kept_as_unsupported() {
        let decoded = block(json!({
            "_type": "UnknownFutureBlock",
            "isMandatory": true,
            "payload": [1, 2, 3]
        }));

        match decoded {
            ContentBlock::Unsupported(unsupported) => {
                assert_eq!(unsupported.tag, "UnknownFutureBlock");
                assert!(unsupported.is_mandatory);
                assert_eq!(unsupported.raw["payload"], json!([1, 2, 3]));
            }
            other => panic!("expected unsupported block, got {other:?}"),
        }
    }

    fn unsupported(value: Value) -> UnsupportedBlock {
        match block(value) {
            ContentBlock::Unsupported(unsupported) => unsupported,
            other => panic!("expected unsupported block, got {other:?}"),
        }
    }

    #[test]
    fn mandatory_flag_defaults_to_false() {
        let decoded = unsupported(json!({"_type": "UnknownFutureBlock"}));
        assert!(!decoded.is_mandatory);
    }

    #[test]
    fn mandatory_flag_follows_truthiness() {
        for flag in [json!(true), json!("true"), json!("no"), json!(1), json!({})] {
            let decoded = unsupported(json!({"_type": "LiveBlock", "isMandatory": flag}));
            assert!(decoded.is_mandatory, "{flag}");
        }
        for flag in [json!(false), json!(""), json!(0), json!(null)] {
            let decoded = unsupported(json!({"_type": "LiveBlock", "isMandatory": flag}));
            assert!(!decoded.is_mandatory, "{flag}");
        }
    }

    #[test]
    fn malformed_known_block_is_an_error() {
        let result: Result<ContentBlock, _> =
            serde_json::from_value(json!({"_type": "TextBlockElement"}));
        let err = result.expect_err("missing html must fail");
        assert!(err.to_string().contains("TextBlockElement"), "{err}");
    }

    #[test]
    fn untagged_records_are_unsupported() {
        let missing = unsupported(json!({"html": "<p>x</p>", "isMandatory": true}));
        let numeric = unsupported(json!({"_type": 42}));
        let bare = unsupported(json!("stray"));

        assert_eq!(missing.tag, "");
        assert!(missing.is_mandatory);
        assert_eq!(numeric.tag, "42");
        assert_eq!(bare.tag, "");
    }

    #[test]
    fn one_untagged_record_does_not_sink_the_list() {
        let decoded: Vec<ContentBlock> = serde_json::from_value(json!([
            {"_type": "TextBlockElement", "html": "<p>ok</p>"},
            {"html": "<p>no tag</p>"}
        ]))
        .expect("list decodes");

        assert!(matches!(decoded[0], ContentBlock::Supported(Element::Text(_))));
        assert!(matches!(decoded[1], ContentBlock::Unsupported(_)));
    }

    #[test]
    fn supported_tag_list_matches_element_tags() {
        assert_eq!(
            supported_tag("model.dotcomrendering.pageElements.QABlockElement"),
            Some("QABlockElement")
        );
        assert_eq!(supported_tag("QABlockElement"), Some("QABlockElement"));
        assert_eq!(supported_tag("pageElements.QABlockElement"), None);
    }

    #[test]
    fn timeline_html_fields_cover_description_and_event_bodies() {
        let decoded = block(json!({
            "_type": "TimelineBlockElement",
            "id": "t1",
            "title": "Timeline",
            "description": "<p>intro</p>",
            "events": [
                {"title": "One", "date": "2019", "body": "<p>first</p>"},
                {"title": "Two", "date": "2020"}
            ]
        }));

        let ContentBlock::Supported(element) = decoded else {
            panic!("timeline should be supported");
        };
        assert_eq!(element.html_fields(), vec!["<p>intro</p>", "<p>first</p>"]);
    }

    #[test]
    fn image_master_and_dimensions_parse_from_strings() {
        let asset: ImageAsset = serde_json::from_value(json!({
            "url": "https://media.example/master.jpg",
            "fields": {"width": "2000", "height": " 1200", "isMaster": "true"}
        }))
        .expect("asset decodes");

        assert_eq!(asset.width(), Some(2000));
        assert_eq!(asset.height(), Some(1200));
        assert!(asset.is_master());
    }

    #[test]
    fn unsupported_blocks_serialize_verbatim() {
        let raw = json!({"_type": "UnknownFutureBlock", "x": 1});
        let decoded = block(raw.clone());
        assert_eq!(serde_json::to_value(&decoded).expect("encode"), raw);
    }
}
