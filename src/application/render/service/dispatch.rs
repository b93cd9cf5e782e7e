use crate::application::render::types::RenderContext;
use crate::domain::elements::{
    Element, ExpandableAtomElement, ExternalVideoBlockElement, ImageAsset, ImageBlockElement,
};
use crate::presentation::elements::{
    AtomEmbedMarkupView, AtomEmbedUrlView, AudioAtomView, CommentView, ContentAtomView,
    DisclaimerView, EmbedView, EmbeddedVideoView, ExpandableView, GuVideoView, ImageView,
    InstagramView, MapView, PullquoteView, RenderedNode, RichLinkView, SoundcloudView,
    SubheadingView, TextView, TimelineEventView, TimelineView, TweetView, VideoSourceView,
    YoutubeAtomView,
};

use super::embeds::{
    duration_label, facebook_player_url, soundcloud_player_url, vimeo_player_url,
    vimeo_video_id, youtube_atom_player_url, youtube_player_url, youtube_video_id,
};
use super::sanitize::safe_link;

const QUESTION_ANSWER_LABEL: &str = "Q&A";
const DEFAULT_IMAGE_ROLE: &str = "inline";
const DEFAULT_PULLQUOTE_ROLE: &str = "supporting";

/// Map one supported element to its component view.
pub(super) fn dispatch(element: Element, context: &RenderContext) -> RenderedNode {
    let pillar = context.pillar;

    match element {
        Element::AtomEmbedMarkup(el) => RenderedNode::AtomEmbedMarkup(AtomEmbedMarkupView {
            html: el.html,
            css: el.css,
            js: el.js,
        }),
        Element::AtomEmbedUrl(el) => RenderedNode::AtomEmbedUrl(AtomEmbedUrlView { url: el.url }),
        Element::AudioAtom(el) => RenderedNode::AudioAtom(AudioAtomView {
            id: el.id,
            kicker: el.kicker,
            title: el.title,
            track_url: el.track_url,
            duration_label: el.duration.map(duration_label),
            cover_url: el.cover_url,
            pillar,
        }),
        Element::Blockquote(el) | Element::Text(el) => RenderedNode::Text(TextView {
            html: el.html,
            pillar,
        }),
        Element::Comment(el) => RenderedNode::Comment(CommentView {
            body: el.body,
            avatar_url: el.avatar_url,
            profile_url: safe_link(el.profile_url),
            profile_name: el.profile_name,
            permalink: safe_link(el.permalink),
            date_time: el.date_time,
        }),
        Element::ContentAtom(el) => {
            RenderedNode::ContentAtom(ContentAtomView { atom_id: el.atom_id })
        }
        Element::Disclaimer(el) => RenderedNode::Disclaimer(DisclaimerView {
            html: el.html,
            pillar,
        }),
        Element::Embed(el) => RenderedNode::Embed(EmbedView {
            html: el.html,
            alt: el.alt,
            is_safe: el.safe.unwrap_or(false),
        }),
        Element::Guide(el) | Element::Profile(el) => {
            let label = el.label.clone().unwrap_or_default();
            RenderedNode::Expandable(expandable(el, label, context))
        }
        Element::QuestionAnswer(el) => RenderedNode::Expandable(expandable(
            el,
            QUESTION_ANSWER_LABEL.to_string(),
            context,
        )),
        Element::GuVideo(el) => RenderedNode::GuVideo(GuVideoView {
            sources: el
                .assets
                .into_iter()
                .map(|asset| VideoSourceView {
                    url: asset.url,
                    mime_type: asset.mime_type,
                })
                .collect(),
            caption: el.caption,
            pillar,
        }),
        Element::Image(el) => RenderedNode::Image(image(el, context)),
        Element::Instagram(el) => RenderedNode::Instagram(InstagramView {
            html: el.html,
            url: safe_link(el.url),
            has_caption: el.has_caption,
        }),
        Element::Map(el) => RenderedNode::Map(MapView {
            embed_url: el.embed_url,
            title: el.title,
            caption: el.caption,
            width: el.width,
            height: el.height,
            pillar,
        }),
        Element::Pullquote(el) => RenderedNode::Pullquote(PullquoteView {
            html: el.html,
            attribution: el.attribution,
            role: el
                .role
                .unwrap_or_else(|| DEFAULT_PULLQUOTE_ROLE.to_string()),
            pillar,
        }),
        Element::RichLink(el) => RenderedNode::RichLink(RichLinkView {
            url: safe_link(el.url),
            text: el.text,
            prefix: el.prefix,
            pillar,
        }),
        Element::Soundcloud(el) => RenderedNode::Soundcloud(SoundcloudView {
            player_url: soundcloud_player_url(&el.id, el.is_track),
            html: el.html,
        }),
        Element::Subheading(el) => RenderedNode::Subheading(SubheadingView {
            html: el.html,
            pillar,
            is_immersive: context.is_immersive,
        }),
        Element::Timeline(el) => RenderedNode::Timeline(TimelineView {
            id: el.id,
            title: el.title,
            description: el.description,
            events: el
                .events
                .into_iter()
                .map(|event| TimelineEventView {
                    title: event.title,
                    date: event.date,
                    body: event.body,
                })
                .collect(),
            pillar,
        }),
        Element::Tweet(el) => RenderedNode::Tweet(TweetView {
            html: el.html,
            url: safe_link(el.url),
            id: el.id,
            pillar,
        }),
        Element::VideoFacebook(el) => RenderedNode::VideoFacebook(EmbeddedVideoView {
            provider: "facebook",
            player_url: el
                .embed_url
                .clone()
                .or_else(|| facebook_player_url(&el.url)),
            title: el.caption.clone().unwrap_or_default(),
            url: safe_link(el.url),
            caption: el.caption,
            width: el.width,
            height: el.height,
            pillar,
        }),
        Element::VideoVimeo(el) => {
            let player_url = vimeo_video_id(&el.url).and_then(|id| vimeo_player_url(&id));
            RenderedNode::VideoVimeo(external_video("vimeo", player_url, el, context))
        }
        Element::VideoYoutube(el) => {
            let player_url = youtube_video_id(&el.url).and_then(|id| youtube_player_url(&id));
            RenderedNode::VideoYoutube(external_video("youtube", player_url, el, context))
        }
        Element::YoutubeAtom(el) => RenderedNode::YoutubeAtom(YoutubeAtomView {
            player_url: youtube_atom_player_url(&el.asset_id, context.ad_targeting.as_ref()),
            id: el.id,
            title: el.media_title,
            poster: el.override_image,
            duration_label: el.duration.map(duration_label),
            pillar,
        }),
    }
}

fn expandable(el: ExpandableAtomElement, label: String, context: &RenderContext) -> ExpandableView {
    ExpandableView {
        id: el.id,
        label,
        title: el.title,
        html: el.html,
        img: el.img,
        credit: el.credit,
        pillar: context.pillar,
    }
}

fn external_video(
    provider: &'static str,
    player_url: Option<String>,
    el: ExternalVideoBlockElement,
    context: &RenderContext,
) -> EmbeddedVideoView {
    EmbeddedVideoView {
        provider,
        player_url,
        title: el
            .title
            .clone()
            .or_else(|| el.caption.clone())
            .unwrap_or_else(|| el.url.clone()),
        url: safe_link(el.url),
        caption: el.caption,
        width: el.width,
        height: el.height,
        pillar: context.pillar,
    }
}

fn image(el: ImageBlockElement, context: &RenderContext) -> ImageView {
    let chosen = pick_image(&el.media.all_images);
    let credit = if el.display_credit.unwrap_or(true) {
        el.data.credit
    } else {
        None
    };

    ImageView {
        src: chosen.map(|asset| asset.url.clone()),
        width: chosen.and_then(ImageAsset::width),
        height: chosen.and_then(ImageAsset::height),
        alt: el.data.alt.unwrap_or_default(),
        caption: el.data.caption,
        credit,
        role: el.role.unwrap_or_else(|| DEFAULT_IMAGE_ROLE.to_string()),
        pillar: context.pillar,
    }
}

/// Prefer the master asset, otherwise the widest one.
fn pick_image(assets: &[ImageAsset]) -> Option<&ImageAsset> {
    assets
        .iter()
        .find(|asset| asset.is_master())
        .or_else(|| assets.iter().max_by_key(|asset| asset.width().unwrap_or(0)))
}
