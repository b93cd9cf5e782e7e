//! Player URL construction for third-party and in-house media embeds.

use std::collections::BTreeMap;

use serde_json::{Value, json};
use url::{Url, form_urlencoded};

use crate::domain::article::AdTargeting;

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";
const VIMEO_PLAYER_BASE: &str = "https://player.vimeo.com/video/";
const FACEBOOK_VIDEO_PLUGIN: &str = "https://www.facebook.com/plugins/video.php";
const SOUNDCLOUD_PLAYER: &str = "https://w.soundcloud.com/player/";

pub(crate) fn youtube_video_id(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");

    let candidate = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_owned),
        "youtube.com" | "youtube-nocookie.com" => {
            let from_query = url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned());
            from_query.or_else(|| {
                let mut segments = url.path_segments()?;
                match segments.next()? {
                    "embed" | "shorts" | "live" => segments.next().map(str::to_owned),
                    _ => None,
                }
            })
        }
        _ => None,
    }?;

    is_video_id(&candidate).then_some(candidate)
}

pub(crate) fn vimeo_video_id(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url).ok()?;
    let host = url.host_str()?.trim_start_matches("www.");
    if host != "vimeo.com" && host != "player.vimeo.com" {
        return None;
    }

    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .filter(|segment| segment.bytes().all(|byte| byte.is_ascii_digit()))
        .map(str::to_owned)
}

pub(crate) fn youtube_player_url(video_id: &str) -> Option<String> {
    Url::parse(YOUTUBE_EMBED_BASE)
        .and_then(|base| base.join(video_id))
        .ok()
        .map(String::from)
}

pub(crate) fn vimeo_player_url(video_id: &str) -> Option<String> {
    Url::parse(VIMEO_PLAYER_BASE)
        .and_then(|base| base.join(video_id))
        .ok()
        .map(String::from)
}

pub(crate) fn facebook_player_url(page_url: &str) -> Option<String> {
    Url::parse(page_url).ok()?;
    Url::parse_with_params(FACEBOOK_VIDEO_PLUGIN, &[("href", page_url)])
        .ok()
        .map(String::from)
}

pub(crate) fn soundcloud_player_url(id: &str, is_track: bool) -> Option<String> {
    if id.is_empty() || !id.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let collection = if is_track { "tracks" } else { "playlists" };
    let api_url = format!("https://api.soundcloud.com/{collection}/{id}");
    Url::parse_with_params(SOUNDCLOUD_PLAYER, &[("url", api_url.as_str())])
        .ok()
        .map(String::from)
}

/// Player URL for a YouTube media atom, carrying the advertising configuration.
pub(crate) fn youtube_atom_player_url(
    asset_id: &str,
    ad_targeting: Option<&AdTargeting>,
) -> Option<String> {
    if !is_video_id(asset_id) {
        return None;
    }
    let mut url = Url::parse(YOUTUBE_EMBED_BASE).ok()?.join(asset_id).ok()?;
    url.query_pairs_mut()
        .append_pair("embed_config", &embed_config(ad_targeting).to_string())
        .append_pair("enablejsapi", "1")
        .append_pair("modestbranding", "1");
    Some(url.into())
}

pub(crate) fn embed_config(ad_targeting: Option<&AdTargeting>) -> Value {
    match ad_targeting {
        Some(targeting) => json!({
            "adsConfig": {
                "adTagParameters": {
                    "iu": targeting.ad_unit,
                    "cust_params": encoded_custom_params(&targeting.custom_params),
                }
            }
        }),
        None => json!({ "adsConfig": { "disableAds": true } }),
    }
}

/// `key=value` pairs joined with `&`, list values joined with `,`, then the
/// whole query percent-encoded once more for embedding as a single parameter.
fn encoded_custom_params(params: &BTreeMap<String, Value>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        let rendered = match value {
            Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(","),
            other => scalar(other),
        };
        query.append_pair(key, &rendered);
    }
    let query = query.finish();
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_video_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_')
}

/// `m:ss` (or `h:mm:ss`) label for a duration in seconds.
pub(crate) fn duration_label(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_youtube_ids_from_common_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://m.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
        ] {
            assert_eq!(youtube_video_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{url}");
        }
        assert_eq!(youtube_video_id("https://example.com/watch?v=abc"), None);
        assert_eq!(youtube_video_id("not a url"), None);
    }

    #[test]
    fn extracts_numeric_vimeo_ids() {
        assert_eq!(
            vimeo_video_id("https://vimeo.com/channels/staffpicks/76979871").as_deref(),
            Some("76979871")
        );
        assert_eq!(vimeo_video_id("https://vimeo.com/channels/staffpicks"), None);
        assert_eq!(vimeo_video_id("https://example.com/76979871"), None);
    }

    #[test]
    fn soundcloud_player_points_at_track_or_playlist() {
        let track = soundcloud_player_url("123", true).expect("track url");
        assert!(track.starts_with("https://w.soundcloud.com/player/?url="));
        assert!(track.contains("tracks%2F123"));

        let playlist = soundcloud_player_url("456", false).expect("playlist url");
        assert!(playlist.contains("playlists%2F456"));

        assert_eq!(soundcloud_player_url("abc", true), None);
    }

    #[test]
    fn embed_config_disables_ads_without_targeting() {
        assert_eq!(
            embed_config(None),
            json!({ "adsConfig": { "disableAds": true } })
        );
    }

    #[test]
    fn embed_config_encodes_custom_params() {
        let targeting = AdTargeting {
            ad_unit: "/59666047/theguardian.com/world".to_string(),
            custom_params: BTreeMap::from([
                ("k".to_string(), json!(["a", "b"])),
                ("sens".to_string(), json!("f")),
            ]),
        };

        let config = embed_config(Some(&targeting));
        assert_eq!(
            config["adsConfig"]["adTagParameters"]["iu"],
            json!("/59666047/theguardian.com/world")
        );
        assert_eq!(
            config["adsConfig"]["adTagParameters"]["cust_params"],
            json!("k%3Da%252Cb%26sens%3Df")
        );
    }

    #[test]
    fn formats_durations() {
        assert_eq!(duration_label(59), "0:59");
        assert_eq!(duration_label(125), "2:05");
        assert_eq!(duration_label(3_725), "1:02:05");
    }
}
