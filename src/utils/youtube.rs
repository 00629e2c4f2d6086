//! YouTube URL normalization
//!
//! Example videos are entered as whatever URL the admin copied from the
//! browser. The page embeds them through the privacy-enhanced domain.

pub const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";

/// Convert a watch/share/shorts URL into an embed URL.
///
/// Embed URLs and anything unrecognized are returned unchanged.
pub fn youtube_embed_url(url: &str) -> String {
    match youtube_video_id(url) {
        Some(id) => format!("{}{}", EMBED_BASE, id),
        None => url.to_string(),
    }
}

/// Extract the video id from `watch?v=`, `youtu.be/`, `/shorts/` and `/live/` URLs.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let trimmed = url.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);

    let (authority, path_and_query) = without_scheme
        .split_once('/')
        .unwrap_or((without_scheme, ""));
    let authority = authority.to_ascii_lowercase();
    let host = authority.strip_prefix("www.").unwrap_or(&authority);

    let path_and_query = path_and_query.split('#').next().unwrap_or("");
    let (path, query) = path_and_query
        .split_once('?')
        .unwrap_or((path_and_query, ""));

    let raw_id = match host {
        "youtu.be" => path.split('/').next(),
        "youtube.com" | "m.youtube.com" | "music.youtube.com" => {
            if path.trim_end_matches('/') == "watch" {
                query
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("v="))
            } else if let Some(rest) = path
                .strip_prefix("shorts/")
                .or_else(|| path.strip_prefix("live/"))
            {
                rest.split('/').next()
            } else {
                None
            }
        }
        _ => None,
    }?;

    let id = urlencoding::decode(raw_id).ok()?.into_owned();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Some(id)
    } else {
        None
    }
}
