//! YouTube link normalization for the modal's embedded player.

use reqwest::Url;

/// Host used for every embeddable URL.
pub const EMBED_HOST: &str = "www.youtube.com";

/// Convert a YouTube-family link into `https://www.youtube.com/embed/{id}`.
///
/// Accepted shapes:
/// - `https://youtu.be/{id}`
/// - `https://youtube.com/shorts/{id}`
/// - `https://www.youtube.com/watch?v={id}`
///
/// Anything else, including unparsable input and empty ids, yields `None`.
pub fn to_embed_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();

    let id = if host == "youtu.be" || host.ends_with(".youtu.be") {
        url.path()
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string()
    } else if is_youtube_host(&host) {
        if let Some(rest) = url.path().strip_prefix("/shorts/") {
            rest.split('/').next().unwrap_or_default().to_string()
        } else {
            url.query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())?
        }
    } else {
        return None;
    };

    if id.is_empty() {
        return None;
    }
    Some(format!("https://{EMBED_HOST}/embed/{id}"))
}

fn is_youtube_host(host: &str) -> bool {
    host == "youtube.com"
        || host.ends_with(".youtube.com")
        || host == "youtube-nocookie.com"
        || host.ends_with(".youtube-nocookie.com")
}
