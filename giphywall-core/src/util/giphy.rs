use lazy_static::lazy_static;
use regex::Regex;
use url::{ParseError, Url};

const GIPHY_DOMAIN: &str = "giphy.com";

lazy_static! {
    static ref TRAILING_ID_REGEX: Regex = Regex::new(r"([A-Za-z0-9]+)$").unwrap();
}

/// Prefixes URLs without a scheme with `https://`.
pub fn ensure_protocol(url: &str) -> String {
    let url = url.trim();
    match Url::parse(url) {
        Err(ParseError::RelativeUrlWithoutBase) if !url.is_empty() => format!("https://{url}"),
        _ => url.to_owned(),
    }
}

pub fn is_giphy_url(url: &Url) -> bool {
    url.host_str()
        .map(|host| host == GIPHY_DOMAIN || host.ends_with(&format!(".{GIPHY_DOMAIN}")))
        .unwrap_or(false)
}

/// Returns the Giphy media id from any standard Giphy URL.
///
/// Supported are page URLs like `giphy.com/gifs/<keywords>-<id>`,
/// embed URLs `giphy.com/embed/<id>` and media URLs
/// `media.giphy.com/media/<id>/giphy.gif`.
pub fn extract_gif_id(raw_url: &str) -> Option<String> {
    let url = Url::parse(&ensure_protocol(raw_url)).ok()?;
    if !is_giphy_url(&url) {
        return None;
    }
    let segments: Vec<_> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    let slug = match segments.as_slice() {
        ["media", id, ..] => *id,
        [.., last] => *last,
        [] => return None,
    };
    // For slugs like keyword-keyword-<id> only the last part is the id
    let slug = slug.rsplit('-').next().unwrap_or(slug);
    TRAILING_ID_REGEX
        .captures(slug)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_owned())
}
