//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/albums/") // -> "/shelf/albums/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain. Empty when no site `url` is
/// configured.
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    if base.is_empty() {
        return String::new();
    }
    format!("{}{}", base, url_for(config, path))
}

/// Route of the album list
pub fn albums_url(config: &SiteConfig) -> String {
    url_for(config, "albums/")
}

/// Route of one album's detail page
pub fn album_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &album_path(slug))
}

/// Full URL of one album's detail page
pub fn album_permalink(config: &SiteConfig, slug: &str) -> String {
    full_url_for(config, &album_path(slug))
}

fn album_path(slug: &str) -> String {
    format!("albums/{}/", encode_segment(slug))
}

/// Link to a cover image. Only site-absolute paths (`/images/x.jpg`) get the
/// root prefix; URLs with a scheme, protocol-relative URLs and relative
/// paths are emitted unchanged.
pub fn asset_url(config: &SiteConfig, path: &str) -> String {
    if path.starts_with('/') && !path.starts_with("//") {
        url_for(config, path)
    } else {
        path.to_string()
    }
}

/// Percent-encode one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
