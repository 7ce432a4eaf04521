//! Built-in shelf templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Autoescaping is off:
//! every user-authored string is escaped once when the view data is built,
//! and URLs are emitted as-is.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{Album, MarkdownRenderer};
use crate::helpers::{album_permalink, album_url, albums_url, asset_url, full_url_for};

/// Template renderer with the embedded shelf theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("shelf/layout.html")),
            ("albums.html", include_str!("shelf/albums.html")),
            ("album.html", include_str!("shelf/album.html")),
            ("redirect.html", include_str!("shelf/redirect.html")),
            ("admin.html", include_str!("shelf/admin.html")),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(
        result.split_whitespace().collect::<Vec<_>>().join(" "),
    ))
}

/// Tera filter: truncate by character count, never inside an HTML entity
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let mut truncated: String = s.chars().take(length).collect();
        if let Some(amp) = truncated.rfind('&') {
            if !truncated[amp..].contains(';') {
                truncated.truncate(amp);
            }
        }
        Ok(tera::Value::String(format!("{}…", truncated.trim_end())))
    }
}

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub albums_url: String,
    /// Full URL of the list page, empty without a site `url`
    pub albums_permalink: String,
}

impl SiteData {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: html_escape(&config.title),
            description: html_escape(&config.description),
            author: html_escape(&config.author),
            albums_url: albums_url(config),
            albums_permalink: full_url_for(config, "albums/"),
        }
    }
}

/// One album as the templates see it. Absent fields are empty strings.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumData {
    pub slug: String,
    pub url: String,
    pub permalink: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub ranking: String,
    pub cover: String,
    pub tags: Vec<String>,
    /// Tags as a JSON array, escaped for use in an attribute
    pub tags_json: String,
    pub comment_html: String,
}

impl AlbumData {
    pub fn new(config: &SiteConfig, album: &Album, markdown: &MarkdownRenderer) -> Self {
        let tags_json = serde_json::to_string(&album.tags).unwrap_or_else(|_| "[]".to_string());

        Self {
            slug: album.slug.clone(),
            url: album_url(config, &album.slug),
            permalink: album_permalink(config, &album.slug),
            title: html_escape(album.title_str()),
            artist: html_escape(album.artist_str()),
            year: album.year.map(|y| y.to_string()).unwrap_or_default(),
            ranking: album.ranking.map(|r| r.to_string()).unwrap_or_default(),
            cover: album
                .cover
                .as_deref()
                .map(|c| html_escape(&asset_url(config, c)))
                .unwrap_or_default(),
            tags: album.tags.iter().map(|t| html_escape(t)).collect(),
            tags_json: html_escape(&tags_json),
            comment_html: markdown.render(&album.comment),
        }
    }
}
