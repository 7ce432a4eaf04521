//! Album model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::FrontMatter;

/// One album entry, built from a single content file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// File name without its extension
    pub slug: String,

    pub title: Option<String>,

    pub artist: Option<String>,

    /// Release year
    pub year: Option<i64>,

    /// Position on the shelf, 1 first
    pub ranking: Option<i64>,

    /// Image path or URL, not checked for existence
    pub cover: Option<String>,

    /// Raw markdown body
    pub comment: String,

    pub tags: Vec<String>,

    /// Source file path
    #[serde(skip)]
    pub source: PathBuf,
}

impl Album {
    /// Assemble a record from parsed front-matter and body
    pub fn from_parts(slug: String, fm: FrontMatter, comment: &str, source: PathBuf) -> Self {
        Self {
            slug,
            title: fm.title,
            artist: fm.artist,
            year: fm.year,
            ranking: fm.ranking,
            cover: fm.cover,
            comment: comment.to_string(),
            tags: fm.tags,
            source,
        }
    }

    /// Title, or empty when absent
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Artist, or empty when absent
    pub fn artist_str(&self) -> &str {
        self.artist.as_deref().unwrap_or("")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
pub(crate) fn sample_album(
    slug: &str,
    title: &str,
    artist: &str,
    ranking: i64,
    tags: &[&str],
) -> Album {
    Album {
        slug: slug.to_string(),
        title: Some(title.to_string()),
        artist: Some(artist.to_string()),
        year: None,
        ranking: Some(ranking),
        cover: None,
        comment: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        source: PathBuf::from(format!("{}.md", slug)),
    }
}
