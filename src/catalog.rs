//! List and detail lookups over a loaded album collection
//!
//! The list page combines a text query and an optional tag with a logical
//! AND. The same rules are mirrored by the inline script of the generated
//! list page, so the static output and the `list` command agree.

use indexmap::IndexSet;
use std::path::Path;

use crate::content::loader::{content_files, slug_for};
use crate::content::Album;
use crate::error::Result;

/// Text query plus at most one selected tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumFilter {
    query: String,
    tag: Option<String>,
}

impl AlbumFilter {
    /// Filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.select_tag(tag);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select a tag, replacing any earlier selection
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.tag = Some(tag.into());
    }

    /// Back to "All"
    pub fn clear_tag(&mut self) {
        self.tag = None;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Case-insensitive substring match on title or artist
    pub fn matches_query(&self, album: &Album) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        album.title_str().to_lowercase().contains(&needle)
            || album.artist_str().to_lowercase().contains(&needle)
    }

    pub fn matches_tag(&self, album: &Album) -> bool {
        match &self.tag {
            Some(tag) => album.has_tag(tag),
            None => true,
        }
    }

    pub fn matches(&self, album: &Album) -> bool {
        self.matches_query(album) && self.matches_tag(album)
    }

    /// Visible albums, in collection order
    pub fn apply<'a>(&self, albums: &'a [Album]) -> Vec<&'a Album> {
        albums.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Every tag across the collection, de-duplicated in order of first
/// appearance
pub fn all_tags(albums: &[Album]) -> Vec<String> {
    albums
        .iter()
        .flat_map(|a| a.tags.iter().cloned())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Resolve one album by slug
pub fn find_by_slug<'a>(albums: &'a [Album], slug: &str) -> Option<&'a Album> {
    albums.iter().find(|a| a.slug == slug)
}

/// Slugs of every detail route, derived from the file names in `dir`
pub fn route_slugs<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    Ok(content_files(dir.as_ref())?
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| slug_for(&name.to_string_lossy()))
        .collect())
}
