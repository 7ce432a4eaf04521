//! Create a new album file

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::FrontMatter;
use crate::error::SiteError;
use crate::Site;

/// Metadata for a freshly created album
#[derive(Debug, Clone, Default)]
pub struct NewAlbum {
    pub title: String,
    pub artist: Option<String>,
    pub year: Option<i64>,
    pub ranking: Option<i64>,
    pub cover: Option<String>,
    pub tags: Vec<String>,
}

/// Write `<content_dir>/<slugified title>.md` and return its path
pub fn create_album(site: &Site, album: NewAlbum) -> Result<PathBuf> {
    let slug = slug::slugify(&album.title);
    let file_path = site.content_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        return Err(SiteError::AlbumExists(file_path).into());
    }

    fs::create_dir_all(&site.content_dir)?;

    let fm = FrontMatter {
        slug: Some(slug),
        title: Some(album.title),
        artist: album.artist,
        year: album.year,
        ranking: album.ranking,
        cover: album.cover,
        tags: album.tags,
    };

    fs::write(&file_path, fm.to_document("\n")?)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
