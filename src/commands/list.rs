//! List site content

use anyhow::Result;

use crate::catalog::{all_tags, route_slugs, AlbumFilter};
use crate::content::Album;
use crate::error::SiteError;
use crate::helpers::album_url;
use crate::Site;

/// List albums through the filter, the tag set, or the detail routes
pub fn run(site: &Site, content_type: &str, filter: &AlbumFilter) -> Result<()> {
    match content_type {
        "album" | "albums" => {
            let albums = site.load_albums()?;
            let visible = filter.apply(&albums);
            println!("Albums ({} of {}):", visible.len(), albums.len());
            for album in visible {
                println!("  {}", album_line(album));
            }
        }
        "tag" | "tags" => {
            let albums = site.load_albums()?;
            let tags = all_tags(&albums);
            println!("Tags ({}):", tags.len());
            for tag in tags {
                let count = albums.iter().filter(|a| a.has_tag(&tag)).count();
                println!("  {} ({})", tag, count);
            }
        }
        "route" | "routes" => {
            let slugs = route_slugs(&site.content_dir)?;
            println!("Routes ({}):", slugs.len() + 1);
            println!("  {}", crate::helpers::albums_url(&site.config));
            for slug in slugs {
                println!("  {}", album_url(&site.config, &slug));
            }
        }
        _ => return Err(SiteError::UnknownListType(content_type.to_string()).into()),
    }

    Ok(())
}

/// One line of the album listing
fn album_line(album: &Album) -> String {
    let rank = album
        .ranking
        .map(|r| format!("#{}", r))
        .unwrap_or_else(|| "#-".to_string());
    let year = album.year.map(|y| format!(" ({})", y)).unwrap_or_default();
    let tags = if album.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", album.tags.join(", "))
    };

    format!(
        "{} {} - {}{}{} <{}>",
        rank,
        album.title_str(),
        album.artist_str(),
        year,
        tags,
        album.slug
    )
}
