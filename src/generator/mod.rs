//! Generator module - writes the static site using built-in Tera templates

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use tera::Context;
use walkdir::WalkDir;

use crate::catalog::all_tags;
use crate::config::CmsConfig;
use crate::content::{Album, MarkdownRenderer};
use crate::templates::{AlbumData, SiteData, TemplateRenderer};
use crate::ui::UiState;
use crate::Site;

/// Directory of the list and detail routes inside the output
const ALBUMS_DIR: &str = "albums";

/// Directory of the editor entry point inside the output
const ADMIN_DIR: &str = "admin";

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
    ui: UiState,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::new(),
            ui: UiState::new(site.config.default_theme),
        })
    }

    /// Generate the entire site. `albums` must already be in list order.
    pub fn generate(&self, albums: &[Album]) -> Result<()> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir)?;

        // Detail pages of removed albums must not survive a rebuild
        let albums_dir = public_dir.join(ALBUMS_DIR);
        if albums_dir.exists() {
            fs::remove_dir_all(&albums_dir)?;
        }

        self.copy_static_assets()?;

        let site_data = SiteData::new(&self.site.config);
        let album_data: Vec<AlbumData> = albums
            .iter()
            .map(|a| AlbumData::new(&self.site.config, a, &self.markdown))
            .collect();

        self.generate_list_page(&album_data, albums, &site_data)?;
        self.generate_detail_pages(&album_data, &site_data)?;
        self.generate_redirect(&site_data)?;
        self.generate_album_index(albums)?;
        self.generate_admin(&site_data)?;

        Ok(())
    }

    /// Create base context with site and UI state
    fn create_base_context(&self, site_data: &SiteData) -> Context {
        let mut context = Context::new();
        context.insert("site", site_data);
        context.insert("ui", &self.ui.data());
        context
    }

    /// Generate /albums/ with every album and the full tag set
    fn generate_list_page(
        &self,
        album_data: &[AlbumData],
        albums: &[Album],
        site_data: &SiteData,
    ) -> Result<()> {
        let tags: Vec<String> = all_tags(albums)
            .iter()
            .map(|t| crate::templates::html_escape(t))
            .collect();

        let mut context = self.create_base_context(site_data);
        context.insert("albums", album_data);
        context.insert("tags", &tags);

        let html = self.renderer.render("albums.html", &context)?;
        write_page(&self.site.public_dir.join(ALBUMS_DIR), &html)?;
        tracing::info!("Generated album list ({} albums, {} tags)", albums.len(), tags.len());

        Ok(())
    }

    /// Generate /albums/<slug>/ for every album
    fn generate_detail_pages(&self, album_data: &[AlbumData], site_data: &SiteData) -> Result<()> {
        let albums_dir = self.site.public_dir.join(ALBUMS_DIR);

        for album in album_data {
            let mut context = self.create_base_context(site_data);
            context.insert("album", album);

            let html = self
                .renderer
                .render("album.html", &context)
                .with_context(|| format!("Failed to render album '{}'", album.slug))?;
            write_page(&albums_dir.join(&album.slug), &html)?;
            tracing::debug!("Generated album page: {}", album.url);
        }

        tracing::info!("Generated {} album pages", album_data.len());
        Ok(())
    }

    /// Generate the root index that forwards to the list
    fn generate_redirect(&self, site_data: &SiteData) -> Result<()> {
        let context = self.create_base_context(site_data);
        let html = self.renderer.render("redirect.html", &context)?;
        write_page(&self.site.public_dir, &html)?;
        Ok(())
    }

    /// Generate albums.json with the sorted collection
    fn generate_album_index(&self, albums: &[Album]) -> Result<()> {
        let output_path = self.site.public_dir.join("albums.json");
        let json = serde_json::to_string_pretty(albums)?;
        fs::write(&output_path, json)?;
        tracing::info!("Generated albums.json");
        Ok(())
    }

    /// Generate admin/config.yml and admin/index.html for the editor
    fn generate_admin(&self, site_data: &SiteData) -> Result<()> {
        let cms = CmsConfig::albums(&self.site.config);
        cms.validate()?;

        let admin_dir = self.site.public_dir.join(ADMIN_DIR);
        fs::create_dir_all(&admin_dir)?;
        fs::write(admin_dir.join("config.yml"), cms.to_yaml()?)?;

        let mut context = self.create_base_context(site_data);
        context.insert("editor_script", &self.site.config.cms.editor_script);
        let html = self.renderer.render("admin.html", &context)?;
        write_page(&admin_dir, &html)?;

        tracing::info!("Generated editor configuration");
        Ok(())
    }

    /// Copy the static directory (images, etc.) to the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.site.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(())
    }
}

/// Write `dir/index.html`, creating `dir` as needed
fn write_page(dir: &Path, html: &str) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("index.html"), html)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::loader::load_all;
    use tempfile::TempDir;

    fn site_with_albums(files: &[(&str, &str)]) -> (TempDir, Site) {
        let tmp = TempDir::new().unwrap();
        let site = Site::with_config(tmp.path(), SiteConfig::default());
        fs::create_dir_all(&site.content_dir).unwrap();
        for (name, content) in files {
            fs::write(site.content_dir.join(name), content).unwrap();
        }
        (tmp, site)
    }

    fn read(path: impl AsRef<Path>) -> String {
        fs::read_to_string(path).unwrap()
    }

    const OK_COMPUTER: &str = "---\ntitle: OK Computer\nartist: Radiohead\nyear: 1997\nranking: 2\ncover: /images/okc.jpg\ntags: [rock, uk]\n---\nParanoid *androids*.\n";
    const BLUE_TRAIN: &str = "---\ntitle: Blue Train\nartist: John Coltrane\nyear: 1957\nranking: 1\ntags: [jazz]\n---\nHard bop.\n";

    #[test]
    fn test_generate_writes_every_route() {
        let (_tmp, site) = site_with_albums(&[
            ("ok-computer.md", OK_COMPUTER),
            ("blue-train.md", BLUE_TRAIN),
        ]);
        let albums = load_all(&site.content_dir).unwrap();
        Generator::new(&site).unwrap().generate(&albums).unwrap();

        let public = &site.public_dir;
        assert!(public.join("index.html").exists());
        assert!(public.join("albums/index.html").exists());
        assert!(public.join("albums/ok-computer/index.html").exists());
        assert!(public.join("albums/blue-train/index.html").exists());
        assert!(public.join("admin/config.yml").exists());
        assert!(public.join("admin/index.html").exists());

        let detail = read(public.join("albums/ok-computer/index.html"));
        assert!(detail.contains("<h1>OK Computer</h1>"));
        assert!(detail.contains("<em>androids</em>"));
        assert!(detail.contains(r#"src="/images/okc.jpg""#));
    }

    #[test]
    fn test_list_page_order_and_tags() {
        let (_tmp, site) = site_with_albums(&[
            ("ok-computer.md", OK_COMPUTER),
            ("blue-train.md", BLUE_TRAIN),
        ]);
        let albums = load_all(&site.content_dir).unwrap();
        Generator::new(&site).unwrap().generate(&albums).unwrap();

        let list = read(site.public_dir.join("albums/index.html"));
        let first = list.find("#1 - Blue Train").unwrap();
        let second = list.find("#2 - OK Computer").unwrap();
        assert!(first < second);

        assert!(list.contains(r#"data-tag="jazz""#));
        assert!(list.contains(r#"data-tag="rock""#));
        assert!(list.contains(r#"data-tag="uk""#));
        assert!(list.contains(r#"href="/albums/blue-train/""#));
        assert!(list.contains("🌙 Dark"));
    }

    #[test]
    fn test_exactly_one_detail_page_per_album() {
        let (_tmp, site) = site_with_albums(&[
            ("ok-computer.md", OK_COMPUTER),
            ("blue-train.md", BLUE_TRAIN),
            ("untitled.md", "no front matter at all\n"),
        ]);
        let albums = load_all(&site.content_dir).unwrap();
        Generator::new(&site).unwrap().generate(&albums).unwrap();

        let mut pages: Vec<String> = fs::read_dir(site.public_dir.join(ALBUMS_DIR))
            .unwrap()
            .map(|e| e.unwrap())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        pages.sort();

        let mut slugs: Vec<String> = albums.iter().map(|a| a.slug.clone()).collect();
        slugs.sort();

        assert_eq!(pages.len(), albums.len());
        assert_eq!(pages, slugs);
        for slug in &slugs {
            assert!(site
                .public_dir
                .join(ALBUMS_DIR)
                .join(slug)
                .join("index.html")
                .exists());
        }
    }

    #[test]
    fn test_rebuild_drops_removed_albums() {
        let (_tmp, site) = site_with_albums(&[
            ("ok-computer.md", OK_COMPUTER),
            ("blue-train.md", BLUE_TRAIN),
        ]);
        let generator = Generator::new(&site).unwrap();
        generator
            .generate(&load_all(&site.content_dir).unwrap())
            .unwrap();

        fs::remove_file(site.content_dir.join("blue-train.md")).unwrap();
        generator
            .generate(&load_all(&site.content_dir).unwrap())
            .unwrap();

        assert!(site.public_dir.join("albums/ok-computer/index.html").exists());
        assert!(!site.public_dir.join("albums/blue-train").exists());
    }

    #[test]
    fn test_album_index_json() {
        let (_tmp, site) = site_with_albums(&[("blue-train.md", BLUE_TRAIN)]);
        let albums = load_all(&site.content_dir).unwrap();
        Generator::new(&site).unwrap().generate(&albums).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&read(site.public_dir.join("albums.json"))).unwrap();
        assert_eq!(json[0]["slug"], "blue-train");
        assert_eq!(json[0]["ranking"], 1);
        assert_eq!(json[0]["comment"], "Hard bop.\n");
        assert!(json[0].get("source").is_none());
    }

    #[test]
    fn test_static_assets_copied() {
        let (_tmp, site) = site_with_albums(&[("blue-train.md", BLUE_TRAIN)]);
        fs::create_dir_all(site.static_dir.join("images")).unwrap();
        fs::write(site.static_dir.join("images/cover.jpg"), b"jpg").unwrap();

        let albums = load_all(&site.content_dir).unwrap();
        Generator::new(&site).unwrap().generate(&albums).unwrap();

        assert_eq!(
            fs::read(site.public_dir.join("images/cover.jpg")).unwrap(),
            b"jpg"
        );
    }

    #[test]
    fn test_dark_default_theme() {
        let tmp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.default_theme = crate::ui::Theme::Dark;
        let site = Site::with_config(tmp.path(), config);

        Generator::new(&site).unwrap().generate(&[]).unwrap();

        let list = read(site.public_dir.join("albums/index.html"));
        assert!(list.contains(r#"<html lang="en" class="dark">"#));
        assert!(list.contains("☀️ Light"));
    }
}
