//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::ui::Theme;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Media, shared with the editing tool
    pub media_folder: String,
    pub public_folder: String,

    // Appearance
    pub default_theme: Theme,

    // Editing tool
    #[serde(default)]
    pub cms: CmsSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Favorite Albums".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content/albums".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            media_folder: "static/images".to_string(),
            public_folder: "/images".to_string(),

            default_theme: Theme::Light,

            cms: CmsSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Connection settings for the browser-based editor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsSettings {
    /// Backend the editor commits through
    pub backend: String,
    /// Branch edits are written to
    pub branch: String,
    /// Script URL of the editor bundle loaded by admin/index.html
    pub editor_script: String,
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            backend: "git-gateway".to_string(),
            branch: "main".to_string(),
            editor_script: "https://unpkg.com/@staticcms/app@^4.0.0/dist/static-cms-app.js"
                .to_string(),
        }
    }
}
