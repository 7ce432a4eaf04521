//! albumshelf: a static site generator for a ranked album shelf
//!
//! Album entries live as markdown files with YAML front-matter in a content
//! directory. They are loaded into [`content::Album`] records, sorted by
//! ranking and rendered through embedded Tera templates into a fully static
//! site with client-side search, tag filtering and a light/dark toggle.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;
pub mod ui;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::SiteError;

/// Name of the site configuration file inside the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The album site application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding one markdown file per album
    pub content_dir: PathBuf,
    /// Static assets copied verbatim into the output
    pub static_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a new site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site instance from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            static_dir,
            public_dir,
        }
    }

    /// Load every album from the content directory, sorted by ranking
    pub fn load_albums(&self) -> Result<Vec<content::Album>> {
        Ok(content::loader::load_all(&self.content_dir)?)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
