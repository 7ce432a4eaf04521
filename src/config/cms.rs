//! Editing configuration for the external browser-based editor
//!
//! This is a declarative description only: the generator serializes it to
//! `admin/config.yml` and the editor reads it in the browser. Nothing in the
//! site build evaluates it.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::SiteConfig;

/// Top-level editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsConfig {
    pub backend: Backend,
    pub media_folder: String,
    pub public_folder: String,
    pub collections: Vec<Collection>,
}

/// Where the editor commits changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backend {
    pub name: String,
    pub branch: String,
}

/// A folder of entries sharing one field schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub label: String,
    pub folder: String,
    pub extension: String,
    pub format: String,
    pub create: bool,
    pub slug: String,
    pub identifier_field: String,
    pub summary: String,
    pub fields: Vec<Field>,
}

/// One editable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub name: String,
    pub widget: Widget,
}

/// Input widget kinds understood by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    /// Plain single-line text
    String,
    Number,
    /// Reference to an uploaded image in the media folder
    Image,
    /// Long-form formatted text, stored as the file body
    Markdown,
    /// Sequence of short strings
    List,
}

impl Field {
    fn new(label: &str, name: &str, widget: Widget) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            widget,
        }
    }
}

impl CmsConfig {
    /// Build the editor configuration for the album collection
    pub fn albums(config: &SiteConfig) -> Self {
        let folder = format!("{}/", config.content_dir.trim_end_matches('/'));

        let albums = Collection {
            name: "albums".to_string(),
            label: "Albums".to_string(),
            folder,
            extension: "md".to_string(),
            format: "frontmatter".to_string(),
            create: true,
            slug: "{{slug}}".to_string(),
            identifier_field: "slug".to_string(),
            summary: "{{title}}".to_string(),
            fields: vec![
                Field::new("Slug", "slug", Widget::String),
                Field::new("Title", "title", Widget::String),
                Field::new("Artist", "artist", Widget::String),
                Field::new("Year", "year", Widget::Number),
                Field::new("Ranking", "ranking", Widget::Number),
                Field::new("Cover Image", "cover", Widget::Image),
                Field::new("Tags", "tags", Widget::List),
                Field::new("Comment", "body", Widget::Markdown),
            ],
        };

        Self {
            backend: Backend {
                name: config.cms.backend.clone(),
                branch: config.cms.branch.clone(),
            },
            media_folder: config.media_folder.clone(),
            public_folder: config.public_folder.clone(),
            collections: vec![albums],
        }
    }

    /// Check that each collection has unique field names and carries its
    /// identifier field
    pub fn validate(&self) -> Result<()> {
        for collection in &self.collections {
            let mut seen = HashSet::new();
            for field in &collection.fields {
                if !seen.insert(field.name.as_str()) {
                    bail!(
                        "Collection '{}' declares field '{}' twice",
                        collection.name,
                        field.name
                    );
                }
            }
            if !seen.contains(collection.identifier_field.as_str()) {
                bail!(
                    "Collection '{}' has no field named '{}' to identify entries",
                    collection.name,
                    collection.identifier_field
                );
            }
        }
        Ok(())
    }

    /// Serialize to the YAML document the editor loads
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
