//! Initialize a new album site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILE;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let defaults = SiteConfig::default();

    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join(&defaults.content_dir))?;
    fs::create_dir_all(target_dir.join(&defaults.media_folder))?;

    let config_content = r#"# Album shelf configuration

# Site
title: My Favorite Albums
description: ''
author: John Doe

# URL
url: http://example.com
root: /

# Directory
content_dir: content/albums
public_dir: public
static_dir: static

# Media uploaded through the editor
media_folder: static/images
public_folder: /images

# light or dark
default_theme: light

# Browser-based editor
cms:
  backend: git-gateway
  branch: main
"#;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::warn!("{:?} already exists, leaving it untouched", config_path);
    } else {
        fs::write(&config_path, config_content)?;
    }

    let sample_album = r#"---
slug: kind-of-blue
title: Kind of Blue
artist: Miles Davis
year: 1959
ranking: 1
cover: /images/kind-of-blue.jpg
tags:
  - jazz
  - modal
---

Write what this record means to you here. **Markdown** works.
"#;

    let sample_path = target_dir
        .join(&defaults.content_dir)
        .join("kind-of-blue.md");
    if !sample_path.exists() {
        fs::write(sample_path, sample_album)?;
    }

    Ok(())
}
