//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::{Site, CONFIG_FILE};

/// Generate the static site. Every run reloads the content directory from
/// scratch; nothing is carried over from earlier builds.
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let albums = site.load_albums()?;
    tracing::info!("Loaded {} albums from {:?}", albums.len(), site.content_dir);

    let generator = Generator::new(site)?;
    generator.generate(&albums)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and regenerate
pub async fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&site.content_dir, notify::RecursiveMode::NonRecursive)?;

    if site.static_dir.exists() {
        watcher.watch(&site.static_dir, notify::RecursiveMode::Recursive)?;
    }

    let config_path = site.base_dir.join(CONFIG_FILE);
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Collapse bursts of events into one rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    // Pick up edits to _config.yml as well
                    match Site::new(&site.base_dir).and_then(|fresh| run(&fresh)) {
                        Ok(()) => {}
                        Err(e) => tracing::error!("Generation failed: {:#}", e),
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
