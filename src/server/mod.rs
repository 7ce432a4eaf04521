//! Preview server with live reload
//!
//! Serves the generated output exactly as a static host would: known routes
//! map to files, anything else is a 404. The site is rebuilt from scratch
//! whenever the content directory, static assets or config change.

use anyhow::Result;
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{Request, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

use crate::{Site, CONFIG_FILE};

/// Live reload script injected into HTML pages
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        console.log('Live reload disconnected. Attempting to reconnect...');
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Server state
struct ServerState {
    public_dir: PathBuf,
    /// Site root every generated link starts with
    root: String,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        public_dir: site.public_dir.clone(),
        root: site.config.root.clone(),
        reload_tx: reload_tx.clone(),
        live_reload: watch,
    });

    let app = Router::new()
        .route("/__livereload", get(livereload_handler))
        .fallback(fallback_handler)
        .with_state(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!(
        "http://{}:{}{}",
        ip,
        port,
        crate::helpers::albums_url(&site.config)
    );
    println!("Server running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let site = site.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(site, reload_tx) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch for file changes, rebuild and trigger reload. Blocks the calling
/// thread until the watcher shuts down.
fn watch_and_reload(site: Site, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Debounce to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    let config_path = site.base_dir.join(CONFIG_FILE);
    let watched = [
        (&site.content_dir, RecursiveMode::NonRecursive),
        (&site.static_dir, RecursiveMode::Recursive),
        (&config_path, RecursiveMode::NonRecursive),
    ];
    for (path, mode) in watched {
        if path.exists() {
            debouncer.watcher().watch(path, mode)?;
            tracing::debug!("Watching: {:?}", path);
        }
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant_events: Vec<_> = events
                    .iter()
                    .filter(|e| {
                        let path_str = e.path.to_string_lossy();
                        !path_str.contains(".git")
                            && !path_str.contains(".DS_Store")
                            && !path_str.ends_with('~')
                    })
                    .collect();

                if relevant_events.is_empty() {
                    continue;
                }

                println!();
                for event in &relevant_events {
                    println!("📝 File changed: {}", event.path.display());
                }

                println!("\n🔄 Regenerating...");
                match Site::new(&site.base_dir).and_then(|fresh| fresh.generate()) {
                    Ok(_) => {
                        println!("✅ Regenerated successfully!");
                        let _ = reload_tx.send(());
                    }
                    Err(e) => {
                        println!("❌ Generation failed: {:#}", e);
                    }
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

/// Handle WebSocket connection for live reload
async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Serve files, injecting the live reload script into HTML pages
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    mut request: Request<Body>,
) -> Response {
    let raw_path = request.uri().path().to_string();
    let Some(site_path) = strip_root(&state.root, &raw_path) else {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    if site_path != raw_path {
        let query = request
            .uri()
            .query()
            .map(|q| format!("?{}", q))
            .unwrap_or_default();
        match format!("{}{}", site_path, query).parse::<Uri>() {
            Ok(uri) => *request.uri_mut() = uri,
            Err(_) => return (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    }

    let path = percent_encoding::percent_decode_str(site_path)
        .decode_utf8_lossy()
        .into_owned();

    let Some(file_path) = resolve_path(&state.public_dir, &path) else {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    let is_html = file_path
        .extension()
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false);

    if is_html && state.live_reload {
        match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => Html(inject_live_reload(&content)).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    } else {
        let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
        match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        }
    }
}

/// Drop the site root from a request path. `None` for paths outside it.
fn strip_root<'a>(root: &str, path: &'a str) -> Option<&'a str> {
    let prefix = root.trim_end_matches('/');
    if prefix.is_empty() {
        return Some(path);
    }
    match path.strip_prefix(prefix) {
        Some("") => Some("/"),
        Some(rest) if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Map a decoded request path to a file in `public_dir`. `None` for paths
/// escaping the output directory.
fn resolve_path(public_dir: &Path, path: &str) -> Option<PathBuf> {
    let clean_path = path.trim_start_matches('/');
    let relative = Path::new(clean_path);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let candidate = public_dir.join(relative);
    if candidate.is_dir() {
        return Some(candidate.join("index.html"));
    }

    let with_html = public_dir.join(format!("{}.html", clean_path.trim_end_matches('/')));
    if !candidate.exists() && !clean_path.is_empty() && with_html.exists() {
        return Some(with_html);
    }

    Some(candidate)
}

/// Inject live reload script into HTML content
fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replace("</body>", LIVE_RELOAD_SCRIPT)
    } else {
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
