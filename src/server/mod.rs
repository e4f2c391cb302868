//! Preview server with live reload

use anyhow::Result;
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Folio;

/// Endpoint the injected script connects to
const LIVE_RELOAD_PATH: &str = "/__livereload";

const LIVE_RELOAD_SCRIPT: &str = r#"<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) { if (msg.data === 'reload') location.reload(); };
    ws.onclose = function() { setTimeout(function() { location.reload(); }, 1000); };
})();
</script>
</body>"#;

struct ServerState {
    public_dir: PathBuf,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// Serve the output directory, regenerating on changes when `watch` is set
pub async fn start(folio: &Folio, ip: &str, port: u16, watch: bool) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        public_dir: folio.public_dir.clone(),
        reload_tx: reload_tx.clone(),
        live_reload: watch,
    });

    let app = Router::new()
        .route(LIVE_RELOAD_PATH, get(livereload_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    if watch {
        let folio = folio.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(&folio, reload_tx) {
                tracing::error!("File watcher error: {:#}", e);
            }
        });
    }

    tracing::info!("Serving {:?} at http://{}:{}", folio.public_dir, ip, port);
    println!("Server running at http://{}:{}. Press Ctrl+C to stop.", ip, port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Regenerate on source changes and tell connected pages to reload
fn watch_and_reload(folio: &Folio, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    let config_path = folio.base_dir.join("_config.yml");
    for (path, mode) in [
        (folio.content_dir.as_path(), RecursiveMode::Recursive),
        (folio.static_dir.as_path(), RecursiveMode::Recursive),
        (config_path.as_path(), RecursiveMode::NonRecursive),
    ] {
        if path.exists() {
            debouncer.watcher().watch(path, mode)?;
            tracing::debug!("Watching: {:?}", path);
        }
    }

    for result in rx {
        match result {
            Ok(events) => {
                if !events.iter().any(|e| is_relevant(&e.path)) {
                    continue;
                }

                tracing::info!("Change detected, regenerating...");
                match crate::commands::generate::rebuild(folio) {
                    Ok(()) => {
                        let _ = reload_tx.send(());
                    }
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Err(e) => tracing::error!("Watch error: {:?}", e),
        }
    }

    Ok(())
}

/// Editor swap files and VCS internals never trigger a rebuild
fn is_relevant(path: &Path) -> bool {
    let path = path.to_string_lossy();
    !path.contains(".git")
        && !path.contains(".DS_Store")
        && !path.ends_with('~')
        && !path.ends_with(".swp")
}

async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    loop {
        tokio::select! {
            result = reload_rx.recv() => match result {
                Ok(()) => {
                    if socket.send(Message::Text("reload".to_string())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            },
            msg = socket.recv() => match msg {
                Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                _ => {}
            },
        }
    }
}

/// Serve HTML with the live reload script injected, everything else as-is
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let file_path = resolve_file(&state.public_dir, request.uri().path());
    let is_html = file_path
        .extension()
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false);

    if is_html && state.live_reload {
        return match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => Html(inject_live_reload(&content)).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        };
    }

    let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Map a request path to a file under the output directory
fn resolve_file(public_dir: &Path, request_path: &str) -> PathBuf {
    let clean = request_path.trim_start_matches('/');
    let candidate = public_dir.join(clean);
    if clean.is_empty() || candidate.is_dir() {
        candidate.join("index.html")
    } else {
        candidate
    }
}

fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replacen("</body>", LIVE_RELOAD_SCRIPT, 1)
    } else {
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_live_reload() {
        let html = inject_live_reload("<html><body><p>x</p></body></html>");
        assert!(html.contains(LIVE_RELOAD_PATH));
        assert_eq!(html.matches("</body>").count(), 1);
        assert!(inject_live_reload("<p>bare</p>").contains("<script>"));
    }

    #[test]
    fn test_resolve_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("blog")).unwrap();
        assert_eq!(resolve_file(dir.path(), "/"), dir.path().join("index.html"));
        assert_eq!(
            resolve_file(dir.path(), "/blog"),
            dir.path().join("blog/index.html")
        );
        assert_eq!(
            resolve_file(dir.path(), "/logo.png"),
            dir.path().join("logo.png")
        );
    }

    #[test]
    fn test_is_relevant() {
        assert!(is_relevant(Path::new("content/blog/post.md")));
        assert!(!is_relevant(Path::new("content/.git/index")));
        assert!(!is_relevant(Path::new("content/post.md~")));
    }
}
