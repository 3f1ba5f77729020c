//! Development Static File Server
//!
//! Serves the index document, styles, and the compiled WASM bundle from
//! the project root. Local development only; errors are per-request and
//! never take the server down.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Port where the dev server listens.
const PORT: u16 = 4173;

/// Document served for `/`.
const INDEX_FILE: &str = "index.html";

/// Content types served by extension; everything else is a generic blob.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html; charset=utf-8"),
    ("css", "text/css; charset=utf-8"),
    ("js", "text/javascript; charset=utf-8"),
    ("wasm", "application/wasm"),
];

// Application state
#[derive(Clone)]
struct AppState {
    root: Arc<PathBuf>,
}

/// Per-request failures, surfaced as plain-text status responses.
#[derive(Debug, Error, PartialEq)]
enum ServeError {
    #[error("Forbidden")]
    Forbidden,
    #[error("Not found")]
    NotFound,
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = match self {
            ServeError::Forbidden => StatusCode::FORBIDDEN,
            ServeError::NotFound => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dev_server=info,tower_http=debug")
        .init();

    let root = std::env::current_dir()?;
    info!("Dev server running at http://127.0.0.1:{}", PORT);
    info!("Serving files under {}", root.display());

    let app = create_router(root);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", PORT)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(root: PathBuf) -> Router {
    Router::new()
        .fallback(get(serve_file))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { root: Arc::new(root) })
}

async fn serve_file(State(state): State<AppState>, uri: Uri) -> Result<Response, ServeError> {
    let path = resolve_request_path(&state.root, uri.path())?;

    let data = tokio::fs::read(&path).await.map_err(|err| {
        warn!("{}: {}", path.display(), err);
        ServeError::NotFound
    })?;

    let content_type = content_type_for(&path);
    Ok(([(header::CONTENT_TYPE, content_type)], data).into_response())
}

/// Maps a request path to a file under `root`. `/` becomes the index
/// document. Paths that normalize outside the serving root are rejected.
fn resolve_request_path(root: &Path, uri_path: &str) -> Result<PathBuf, ServeError> {
    let relative = uri_path.trim_start_matches('/');
    let relative = if relative.is_empty() { INDEX_FILE } else { relative };

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                // ".." may not climb past the serving root
                if !resolved.pop() || !resolved.starts_with(root) {
                    return Err(ServeError::Forbidden);
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(ServeError::Forbidden),
        }
    }

    Ok(resolved)
}

fn content_type_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| CONTENT_TYPES.iter().find(|(known, _)| *known == ext))
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn project_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("styles.css"), "body {}").unwrap();
        fs::create_dir(dir.path().join("dist")).unwrap();
        fs::write(dir.path().join("dist/app.wasm"), [0u8; 4]).unwrap();
        dir
    }

    async fn request(dir: &TempDir, path: &str) -> Response {
        let app = create_router(dir.path().to_path_buf());
        let req = Request::builder().uri(path).body(Body::empty()).unwrap();
        app.oneshot(req).await.expect("Request failed")
    }

    fn content_type(response: &Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn test_root_resolves_to_index() {
        let root = Path::new("/srv/app");
        let resolved = resolve_request_path(root, "/").unwrap();
        assert_eq!(resolved, root.join("index.html"));
    }

    #[test]
    fn test_nested_path_resolves_under_root() {
        let root = Path::new("/srv/app");
        let resolved = resolve_request_path(root, "/dist/app.js").unwrap();
        assert_eq!(resolved, root.join("dist/app.js"));
    }

    #[test]
    fn test_parent_escape_is_forbidden() {
        let root = Path::new("/srv/app");
        assert_eq!(
            resolve_request_path(root, "/../secrets.txt"),
            Err(ServeError::Forbidden)
        );
        assert_eq!(
            resolve_request_path(root, "/dist/../../secrets.txt"),
            Err(ServeError::Forbidden)
        );
    }

    #[test]
    fn test_parent_within_root_is_allowed() {
        let root = Path::new("/srv/app");
        let resolved = resolve_request_path(root, "/dist/../index.html").unwrap();
        assert_eq!(resolved, root.join("index.html"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for(Path::new("a/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Path::new("styles.css")), "text/css; charset=utf-8");
        assert_eq!(content_type_for(Path::new("app.js")), "text/javascript; charset=utf-8");
        assert_eq!(content_type_for(Path::new("app.wasm")), "application/wasm");
        assert_eq!(content_type_for(Path::new("favicon.ico")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("Makefile")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let dir = project_dir();
        let response = request(&dir, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_serves_files_by_relative_path() {
        let dir = project_dir();

        let response = request(&dir, "/styles.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/css; charset=utf-8");

        let response = request(&dir, "/dist/app.wasm").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/wasm");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = project_dir();
        let response = request(&dir, "/missing.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_escaping_path_is_forbidden() {
        let dir = project_dir();
        let response = request(&dir, "/../outside.txt").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_directory_request_is_not_found() {
        let dir = project_dir();
        let response = request(&dir, "/dist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
