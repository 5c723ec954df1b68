//! Static frontend serving with SPA fallback
//!
//! The frontend ships as a prebuilt bundle. Requests that match a real file
//! under the bundle directory get that file; anything else gets
//! `index.html` so client-side routes resolve after a hard refresh. When
//! the bundle has not been built at all, a JSON payload says so instead of
//! a bare 404.

use std::path::{Component, Path, PathBuf};

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Serves the prebuilt frontend bundle
#[derive(Debug, Clone)]
pub struct StaticSite {
    dist_dir: PathBuf,
}

impl StaticSite {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
        }
    }

    /// Respond to a GET for `path` (leading slash optional)
    pub async fn respond(&self, path: &str) -> Response {
        if let Some(file) = self.resolve(path) {
            if let Ok(contents) = tokio::fs::read(&file).await {
                tracing::debug!("Serving static file: {}", file.display());
                return ([(header::CONTENT_TYPE, content_type(&file))], contents).into_response();
            }
        }

        match tokio::fs::read(self.dist_dir.join("index.html")).await {
            Ok(contents) => (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                contents,
            )
                .into_response(),
            Err(err) => {
                tracing::warn!(
                    "Frontend bundle missing at {}: {}",
                    self.dist_dir.display(),
                    err
                );
                (
                    StatusCode::OK,
                    Json(json!({ "error": "Frontend not found. Please build the frontend." })),
                )
                    .into_response()
            }
        }
    }

    /// Map a request path to a file under the bundle directory.
    ///
    /// Paths escaping the directory (`..` or other non-normal components)
    /// resolve to nothing and fall through to the SPA fallback.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }

        let relative = Path::new(relative);
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return None;
        }

        Some(self.dist_dir.join(relative))
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn bundle() -> (TempDir, StaticSite) {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("dist");
        std::fs::create_dir(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html>app</html>").unwrap();
        std::fs::create_dir(dist.join("assets")).unwrap();
        std::fs::write(dist.join("assets/app.js"), "console.log(1)").unwrap();
        let site = StaticSite::new(dist);
        (dir, site)
    }

    async fn body_of(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_serves_existing_asset_with_content_type() {
        let (_dir, site) = bundle();
        let response = site.respond("/assets/app.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript; charset=utf-8"
        );
        assert_eq!(body_of(response).await, b"console.log(1)");
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_index() {
        let (_dir, site) = bundle();
        let response = site.respond("/debate/session/42").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(body_of(response).await, b"<html>app</html>");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (_dir, site) = bundle();
        let response = site.respond("/").await;
        assert_eq!(body_of(response).await, b"<html>app</html>");
    }

    #[tokio::test]
    async fn test_missing_bundle_reports_json_error_with_200() {
        let dir = TempDir::new().unwrap();
        let site = StaticSite::new(dir.path().join("never-built"));
        let response = site.respond("/anything").await;

        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value =
            serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(value["error"], "Frontend not found. Please build the frontend.");
    }

    #[tokio::test]
    async fn test_traversal_cannot_escape_the_bundle() {
        let (dir, site) = bundle();
        std::fs::write(dir.path().join("secret.txt"), "nope").unwrap();
        let response = site.respond("/../secret.txt").await;

        // falls through to index, never the file outside the bundle
        assert_eq!(body_of(response).await, b"<html>app</html>");
    }

    #[test]
    fn test_content_types_cover_bundle_outputs() {
        assert_eq!(content_type(Path::new("a.css")), "text/css; charset=utf-8");
        assert_eq!(content_type(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("a.bin")), "application/octet-stream");
    }
}
