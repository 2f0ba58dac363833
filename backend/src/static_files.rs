//! Serves the compiled yew frontend.
//!
//! Client-side routes such as `/flashcards/{id}` and `/youtube` have no file
//! behind them, so any path that misses falls back to `index.html` and the
//! app's router takes over.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use log::warn;
use std::path::{Path, PathBuf};

pub fn service(dir: &Path) -> Files {
    if !dir.join("index.html").is_file() {
        warn!(
            "No index.html in {}; build the frontend (trunk build) or set STATIC_DIR",
            dir.display()
        );
    }
    let index: PathBuf = dir.join("index.html");

    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::fs;

    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    #[actix_web::test]
    async fn files_are_served_and_client_routes_get_index() {
        let dir = site();
        let app = test::init_service(App::new().service(service(dir.path()))).await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/app.js").to_request()).await;
        assert_eq!(body, "console.log(1)");

        let body = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/flashcards/abc123").to_request(),
        )
        .await;
        assert_eq!(body, "<html>app</html>");
    }
}
