//! # YouTube Routes
//!
//! Caption extraction and card generation run in the backend. These routes
//! relay the generation request, the deck save, and the caption-track check
//! the form uses to pick a language before generating.
//!
//! ## Sub-modules:
//! - `flashcards`: generation request, options passed through untouched.
//! - `save`: stores generated cards as a deck and returns its id.
//! - `tracks`: lists caption tracks for a video.

mod flashcards;
mod save;
mod tracks;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/youtube";

/// *   **`POST /flashcards`**: ⇒ backend `POST /youtube/flashcards`.
/// *   **`PUT /flashcards`**: ⇒ backend `POST /youtube/save`.
/// *   **`GET /tracks?url=`**: ⇒ backend `GET /youtube/tracks?url=`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/flashcards", post().to(flashcards::process))
        .route("/flashcards", put().to(save::process))
        .route("/tracks", get().to(tracks::process))
}

#[cfg(test)]
mod tests {
    use crate::config::DebugEndpoints;
    use crate::test_support::{forwarder_for, proxy_app, spawn_upstream};
    use actix_web::{test, web, App, HttpRequest, HttpResponse};
    use serde_json::{json, Value};

    fn upstream(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/youtube/flashcards",
            web::post().to(|body: web::Json<Value>| async move {
                HttpResponse::Ok().json(json!({
                    "video_id": "dQw4w9WgXcQ",
                    "url": body["url"],
                    "lang": "en",
                    "title": null,
                    "cards": [{"front": "Q", "back": "A", "start_s": 12.0}],
                    "warnings": [],
                    "echo": body.into_inner(),
                }))
            }),
        )
        .route(
            "/youtube/save",
            web::post().to(|body: web::Json<Value>| async move {
                if body["title"].is_null() {
                    HttpResponse::Ok().body("saved without title")
                } else {
                    HttpResponse::Ok().json(json!({"pdf_id": "yt-deck-1"}))
                }
            }),
        )
        .route(
            "/youtube/tracks",
            web::get().to(|req: HttpRequest| async move {
                HttpResponse::Ok().json(json!({"video_id": "dQw4w9WgXcQ", "query": req.query_string(), "tracks": []}))
            }),
        );
    }

    #[actix_web::test]
    async fn generation_options_pass_through_verbatim() {
        let base = spawn_upstream(upstream).await;
        let app = test::init_service(
            App::new().configure(proxy_app(forwarder_for(&base), DebugEndpoints(false))),
        )
        .await;
        let body = json!({
            "url": "https://youtu.be/dQw4w9WgXcQ",
            "n_cards": 12,
            "langHint": ["es", "en"],
            "allow_auto_generated": false,
            "use_cookies": true,
            "enable_fallback": true,
        });
        let req = test::TestRequest::post()
            .uri("/api/youtube/flashcards")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["echo"], body);
    }

    #[actix_web::test]
    async fn save_relays_json_or_plain_text() {
        let base = spawn_upstream(upstream).await;
        let app = test::init_service(
            App::new().configure(proxy_app(forwarder_for(&base), DebugEndpoints(false))),
        )
        .await;
        let deck = |title: Value| {
            json!({
                "url": "https://youtu.be/dQw4w9WgXcQ",
                "video_id": "dQw4w9WgXcQ",
                "title": title,
                "lang": "en",
                "cards": [{"front": "Q", "back": "A"}],
            })
        };

        let req = test::TestRequest::put()
            .uri("/api/youtube/flashcards")
            .set_json(deck(json!("Never Gonna")))
            .to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["pdf_id"], "yt-deck-1");

        let req = test::TestRequest::put()
            .uri("/api/youtube/flashcards")
            .set_json(deck(Value::Null))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert!(resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(test::read_body(resp).await, "saved without title");
    }

    #[actix_web::test]
    async fn tracks_requires_url_and_encodes_it() {
        let base = spawn_upstream(upstream).await;
        let app = test::init_service(
            App::new().configure(proxy_app(forwarder_for(&base), DebugEndpoints(false))),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/youtube/tracks").to_request()).await;
        assert_eq!(resp.status(), 400);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["detail"], "Missing 'url' query parameter");

        let req = test::TestRequest::get()
            .uri("/api/youtube/tracks?url=https%3A%2F%2Fyoutu.be%2FdQw4w9WgXcQ")
            .to_request();
        let json: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["query"], "url=https%3A%2F%2Fyoutu.be%2FdQw4w9WgXcQ");
    }
}
