//! Client-side routes. The server falls back to `index.html` for any path it
//! does not own, so the pathname alone decides which page renders.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Upload,
    Flashcards(String),
    YouTube,
    NotFound,
}

impl Route {
    pub fn parse(pathname: &str) -> Route {
        let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Upload,
            ["flashcards", id] => Route::Flashcards((*id).to_string()),
            ["youtube"] => Route::YouTube,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Upload | Route::NotFound => "/".to_string(),
            Route::Flashcards(id) => format!("/flashcards/{id}"),
            Route::YouTube => "/youtube".to_string(),
        }
    }

    pub fn current() -> Route {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Route::parse(&p))
            .unwrap_or(Route::Upload)
    }

    /// Full navigation, so every page starts from a clean component tree.
    pub fn navigate(&self) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(&self.path()).is_err() {
                gloo_console::error!("navigation to", self.path(), "failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Upload);
        assert_eq!(Route::parse(""), Route::Upload);
        assert_eq!(Route::parse("/flashcards/abc123"), Route::Flashcards("abc123".into()));
        assert_eq!(Route::parse("/flashcards/abc123/"), Route::Flashcards("abc123".into()));
        assert_eq!(Route::parse("/youtube"), Route::YouTube);
        assert_eq!(Route::parse("/flashcards"), Route::NotFound);
        assert_eq!(Route::parse("/nope/x/y"), Route::NotFound);
    }

    #[test]
    fn path_parses_back_to_the_same_route() {
        for route in [Route::Upload, Route::Flashcards("yt-abc".into()), Route::YouTube] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
