//! Helpers for locating the backend from the browser

/// Origin of the current page, e.g. "http://localhost:8080"
///
/// Used as the backend address when none is configured (the REST API is
/// then expected behind the same host, e.g. via a reverse proxy).
/// Returns an empty string if window is not available.
pub fn page_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window
        .location()
        .origin()
        .unwrap_or_else(|_| "http://127.0.0.1".to_string())
}
