//! Search relay endpoint
//!
//! `GET /api/cocktails?name=<string>` forwards the drink name to the
//! external cocktail database and relays the upstream JSON unchanged.
//! Missing input is rejected locally without an outbound call.

use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::api::response;
use crate::config::AppState;
use crate::logger;

/// Returned when the `name` query parameter is missing or empty
pub const MISSING_NAME_ERROR: &str = "No se proporcionó el nombre del cóctel";

/// Returned when the upstream call fails for any reason
pub const UPSTREAM_ERROR: &str = "Error al conectar con la API externa";

/// Extract the `name` parameter from a raw query string.
///
/// An empty value counts as missing: an empty search is an input error,
/// not a search for everything.
pub fn extract_name(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find_map(|(key, value)| (key == "name").then(|| value.into_owned()))
        .filter(|name| !name.is_empty())
}

/// Handle `GET /api/cocktails`
pub async fn search(state: &Arc<AppState>, raw_query: Option<&str>) -> Response<Full<Bytes>> {
    let Some(name) = extract_name(raw_query) else {
        logger::log_api_request("GET", "/api/cocktails", 400);
        return response::bad_request(MISSING_NAME_ERROR);
    };

    if state.config.server.debug {
        if let Ok(url) = state.upstream.search_url(&name) {
            logger::log_upstream_request(url.as_str());
        }
    }

    // Single attempt; failures are surfaced with details, never retried
    match state.upstream.search(&name).await {
        Ok(data) => {
            logger::log_api_request("GET", "/api/cocktails", 200);
            response::json_response(StatusCode::OK, &data)
        }
        Err(e) => {
            logger::log_error(&format!("Upstream search for '{name}' failed: {e}"));
            logger::log_api_request("GET", "/api/cocktails", 500);
            response::upstream_error(UPSTREAM_ERROR, &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn test_state() -> Arc<AppState> {
        let mut cfg = Config::load_from("no_such_config_file").unwrap();
        // Point the upstream at a closed local port so any outbound call
        // fails fast instead of reaching the real API
        cfg.upstream.base_url = "http://127.0.0.1:1/search.php".to_string();
        cfg.upstream.timeout_secs = 1;
        Arc::new(AppState::new(cfg).unwrap())
    }

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_extract_name_missing_query() {
        assert_eq!(extract_name(None), None);
    }

    #[test]
    fn test_extract_name_absent_parameter() {
        assert_eq!(extract_name(Some("other=1")), None);
    }

    #[test]
    fn test_extract_name_empty_value() {
        assert_eq!(extract_name(Some("name=")), None);
    }

    #[test]
    fn test_extract_name_simple() {
        assert_eq!(extract_name(Some("name=margarita")), Some("margarita".to_string()));
    }

    #[test]
    fn test_extract_name_decodes_url_encoding() {
        assert_eq!(
            extract_name(Some("name=pi%C3%B1a+colada")),
            Some("piña colada".to_string())
        );
    }

    #[test]
    fn test_extract_name_takes_first_occurrence() {
        assert_eq!(extract_name(Some("name=first&name=second")), Some("first".to_string()));
    }

    #[tokio::test]
    async fn test_missing_name_is_bad_request() {
        let state = test_state();
        let resp = search(&state, None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], MISSING_NAME_ERROR);
    }

    #[tokio::test]
    async fn test_empty_name_is_bad_request() {
        let state = test_state();
        let resp = search(&state, Some("name=")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_internal_error() {
        let state = test_state();
        let resp = search(&state, Some("name=margarita")).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"], UPSTREAM_ERROR);
        assert!(body["details"].as_str().is_some_and(|d| !d.is_empty()));
    }
}
