// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// 400 Bad Request with an `error` field
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    json_response(StatusCode::BAD_REQUEST, &body)
}

/// 500 upstream failure with `error` and `details` fields
pub fn upstream_error(message: &str, details: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message, "details": details });
    json_response(StatusCode::INTERNAL_SERVER_ERROR, &body)
}

/// 404 Not Found listing the available endpoints
pub fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(
            r#"{"error":"Not Found","available_endpoints":["/","/api/cocktails","/api/demo"]}"#,
        )))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Not Found"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_shape() {
        let resp = bad_request("missing parameter");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        let body = body_json(resp).await;
        assert_eq!(body["error"], "missing parameter");
    }

    #[tokio::test]
    async fn test_upstream_error_carries_details() {
        let resp = upstream_error("upstream down", "connection refused");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "upstream down");
        assert_eq!(body["details"], "connection refused");
    }

    #[tokio::test]
    async fn test_json_response_roundtrips_value() {
        let payload = serde_json::json!({"drinks": [{"strDrink": "Margarita"}]});
        let resp = json_response(StatusCode::OK, &payload);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, payload);
    }
}
