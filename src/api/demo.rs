//! Demo fixture endpoint
//!
//! `GET /api/demo` returns a fixed drink record without touching the
//! external API, so the frontend can be exercised offline.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::{json, Value};

use crate::api::response;
use crate::logger;

/// The fixed demo payload: one fictitious drink under a `drinks` key.
/// All fields are literal constants, never computed.
pub fn demo_payload() -> Value {
    json!({
        "drinks": [
            {
                "strDrink": "Cóctel Simulado",
                "strCategory": "Demo Category",
                "strAlcoholic": "Non alcoholic",
                "strInstructions": "Mezclar ingredientes imaginarios y servir frío.",
                "strDrinkThumb": "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRst5iDaj9RDfp6FpW3uLWFE0nnPSDAoPPWsg&s"
            }
        ]
    })
}

/// Handle `GET /api/demo`
pub fn demo() -> Response<Full<Bytes>> {
    logger::log_api_request("GET", "/api/demo", 200);
    response::json_response(StatusCode::OK, &demo_payload())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_payload_has_exactly_one_drink() {
        let payload = demo_payload();
        let drinks = payload["drinks"].as_array().unwrap();
        assert_eq!(drinks.len(), 1);
    }

    #[test]
    fn test_demo_payload_fields() {
        let payload = demo_payload();
        let drink = &payload["drinks"][0];
        assert_eq!(drink["strDrink"], "Cóctel Simulado");
        assert_eq!(drink["strCategory"], "Demo Category");
        assert_eq!(drink["strAlcoholic"], "Non alcoholic");
        assert_eq!(
            drink["strInstructions"],
            "Mezclar ingredientes imaginarios y servir frío."
        );
        assert!(drink["strDrinkThumb"].as_str().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_demo_payload_is_deterministic() {
        assert_eq!(demo_payload(), demo_payload());
    }

    #[test]
    fn test_demo_response_status() {
        assert_eq!(demo().status(), StatusCode::OK);
    }
}
