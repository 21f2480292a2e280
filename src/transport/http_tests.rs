//! Tests for the tweet API call types.

use http::HeaderValue;
use serde_json::json;

use super::{API_KEY_HEADER, ApiRequest, ApiResponse, HttpClient, HttpError};

fn endpoint() -> url::Url {
    url::Url::parse("http://localhost:5001/api/post-tweet").unwrap()
}

mod api_request {
    use super::*;

    #[test]
    fn json_serializes_body() {
        let req = ApiRequest::json(
            endpoint(),
            HeaderValue::from_static("secret"),
            &json!({ "tweet": "hello" }),
        )
        .unwrap();

        assert_eq!(req.endpoint, endpoint());
        assert_eq!(req.json, br#"{"tweet":"hello"}"#);
    }

    #[test]
    fn headers_carry_content_type_and_api_key() {
        let req =
            ApiRequest::json(endpoint(), HeaderValue::from_static("secret"), &json!({})).unwrap();

        let headers = req.headers();

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "secret");
    }

    #[test]
    fn sensitive_key_stays_sensitive_in_headers() {
        let mut key = HeaderValue::from_static("secret");
        key.set_sensitive(true);
        let req = ApiRequest::json(endpoint(), key, &json!({})).unwrap();

        assert!(req.headers().get(API_KEY_HEADER).unwrap().is_sensitive());
        assert!(!format!("{req:?}").contains("secret"));
    }

    #[test]
    fn unserializable_body_is_an_error() {
        let mut body = std::collections::HashMap::new();
        body.insert(vec![1_u8], "map keys must be strings");

        let result = ApiRequest::json(endpoint(), HeaderValue::from_static("k"), &body);

        assert!(result.is_err());
    }
}

mod http_error {
    use super::*;

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn unreachable_includes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = HttpError::Unreachable(Box::new(io));

        assert_eq!(error.to_string(), "Tweet API unreachable: refused");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn malformed_includes_detail() {
        let error = HttpError::Malformed("bad scheme".to_string());

        assert_eq!(error.to_string(), "Malformed request: bad scheme");
    }
}

mod http_client_trait {
    use super::*;

    struct EchoClient;

    impl HttpClient for EchoClient {
        async fn request(&self, req: ApiRequest) -> Result<ApiResponse, HttpError> {
            Ok(ApiResponse::new(http::StatusCode::OK, req.json))
        }
    }

    #[tokio::test]
    async fn custom_client_can_implement_trait() {
        let req = ApiRequest::json(endpoint(), HeaderValue::from_static("k"), "echo").unwrap();

        let resp = EchoClient.request(req).await.unwrap();

        assert_eq!(resp.status, http::StatusCode::OK);
        assert_eq!(resp.body, br#""echo""#);
    }
}
