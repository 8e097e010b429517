use axum::http::{HeaderValue, header};

use super::*;

// =============================================================
// upstream_url
// =============================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("https://api.example.com", "/api/bots?limit=5"),
        "https://api.example.com/api/bots?limit=5"
    );
}

#[test]
fn upstream_url_avoids_double_slash() {
    assert_eq!(upstream_url("http://127.0.0.1:5000/", "/api/auth/me"), "http://127.0.0.1:5000/api/auth/me");
}

// =============================================================
// Header filtering
// =============================================================

#[test]
fn hop_by_hop_headers_are_detected() {
    for name in [header::CONNECTION, header::HOST, header::CONTENT_LENGTH, header::TRANSFER_ENCODING] {
        assert!(is_hop_by_hop(&name), "{name}");
    }
    assert!(is_hop_by_hop(&HeaderName::from_static("keep-alive")));
}

#[test]
fn end_to_end_headers_are_kept() {
    for name in [header::COOKIE, header::SET_COOKIE, header::CONTENT_TYPE, header::AUTHORIZATION] {
        assert!(!is_hop_by_hop(&name), "{name}");
    }
}

#[test]
fn forwardable_headers_drops_hop_by_hop_and_keeps_repeats() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = forwardable_headers(&headers);
    assert!(out.get(header::HOST).is_none());
    assert!(out.get(header::CONNECTION).is_none());
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn body_error_maps_to_bad_request() {
    let err = ProxyError::Body(axum::Error::new(std::io::Error::other("too large")));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn response_error_maps_to_bad_gateway() {
    let http_err = axum::http::Response::builder().status(1000u16).body(Body::empty()).unwrap_err();
    let err = ProxyError::Response(http_err);
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    // Port 9 (discard) on loopback is closed in test environments.
    let upstream = Upstream::new("http://127.0.0.1:9".to_owned(), Duration::from_secs(2)).unwrap();
    let req = axum::http::Request::builder().uri("/api/bots").body(Body::empty()).unwrap();
    let err = upstream.forward(req).await.unwrap_err();
    assert!(matches!(err, ProxyError::Upstream(_)));
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}
