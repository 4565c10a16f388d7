use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Correlates one recommendation request across handler logs and the response
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Client-supplied ID, if the header holds a UUID
    fn from_request(request: &Request) -> Option<Self> {
        let raw = request.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
        Uuid::parse_str(raw.trim()).ok().map(RequestId)
    }

    fn header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.0.hyphenated().to_string()).ok()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Attaches a [`RequestId`] to the request extensions and to the response
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request).unwrap_or_default();
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;
    if let Some(value) = request_id.header_value() {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// `TraceLayer` span; must run inside [`request_id_middleware`] to see the ID
pub fn make_span_with_request_id(request: &Request<Body>) -> tracing::Span {
    match request.extensions().get::<RequestId>() {
        Some(request_id) => tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        ),
        None => tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
        ),
    }
}
