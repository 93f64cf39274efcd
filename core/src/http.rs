//! HTTP exchange types seen by the call wrapper.
//!
//! # Design
//! These types describe requests and completed responses as plain data. The
//! transport builds them; the wrapper only reads them. A `Response` carries
//! either a body already decoded by the transport's serialization layer
//! (success statuses) or the raw `ErrorBody` (failure statuses), mirroring
//! what a typed HTTP client hands back after a round-trip.
//!
//! All fields use owned types so values can move across the transport's
//! worker threads without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// The original HTTP request behind a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Raw payload of a non-2xx response, left undecoded for the error-body
/// decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ErrorBody {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn json(text: impl Into<String>) -> Self {
        Self {
            content_type: Some("application/json".to_string()),
            bytes: text.into().into_bytes(),
        }
    }

    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }
}

/// A completed HTTP exchange.
///
/// For 2xx statuses `body` holds the decoded payload (or `None` when the
/// server sent no content) and `error_body` is `None`. For other statuses
/// `body` is `None` and `error_body` holds whatever the server sent.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<T>,
    pub error_body: Option<ErrorBody>,
}

impl<T> Response<T> {
    /// A synthetic `200 OK` carrying `body`.
    pub fn success(body: T) -> Self {
        Self::success_with_status(200, body)
    }

    pub fn success_with_status(status: u16, body: T) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Some(body),
            error_body: None,
        }
    }

    /// A response with no body at all, e.g. `204 No Content`.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
            error_body: None,
        }
    }

    pub fn error(status: u16, error_body: ErrorBody) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
            error_body: Some(error_body),
        }
    }

    /// True for 2xx statuses.
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
