//! HTTP client abstraction.
//!
//! The actual HTTP client is abstracted via a trait to allow different
//! implementations (reqwest, ureq, a browser fetch shim) and in-memory
//! loopback clients in tests.

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Create a resource.
    Post,
    /// Update a resource.
    Put,
    /// Delete a resource.
    Delete,
}

impl Method {
    /// Returns the method's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// A response with the given status and empty body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client abstraction.
///
/// Implement this trait to provide the actual transport. A transport
/// failure (no response at all) is reported as the error string; an HTTP
/// error response is a normal `Ok` with its status.
pub trait HttpClient: Send + Sync {
    /// Sends a request and returns the raw response.
    fn send(&self, method: Method, url: &str, body: Option<&[u8]>)
        -> Result<HttpResponse, String>;
}

// Shared handles forward, so a caller can keep one to the client it
// handed to a store (loopback servers rely on this in tests).
impl<C: HttpClient + ?Sized> HttpClient for std::sync::Arc<C> {
    fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<HttpResponse, String> {
        (**self).send(method, url, body)
    }
}
