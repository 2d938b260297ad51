use http::{HeaderMap, StatusCode, Version};
use url::Url;

/// Snapshot of a received HTTP response, without its body
///
/// Errors keep this behind an `Arc` so that the caller, the error and any
/// rewrapped error all refer to the same response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    version: Version,
    headers: HeaderMap,
    url: Option<Url>,
}

impl HttpResponse {
    /// Create a response snapshot with no headers
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            url: None,
        }
    }

    /// Build from the head of an `http` response
    pub fn from_parts(parts: &http::response::Parts) -> Self {
        Self {
            status: parts.status,
            version: parts.version,
            headers: parts.headers.clone(),
            url: None,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Attach the URL the response was received from
    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn version(&self) -> Version {
        self.version
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl<B> From<&http::Response<B>> for HttpResponse {
    fn from(response: &http::Response<B>) -> Self {
        Self {
            status: response.status(),
            version: response.version(),
            headers: response.headers().clone(),
            url: None,
        }
    }
}

#[cfg(feature = "reqwest")]
impl From<&reqwest::Response> for HttpResponse {
    fn from(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            version: response.version(),
            headers: response.headers().clone(),
            url: Some(response.url().clone()),
        }
    }
}
