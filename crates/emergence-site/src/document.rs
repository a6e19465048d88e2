//! Generated response documents.

/// `Content-Type` of robots.txt.
pub const TEXT_PLAIN: &str = "text/plain";

/// `Content-Type` of sitemap.xml.
pub const APPLICATION_XML: &str = "application/xml";

/// A freshly generated text payload with its response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Response body.
    pub body: String,

    /// Value of the `Content-Type` header.
    pub content_type: &'static str,

    /// Seconds the response may be cached.
    pub max_age: u32,
}

impl Document {
    /// Create a new document.
    #[must_use]
    pub fn new(body: String, content_type: &'static str, max_age: u32) -> Self {
        Self {
            body,
            content_type,
            max_age,
        }
    }

    /// Value of the `Cache-Control` header.
    #[must_use]
    pub fn cache_control(&self) -> String {
        format!("max-age={}", self.max_age)
    }

    /// Response headers as name/value pairs.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Content-Type", self.content_type.to_string()),
            ("Cache-Control", self.cache_control()),
        ]
    }
}
