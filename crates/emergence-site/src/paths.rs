//! Static asset path resolution.
//!
//! Asset references coming from content data may or may not carry a
//! leading slash. [`PathResolver`] turns them into deployment-rooted paths
//! so the site works when served from a subdirectory.

use emergence_core::SiteConfig;

/// Prefixes asset paths with the deployment base path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
    base_path: String,
}

impl PathResolver {
    /// Create a resolver for the given base path. An empty base path means the site root.
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Create a resolver from site configuration.
    #[must_use]
    pub fn from_config(site: &SiteConfig) -> Self {
        Self::new(site.base_path.clone())
    }

    /// The configured base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve an asset path.
    ///
    /// Returns an empty string for a missing or empty path; otherwise the
    /// base path followed by the path with exactly one leading `/`.
    ///
    /// ```
    /// use emergence_site::PathResolver;
    ///
    /// let resolver = PathResolver::new("/exhibits/emergence");
    /// assert_eq!(
    ///     resolver.resolve(Some("images/hero.jpg")),
    ///     "/exhibits/emergence/images/hero.jpg"
    /// );
    /// assert_eq!(resolver.resolve(None), "");
    /// ```
    #[must_use]
    pub fn resolve(&self, path: Option<&str>) -> String {
        match path {
            None | Some("") => String::new(),
            Some(path) if path.starts_with('/') => format!("{}{path}", self.base_path),
            Some(path) => format!("{}/{path}", self.base_path),
        }
    }
}
