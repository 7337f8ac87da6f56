use uuid::Uuid;

/// Length of the random cache-busting token appended to asset URLs.
const CACHE_BUSTER_LEN: usize = 6;

/// The kind of hosted asset a URL is expected to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Script,
    Style,
}

impl ContentKind {
    /// MIME type the asset host must declare for this kind.
    ///
    /// Matching is by substring, so a header such as
    /// `application/javascript; charset=utf-8` satisfies `Script`.
    pub fn expected_mime(self) -> &'static str {
        match self {
            ContentKind::Script => "application/javascript",
            ContentKind::Style => "text/css",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Script => "JavaScript",
            ContentKind::Style => "CSS",
        }
    }
}

/// Resolved URLs of the two hosted component files.
///
/// Derived from the configured domain and version, never persisted. The
/// URLs are built by plain concatenation: a trailing slash on the domain is
/// the operator's responsibility, and a malformed version simply produces a
/// URL the reachability probe will reject at save time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    pub script_url: String,
    pub style_url: String,
}

impl AssetLocation {
    /// Resolves the component URLs for a domain/version pair.
    ///
    /// Produces `{domain}/boat-finder-component-{version}.js` and the
    /// analogous `.css` URL, without any cache-busting token. This is the
    /// form the save-time reachability check probes.
    pub fn resolve(domain: &str, version: &str) -> Self {
        Self {
            script_url: format!("{}/boat-finder-component-{}.js", domain, version),
            style_url: format!("{}/boat-finder-component-{}.css", domain, version),
        }
    }

    /// Returns render-time URLs carrying a fresh `r=` cache-busting token.
    ///
    /// One token is generated per call and shared by both URLs, so two
    /// renders never hit the same intermediary cache entry. Never used on
    /// the validation path.
    pub fn with_cache_buster(&self) -> Self {
        let token = cache_buster_token();
        Self {
            script_url: format!("{}?r={}", self.script_url, token),
            style_url: format!("{}?r={}", self.style_url, token),
        }
    }
}

/// Generates a random alphanumeric token of `CACHE_BUSTER_LEN` characters.
fn cache_buster_token() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..CACHE_BUSTER_LEN].to_string()
}
