use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::embed::domain::ContentKind;
use crate::ports::outbound::AssetProbe;
use crate::shared::Result;

/// Timeout for a single reachability probe, in seconds.
const PROBE_TIMEOUT_SECS: u64 = 40;

/// HttpAssetProbe adapter for checking hosted asset URLs.
///
/// This adapter implements the AssetProbe port with an HTTP HEAD request:
/// no body is fetched, only the declared Content-Type is inspected. It is
/// invoked exactly twice per settings-save attempt (once per asset file)
/// and never on the page-render path, so a slow asset host can delay an
/// administrator's save but never an end-user page view.
pub struct HttpAssetProbe {
    client: reqwest::Client,
}

impl HttpAssetProbe {
    /// Creates a new probe with the bounded timeout and a crate user agent.
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("boat-finder-embed/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl AssetProbe for HttpAssetProbe {
    async fn check(&self, url: &str, kind: ContentKind) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                if !response.status().is_success() {
                    debug!("probe of {} returned status {}", url, response.status());
                    return false;
                }
                let content_type = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("");
                declared_kind_matches(content_type, kind)
            }
            Err(e) => {
                // Unreachable, refused or timed out: a failed check, not an
                // error for the caller.
                debug!("probe of {} failed: {}", url, e);
                false
            }
        }
    }
}

/// Whether a declared Content-Type satisfies the expected kind.
///
/// Matching is by substring so charset suffixes and vendor variations pass,
/// e.g. `application/javascript; charset=utf-8` satisfies `Script`.
fn declared_kind_matches(content_type: &str, kind: ContentKind) -> bool {
    content_type.contains(kind.expected_mime())
}
