use async_trait::async_trait;

use crate::embed::domain::ContentKind;

/// AssetProbe port for save-time reachability checks of hosted asset URLs.
///
/// Implementations perform a metadata-only existence probe and report
/// pass/fail; any network failure, timeout or connection error is a failed
/// check, never an error raised to the caller. The probe runs only on the
/// administrative save path, never while rendering pages.
#[async_trait]
pub trait AssetProbe: Send + Sync {
    /// Checks that `url` is reachable and declares the expected content
    /// kind.
    async fn check(&self, url: &str, kind: ContentKind) -> bool;
}
