use std::collections::HashMap;

use async_trait::async_trait;
use boat_finder_embed::prelude::*;

/// Stub responder standing in for the asset host.
///
/// Maps URLs to the Content-Type they would declare; a URL with no entry
/// behaves like an unreachable host (the probe reports false).
#[derive(Default)]
pub struct MockAssetProbe {
    content_types: HashMap<String, String>,
}

impl MockAssetProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reachable URL declaring the given Content-Type.
    pub fn with_asset(mut self, url: &str, content_type: &str) -> Self {
        self.content_types
            .insert(url.to_string(), content_type.to_string());
        self
    }
}

#[async_trait]
impl AssetProbe for MockAssetProbe {
    async fn check(&self, url: &str, kind: ContentKind) -> bool {
        match self.content_types.get(url) {
            Some(content_type) => content_type.contains(kind.expected_mime()),
            None => false,
        }
    }
}
