// Catalog boundary shared by distribution providers

use crate::distributions::platform;
use crate::distributions::version_data::RawVersion;
use crate::error::FetchError;

/// The vendor query derived once per resolution request. Never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionQuery {
    pub os: String,
    pub ext: String,
    pub bundle_type: String,
    pub javafx: bool,
    pub arch: String,
    pub hw_bitness: String,
    pub abi: String,
    pub early_access: bool,
}

impl SelectionQuery {
    /// Query parameters in the fixed key order fetch URLs are built with.
    /// The order only matters for reproducible fixture URLs, not for the
    /// server.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("os", self.os.clone()),
            ("ext", self.ext.clone()),
            ("bundle_type", self.bundle_type.clone()),
            ("javafx", self.javafx.to_string()),
            ("arch", self.arch.clone()),
            ("hw_bitness", self.hw_bitness.clone()),
            (
                "release_status",
                platform::release_status(self.early_access).to_string(),
            ),
        ];
        if self.javafx {
            pairs.push(("features", "fx".to_string()));
        }
        pairs
    }
}

/// One downloadable artifact from a vendor catalog, already adapted out of
/// the vendor's own schema
#[derive(Debug, Clone)]
pub struct ReleaseRecord {
    pub raw_version: RawVersion,
    pub url: String,
    pub os: String,
    pub arch: String,
    pub hw_bitness: String,
    pub bundle_type: String,
    pub javafx: bool,
    pub early_access: bool,
}

impl ReleaseRecord {
    /// Exact attribute match against the derived query; no fuzzy matching
    pub fn matches_query(&self, query: &SelectionQuery) -> bool {
        self.os == query.os
            && self.arch == query.arch
            && self.hw_bitness == query.hw_bitness
            && self.bundle_type == query.bundle_type
            && self.javafx == query.javafx
            && self.early_access == query.early_access
    }
}

/// The network boundary of the resolver: normalized query in, candidate
/// records out. Implementations own their HTTP client; tests substitute a
/// stub. One call per resolution, no retries here.
#[async_trait::async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self, query: &SelectionQuery) -> Result<Vec<ReleaseRecord>, FetchError>;
}
