// Azul Zulu distribution provider

use crate::distributions::catalog::{CatalogFetcher, ReleaseRecord, SelectionQuery};
use crate::distributions::distribution_trait::{JdkDistribution, JdkRequest, ResolvedJdk};
use crate::distributions::http;
use crate::distributions::platform;
use crate::distributions::version_data::RawVersion;
use crate::distributions::version_selector;
use crate::distributions::version_spec::VersionSpec;
use crate::error::{FetchError, ResolveError};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use std::sync::Arc;

const BASE_URL: &str = "https://api.azul.com/zulu/download/community/v1.0/bundles/";

/// One row of the Zulu community bundle listing.
///
/// Attribute columns are optional: the API omits columns the query already
/// pinned server-side, in which case they are known to equal the query
/// values.
#[derive(Debug, Clone, Deserialize)]
struct ZuluBundle {
    #[allow(dead_code)] // Required for deserialization but not used
    id: u64,
    #[allow(dead_code)] // Required for deserialization but not used
    name: String,
    url: String,
    jdk_version: RawVersion,
    #[allow(dead_code)] // Packaging metadata; selection runs on jdk_version
    #[serde(default)]
    zulu_version: Option<RawVersion>,
    #[serde(default)]
    os: Option<String>,
    #[serde(default)]
    arch: Option<String>,
    #[serde(default)]
    hw_bitness: Option<String>,
    #[serde(default)]
    bundle_type: Option<String>,
    #[serde(default)]
    javafx: Option<bool>,
    #[serde(default)]
    release_status: Option<String>,
}

impl ZuluBundle {
    fn into_record(self, query: &SelectionQuery) -> ReleaseRecord {
        ReleaseRecord {
            raw_version: self.jdk_version,
            url: self.url,
            os: self.os.unwrap_or_else(|| query.os.clone()),
            arch: self.arch.unwrap_or_else(|| query.arch.clone()),
            hw_bitness: self.hw_bitness.unwrap_or_else(|| query.hw_bitness.clone()),
            bundle_type: self.bundle_type.unwrap_or_else(|| query.bundle_type.clone()),
            javafx: self.javafx.unwrap_or(query.javafx),
            early_access: self
                .release_status
                .map(|status| status == "ea")
                .unwrap_or(query.early_access),
        }
    }
}

fn catalog_url(query: &SelectionQuery) -> String {
    let params = query
        .query_pairs()
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", BASE_URL, params)
}

/// HTTP-backed fetcher against the Zulu community bundle API
pub struct ZuluCatalog {
    client: reqwest::Client,
}

impl ZuluCatalog {
    pub fn new() -> Self {
        Self {
            client: http::client(),
        }
    }
}

impl Default for ZuluCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogFetcher for ZuluCatalog {
    async fn fetch(&self, query: &SelectionQuery) -> Result<Vec<ReleaseRecord>, FetchError> {
        let url = catalog_url(query);
        debug!("fetching zulu catalog: {}", url);
        let bundles: Vec<ZuluBundle> = http::fetch_json(&self.client, &url).await?;
        Ok(bundles
            .into_iter()
            .map(|bundle| bundle.into_record(query))
            .collect())
    }
}

pub struct ZuluDistribution {
    catalog: Arc<dyn CatalogFetcher>,
}

impl ZuluDistribution {
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(ZuluCatalog::new()))
    }

    /// Substitute the catalog fetcher, e.g. with a fixture-backed stub
    pub fn with_catalog(catalog: Arc<dyn CatalogFetcher>) -> Self {
        Self { catalog }
    }

    fn build_query(
        &self,
        architecture: &str,
        package_type: &str,
        early_access: bool,
    ) -> SelectionQuery {
        let arch = platform::architecture_options(architecture);
        let bundle = platform::bundle_options(package_type);
        SelectionQuery {
            os: platform::os_option().to_string(),
            ext: platform::archive_extension().to_string(),
            bundle_type: bundle.bundle_type,
            javafx: bundle.javafx,
            arch: arch.arch,
            hw_bitness: arch.hw_bitness,
            abi: arch.abi,
            early_access,
        }
    }
}

impl Default for ZuluDistribution {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JdkDistribution for ZuluDistribution {
    fn name(&self) -> &'static str {
        "zulu"
    }

    async fn resolve(&self, request: &JdkRequest) -> Result<ResolvedJdk, ResolveError> {
        let spec = VersionSpec::parse(&request.version)?;
        let query = self.build_query(
            &request.architecture,
            &request.package_type,
            spec.is_early_access(),
        );

        let records = self.catalog.fetch(&query).await?;
        debug!("zulu catalog returned {} record(s)", records.len());

        let winner = version_selector::select_package(&query, &spec, &request.version, records)?;
        Ok(ResolvedJdk {
            version: winner.raw_version.to_string(),
            url: winner.url,
        })
    }

    async fn list_versions(
        &self,
        architecture: &str,
        package_type: &str,
        early_access: bool,
    ) -> Result<Vec<String>, ResolveError> {
        let query = self.build_query(architecture, package_type, early_access);
        let mut records = self.catalog.fetch(&query).await?;
        records.retain(|record| record.matches_query(&query));
        records.sort_by(|a, b| {
            b.raw_version
                .coerce()
                .cmp(&a.raw_version.coerce())
                .then_with(|| b.raw_version.cmp(&a.raw_version))
        });

        let mut versions: Vec<String> = Vec::new();
        for record in records {
            let display = record.raw_version.to_string();
            if !versions.contains(&display) {
                versions.push(display);
            }
        }
        Ok(versions)
    }
}
