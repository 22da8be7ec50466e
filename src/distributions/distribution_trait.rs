// Trait definition for JDK distribution providers

use crate::error::ResolveError;
use serde::Serialize;

/// What the caller asked for, before any catalog work
#[derive(Debug, Clone)]
pub struct JdkRequest {
    /// Version spec: "11", "8.0", "11.x", "11.0.10+9" or "17-ea"
    pub version: String,
    /// Logical architecture token (e.g. "x64", "x86", "arm")
    pub architecture: String,
    /// Package type: "jdk", "jre", "jdk+fx" or "jre+fx"
    pub package_type: String,
}

/// The single winning bundle of a resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedJdk {
    pub version: String,
    pub url: String,
}

/// Uniform contract every vendor provider implements. Each vendor's
/// idiosyncratic catalog format stays behind its own implementation;
/// nothing here installs, downloads or caches.
#[async_trait::async_trait]
pub trait JdkDistribution: Send + Sync {
    /// Get the provider name (e.g. "zulu")
    fn name(&self) -> &'static str;

    /// Resolve a version spec to exactly one bundle and its download URL.
    ///
    /// Performs exactly one catalog fetch. Parser, fetcher and selector
    /// errors propagate unchanged.
    async fn resolve(&self, request: &JdkRequest) -> Result<ResolvedJdk, ResolveError>;

    /// List the distinct available versions for a platform/package/channel
    /// combination, newest first
    async fn list_versions(
        &self,
        architecture: &str,
        package_type: &str,
        early_access: bool,
    ) -> Result<Vec<String>, ResolveError>;
}

impl std::fmt::Debug for dyn JdkDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JdkDistribution")
            .field("name", &self.name())
            .finish()
    }
}
