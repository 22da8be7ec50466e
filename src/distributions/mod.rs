// Distributions module for vendor provider implementations

use std::collections::HashMap;
use std::sync::Arc;

pub mod catalog;
pub mod distribution_trait;
pub mod http;
pub mod platform;
pub mod version_data;
pub mod version_selector;
pub mod version_spec;
pub mod zulu;

pub use distribution_trait::{JdkDistribution, JdkRequest, ResolvedJdk};
pub use zulu::ZuluDistribution;

pub const DEFAULT_DISTRIBUTION: &str = "zulu";

/// Registry for JDK distribution providers
pub struct DistributionRegistry {
    distributions: HashMap<String, Arc<dyn JdkDistribution>>,
}

impl DistributionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            distributions: HashMap::new(),
        };

        registry.register(Arc::new(ZuluDistribution::new()));

        registry
    }

    fn register(&mut self, distribution: Arc<dyn JdkDistribution>) {
        self.distributions
            .insert(distribution.name().to_string(), distribution);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn JdkDistribution>> {
        self.distributions.get(name)
    }

    pub fn get_or_error(&self, name: &str) -> anyhow::Result<&Arc<dyn JdkDistribution>> {
        self.get(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported distribution: '{}'. Supported distributions: {}",
                name,
                self.distributions
                    .keys()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

impl Default for DistributionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Global registry instance
lazy_static::lazy_static! {
    pub static ref REGISTRY: DistributionRegistry = DistributionRegistry::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_knows_zulu() {
        let registry = DistributionRegistry::new();
        assert!(registry.get("zulu").is_some());
        assert!(registry.get_or_error("zulu").is_ok());
    }

    #[test]
    fn test_unknown_distribution_lists_supported_ones() {
        let registry = DistributionRegistry::new();
        let err = registry.get_or_error("corretto").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'corretto'"));
        assert!(message.contains("zulu"));
    }
}
