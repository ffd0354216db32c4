use async_trait::async_trait;
use purl_licenses::license_resolution::domain::ResolvedComponent;
use purl_licenses::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock ComponentResolver for testing
///
/// Resolves `(purl, requirement)` pairs registered with `with_component`;
/// a requirement of `*` matches any requirement for that purl.
pub struct MockComponentResolver {
    pub components: HashMap<(String, String), String>,
    pub should_fail: bool,
    calls: AtomicUsize,
}

impl MockComponentResolver {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_component(mut self, purl: &str, requirement: &str, version: &str) -> Self {
        self.components.insert(
            (purl.to_string(), requirement.to_string()),
            version.to_string(),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockComponentResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComponentResolver for MockComponentResolver {
    async fn resolve_version(&self, purl: &str, requirement: &str) -> Result<ResolvedComponent> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock component resolver failure");
        }

        let exact = (purl.to_string(), requirement.to_string());
        let any = (purl.to_string(), "*".to_string());
        match self.components.get(&exact).or_else(|| self.components.get(&any)) {
            Some(version) => Ok(ResolvedComponent::new(purl, version.clone())),
            None => anyhow::bail!("component not found: {}@{}", purl, requirement),
        }
    }
}
