use crate::license_resolution::domain::ResolvedComponent;
use crate::ports::outbound::ComponentResolver;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for version resolution
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    purl: String,
    requirement: String,
}

impl CacheKey {
    fn new(purl: &str, requirement: &str) -> Self {
        Self {
            purl: purl.to_string(),
            requirement: requirement.to_string(),
        }
    }
}

/// CachingComponentResolver wraps a ComponentResolver and adds in-memory caching.
///
/// Only successful resolutions are cached; a failed lookup is retried by the
/// next query that asks for it. The cache is thread-safe and suitable for
/// concurrent batch items.
pub struct CachingComponentResolver<R: ComponentResolver> {
    inner: R,
    cache: Arc<DashMap<CacheKey, ResolvedComponent>>,
}

impl<R: ComponentResolver> CachingComponentResolver<R> {
    /// Creates a new caching resolver wrapping the given inner resolver
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: ComponentResolver> ComponentResolver for CachingComponentResolver<R> {
    async fn resolve_version(&self, purl: &str, requirement: &str) -> Result<ResolvedComponent> {
        let key = CacheKey::new(purl, requirement);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let component = self.inner.resolve_version(purl, requirement).await?;
        self.cache.insert(key, component.clone());

        Ok(component)
    }
}
