use crate::license_resolution::domain::ResolvedComponent;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// ComponentResolver port for turning a PURL and requirement into a version
///
/// Version-range semantics live entirely behind this port; the engine never
/// interprets requirements itself.
#[async_trait]
pub trait ComponentResolver: Send + Sync {
    /// Resolves the concrete component version for a query
    ///
    /// # Arguments
    /// * `purl` - Package URL without version
    /// * `requirement` - Version or version requirement; may be empty
    ///
    /// # Errors
    /// Returns an error when the component or a matching version is unknown,
    /// or when the backing service fails. The engine treats both the same way.
    async fn resolve_version(&self, purl: &str, requirement: &str) -> Result<ResolvedComponent>;
}

#[async_trait]
impl<T: ComponentResolver + ?Sized> ComponentResolver for Arc<T> {
    async fn resolve_version(&self, purl: &str, requirement: &str) -> Result<ResolvedComponent> {
        (**self).resolve_version(purl, requirement).await
    }
}
