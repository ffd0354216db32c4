use crate::application::dto::ComponentRequest;
use crate::license_resolution::domain::{
    BatchResolution, ComponentLicenseResult, LicenseDetailsOutcome,
};
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseResolutionPort - Inbound port used by transport adapters
///
/// This is the engine's whole public surface: batch and single component
/// resolution plus license detail lookup.
#[async_trait]
pub trait LicenseResolutionPort: Send + Sync {
    /// Resolves licenses for every request, one result per request, in order
    ///
    /// # Errors
    /// Returns an error only for input validation failures (empty batch or
    /// empty purl). Per-item resolution misses are empty result items.
    async fn resolve_batch(&self, requests: &[ComponentRequest]) -> Result<BatchResolution>;

    /// Resolves licenses for a single component
    async fn resolve(&self, request: &ComponentRequest) -> Result<ComponentLicenseResult>;

    /// Looks up descriptive metadata for an SPDX license id
    ///
    /// # Errors
    /// Returns an error for an empty id or a record store fault; an unknown id
    /// is `LicenseDetailsOutcome::NotFound`.
    async fn get_details(&self, spdx_id: &str) -> Result<LicenseDetailsOutcome>;
}
