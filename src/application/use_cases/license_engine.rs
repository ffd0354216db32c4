use super::{GetLicenseDetailsUseCase, ResolveComponentLicensesUseCase};
use crate::application::dto::{ComponentRequest, DetailOptions, ResolutionOptions};
use crate::license_resolution::domain::{
    BatchResolution, ComponentLicenseResult, LicenseDetailsOutcome,
};
use crate::license_resolution::services::SpdxRegistry;
use crate::ports::inbound::LicenseResolutionPort;
use crate::ports::outbound::{ComponentResolver, LicenseRecordStore};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// LicenseEngine - the inbound port backed by both use cases
///
/// The record store is shared by resolution and detail lookup, hence the
/// `Clone` bound; pass an `Arc` for stores that are not cheap to clone.
pub struct LicenseEngine<CR, LS> {
    resolve: ResolveComponentLicensesUseCase<CR, LS>,
    details: GetLicenseDetailsUseCase<LS>,
}

impl<CR, LS> LicenseEngine<CR, LS>
where
    CR: ComponentResolver,
    LS: LicenseRecordStore + Clone,
{
    pub fn new(
        component_resolver: CR,
        record_store: LS,
        registry: Arc<SpdxRegistry>,
        resolution_options: ResolutionOptions,
        detail_options: DetailOptions,
    ) -> Self {
        Self {
            resolve: ResolveComponentLicensesUseCase::new(
                component_resolver,
                record_store.clone(),
                registry,
                resolution_options,
            ),
            details: GetLicenseDetailsUseCase::new(record_store, detail_options),
        }
    }
}

#[async_trait]
impl<CR, LS> LicenseResolutionPort for LicenseEngine<CR, LS>
where
    CR: ComponentResolver,
    LS: LicenseRecordStore + Clone,
{
    async fn resolve_batch(&self, requests: &[ComponentRequest]) -> Result<BatchResolution> {
        self.resolve.execute(requests).await
    }

    async fn resolve(&self, request: &ComponentRequest) -> Result<ComponentLicenseResult> {
        self.resolve.execute_one(request).await
    }

    async fn get_details(&self, spdx_id: &str) -> Result<LicenseDetailsOutcome> {
        self.details.execute(spdx_id).await
    }
}
