use crate::application::dto::DetailOptions;
use crate::license_resolution::domain::{LicenseDetails, LicenseDetailsOutcome, OsadlInfo};
use crate::ports::outbound::LicenseRecordStore;
use crate::shared::{EngineError, Result};
use tracing::{debug, warn};

/// GetLicenseDetailsUseCase - looks up descriptive metadata for an SPDX id
///
/// Ids are matched case-insensitively. Compatibility data from OSADL is
/// attached when available; failing to fetch it never fails the lookup.
pub struct GetLicenseDetailsUseCase<LS> {
    record_store: LS,
    options: DetailOptions,
}

impl<LS: LicenseRecordStore> GetLicenseDetailsUseCase<LS> {
    pub fn new(record_store: LS, options: DetailOptions) -> Self {
        Self {
            record_store,
            options,
        }
    }

    /// Executes the detail lookup
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` for a blank id and propagates
    /// record store faults. An unknown id is `LicenseDetailsOutcome::NotFound`.
    pub async fn execute(&self, spdx_id: &str) -> Result<LicenseDetailsOutcome> {
        let spdx_id = spdx_id.trim();
        if spdx_id.is_empty() {
            return Err(EngineError::invalid_input("license id", "must not be empty").into());
        }

        let normalized = spdx_id.to_uppercase();
        let Some(detail) = self
            .record_store
            .get_license_detail_by_code(&normalized, true)
            .await?
        else {
            warn!(license_id = spdx_id, "license details not found");
            return Ok(LicenseDetailsOutcome::NotFound {
                id: spdx_id.to_string(),
            });
        };

        let osadl = if self.options.osadl_enrichment {
            self.fetch_osadl(&detail.license_id).await
        } else {
            None
        };

        Ok(LicenseDetailsOutcome::Found(LicenseDetails::from_detail(
            detail, osadl,
        )))
    }

    async fn fetch_osadl(&self, license_id: &str) -> Option<OsadlInfo> {
        match self.record_store.get_osadl_compatibility(license_id).await {
            Ok(info) => {
                if info.is_none() {
                    debug!(license_id, "no OSADL compatibility data");
                }
                info
            }
            Err(e) => {
                warn!(license_id, error = %e, "failed to fetch OSADL compatibility data");
                None
            }
        }
    }
}
