use crate::license_resolution::domain::{
    LicenseAssociation, LicenseDetail, LicenseRecord, OsadlInfo, SourceId,
};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// LicenseRecordStore port for read-only access to license data
///
/// "No rows" is `Ok(None)` / `Ok(vec![])`; `Err` is reserved for faults of the
/// store itself (connection loss, corrupt data).
#[async_trait]
pub trait LicenseRecordStore: Send + Sync {
    /// Associations recorded for the exact purl@version, limited to `sources`
    async fn find_associations(
        &self,
        purl: &str,
        version: &str,
        sources: &[SourceId],
    ) -> Result<Vec<LicenseAssociation>>;

    /// Associations with an empty or missing version, limited to `sources`
    ///
    /// Results are ordered by `(source_id, license_id)`.
    async fn find_unversioned_associations(
        &self,
        purl: &str,
        sources: &[SourceId],
    ) -> Result<Vec<LicenseAssociation>>;

    async fn get_license_record(&self, license_id: i32) -> Result<Option<LicenseRecord>>;

    /// Descriptive license row by SPDX id
    ///
    /// With `case_insensitive` the comparison ignores ASCII case.
    async fn get_license_detail_by_code(
        &self,
        spdx_id: &str,
        case_insensitive: bool,
    ) -> Result<Option<LicenseDetail>>;

    /// OSADL compatibility data for an SPDX id (matched case-insensitively)
    async fn get_osadl_compatibility(&self, spdx_id: &str) -> Result<Option<OsadlInfo>>;
}

#[async_trait]
impl<T: LicenseRecordStore + ?Sized> LicenseRecordStore for Arc<T> {
    async fn find_associations(
        &self,
        purl: &str,
        version: &str,
        sources: &[SourceId],
    ) -> Result<Vec<LicenseAssociation>> {
        (**self).find_associations(purl, version, sources).await
    }

    async fn find_unversioned_associations(
        &self,
        purl: &str,
        sources: &[SourceId],
    ) -> Result<Vec<LicenseAssociation>> {
        (**self).find_unversioned_associations(purl, sources).await
    }

    async fn get_license_record(&self, license_id: i32) -> Result<Option<LicenseRecord>> {
        (**self).get_license_record(license_id).await
    }

    async fn get_license_detail_by_code(
        &self,
        spdx_id: &str,
        case_insensitive: bool,
    ) -> Result<Option<LicenseDetail>> {
        (**self)
            .get_license_detail_by_code(spdx_id, case_insensitive)
            .await
    }

    async fn get_osadl_compatibility(&self, spdx_id: &str) -> Result<Option<OsadlInfo>> {
        (**self).get_osadl_compatibility(spdx_id).await
    }
}
