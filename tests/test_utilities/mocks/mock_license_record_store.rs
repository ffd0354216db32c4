use async_trait::async_trait;
use purl_licenses::license_resolution::domain::{LicenseDetail, OsadlInfo};
use purl_licenses::prelude::*;
use std::collections::HashMap;

/// Mock LicenseRecordStore for testing
pub struct MockLicenseRecordStore {
    pub associations: Vec<LicenseAssociation>,
    pub records: HashMap<i32, LicenseRecord>,
    pub details: Vec<LicenseDetail>,
    pub osadl: Vec<OsadlInfo>,
    pub should_fail: bool,
}

impl MockLicenseRecordStore {
    pub fn new() -> Self {
        Self {
            associations: Vec::new(),
            records: HashMap::new(),
            details: Vec::new(),
            osadl: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_association(
        mut self,
        purl: &str,
        version: Option<&str>,
        source: SourceId,
        license_id: i32,
    ) -> Self {
        self.associations
            .push(LicenseAssociation::new(purl, version, source, license_id));
        self
    }

    pub fn with_license(mut self, id: i32, spdx: &str) -> Self {
        self.records.insert(id, LicenseRecord::new(id, spdx, spdx));
        self
    }

    pub fn with_detail(mut self, spdx_id: &str, name: &str) -> Self {
        self.details.push(LicenseDetail {
            license_id: spdx_id.to_string(),
            name: name.to_string(),
            reference: format!("https://spdx.org/licenses/{}.html", spdx_id),
            details_url: format!("https://spdx.org/licenses/{}.json", spdx_id),
            reference_number: 1,
            is_deprecated_license_id: false,
            is_osi_approved: true,
            is_fsf_libre: false,
            see_also: vec![],
        });
        self
    }

    pub fn with_osadl(mut self, info: OsadlInfo) -> Self {
        self.osadl.push(info);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    fn check(&self) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock license record store failure");
        }
        Ok(())
    }
}

impl Default for MockLicenseRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LicenseRecordStore for MockLicenseRecordStore {
    async fn find_associations(
        &self,
        purl: &str,
        version: &str,
        sources: &[SourceId],
    ) -> Result<Vec<LicenseAssociation>> {
        self.check()?;
        Ok(self
            .associations
            .iter()
            .filter(|a| a.purl == purl && a.version.as_deref() == Some(version))
            .filter(|a| sources.contains(&a.source_id))
            .cloned()
            .collect())
    }

    async fn find_unversioned_associations(
        &self,
        purl: &str,
        sources: &[SourceId],
    ) -> Result<Vec<LicenseAssociation>> {
        self.check()?;
        let mut found: Vec<_> = self
            .associations
            .iter()
            .filter(|a| a.purl == purl && a.is_unversioned())
            .filter(|a| sources.contains(&a.source_id))
            .cloned()
            .collect();
        found.sort_by_key(|a| (a.source_id.as_raw(), a.license_id));
        Ok(found)
    }

    async fn get_license_record(&self, license_id: i32) -> Result<Option<LicenseRecord>> {
        self.check()?;
        Ok(self.records.get(&license_id).cloned())
    }

    async fn get_license_detail_by_code(
        &self,
        spdx_id: &str,
        case_insensitive: bool,
    ) -> Result<Option<LicenseDetail>> {
        self.check()?;
        Ok(self
            .details
            .iter()
            .find(|d| {
                if case_insensitive {
                    d.license_id.eq_ignore_ascii_case(spdx_id)
                } else {
                    d.license_id == spdx_id
                }
            })
            .cloned())
    }

    async fn get_osadl_compatibility(&self, spdx_id: &str) -> Result<Option<OsadlInfo>> {
        self.check()?;
        Ok(self
            .osadl
            .iter()
            .find(|o| o.license_id.eq_ignore_ascii_case(spdx_id))
            .cloned())
    }
}
