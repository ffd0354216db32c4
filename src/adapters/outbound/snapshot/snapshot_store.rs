use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::license_resolution::domain::{
    LicenseAssociation, LicenseDetail, LicenseRecord, OsadlInfo, ResolvedComponent, SourceId,
};
use crate::ports::outbound::{ComponentResolver, LicenseRecordStore};
use crate::shared::{EngineError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// On-disk layout of a license data snapshot
#[derive(Debug, Default, Deserialize)]
struct SnapshotData {
    /// purl -> known versions, oldest first
    #[serde(default)]
    components: HashMap<String, Vec<String>>,
    #[serde(default)]
    purl_licenses: Vec<LicenseAssociation>,
    #[serde(default)]
    licenses: Vec<LicenseRecord>,
    #[serde(default)]
    license_details: Vec<LicenseDetail>,
    #[serde(default)]
    osadl: Vec<OsadlInfo>,
}

/// SnapshotStore adapter serving license data from a JSON snapshot
///
/// Implements both `LicenseRecordStore` and `ComponentResolver`, which makes
/// the engine usable offline. The resolver only understands exact versions;
/// an empty requirement picks the newest listed version.
#[derive(Debug)]
pub struct SnapshotStore {
    components: HashMap<String, Vec<String>>,
    associations: Vec<LicenseAssociation>,
    records: HashMap<i32, LicenseRecord>,
    details: Vec<LicenseDetail>,
    osadl: Vec<OsadlInfo>,
}

impl SnapshotStore {
    /// Loads a snapshot file
    ///
    /// # Errors
    /// Returns `EngineError::SnapshotLoad` if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let snapshot_error = |details: String| EngineError::SnapshotLoad {
            path: path.to_path_buf(),
            details,
        };

        let content = FileSystemReader::new()
            .read_to_string(path, "snapshot")
            .map_err(|e| snapshot_error(e.to_string()))?;
        let store = Self::from_json(&content).map_err(|e| snapshot_error(e.to_string()))?;

        debug!(
            path = %path.display(),
            components = store.components.len(),
            associations = store.associations.len(),
            licenses = store.records.len(),
            "loaded license data snapshot"
        );
        Ok(store)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let data: SnapshotData = serde_json::from_str(content)?;
        Ok(Self::from_data(data))
    }

    fn from_data(data: SnapshotData) -> Self {
        Self {
            components: data.components,
            associations: data.purl_licenses,
            records: data.licenses.into_iter().map(|r| (r.id, r)).collect(),
            details: data.license_details,
            osadl: data.osadl,
        }
    }

    fn matching<'a>(
        &'a self,
        purl: &'a str,
        sources: &'a [SourceId],
    ) -> impl Iterator<Item = &'a LicenseAssociation> + 'a {
        self.associations
            .iter()
            .filter(move |a| a.purl == purl && sources.contains(&a.source_id))
    }
}

#[async_trait]
impl ComponentResolver for SnapshotStore {
    async fn resolve_version(&self, purl: &str, requirement: &str) -> Result<ResolvedComponent> {
        let Some(versions) = self.components.get(purl) else {
            anyhow::bail!("component not found: {}", purl);
        };

        let requirement = requirement.trim();
        let version = if requirement.is_empty() {
            versions.last()
        } else {
            versions.iter().find(|v| v.as_str() == requirement)
        };

        match version {
            Some(version) => Ok(ResolvedComponent::new(purl, version.clone())),
            None => anyhow::bail!(
                "no version of {} matches requirement '{}'",
                purl,
                requirement
            ),
        }
    }
}

#[async_trait]
impl LicenseRecordStore for SnapshotStore {
    async fn find_associations(
        &self,
        purl: &str,
        version: &str,
        sources: &[SourceId],
    ) -> Result<Vec<LicenseAssociation>> {
        Ok(self
            .matching(purl, sources)
            .filter(|a| a.version.as_deref() == Some(version))
            .cloned()
            .collect())
    }

    async fn find_unversioned_associations(
        &self,
        purl: &str,
        sources: &[SourceId],
    ) -> Result<Vec<LicenseAssociation>> {
        let mut found: Vec<LicenseAssociation> = self
            .matching(purl, sources)
            .filter(|a| a.is_unversioned())
            .cloned()
            .collect();
        found.sort_by_key(|a| (a.source_id.as_raw(), a.license_id));
        Ok(found)
    }

    async fn get_license_record(&self, license_id: i32) -> Result<Option<LicenseRecord>> {
        Ok(self.records.get(&license_id).cloned())
    }

    async fn get_license_detail_by_code(
        &self,
        spdx_id: &str,
        case_insensitive: bool,
    ) -> Result<Option<LicenseDetail>> {
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
        Ok(self
            .osadl
            .iter()
            .find(|o| o.license_id.eq_ignore_ascii_case(spdx_id))
            .cloned())
    }
}
