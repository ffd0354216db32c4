use crate::license_resolution::domain::{SpdxLicenseInfo, SpdxLicenseList};
use crate::shared::EngineError;
use std::collections::HashMap;

/// SPDX license list bundled into the binary at build time
const EMBEDDED_LICENSE_LIST: &str = include_str!("../../../assets/spdx_licenses.json");

/// Prefix of user-defined license references, valid without a catalog entry
const LICENSE_REF_PREFIX: &str = "LicenseRef-";

/// SpdxRegistry - read-only lookup of SPDX license metadata
///
/// Built once at process start and shared by reference (usually behind an
/// `Arc`); it is never mutated afterwards, so concurrent readers need no lock.
#[derive(Debug, Clone)]
pub struct SpdxRegistry {
    license_list_version: String,
    licenses: HashMap<String, SpdxLicenseInfo>,
}

impl SpdxRegistry {
    /// Loads the registry from the embedded license list
    ///
    /// # Errors
    /// Returns `EngineError::RegistryInit` if the bundled document cannot be
    /// parsed. Callers should abort startup on this error.
    pub fn embedded() -> Result<Self, EngineError> {
        Self::from_json(EMBEDDED_LICENSE_LIST)
    }

    /// Loads the registry from an SPDX `licenses.json` document
    pub fn from_json(data: &str) -> Result<Self, EngineError> {
        let list: SpdxLicenseList =
            serde_json::from_str(data).map_err(|e| EngineError::RegistryInit {
                details: format!("failed to parse SPDX license list: {}", e),
            })?;

        if list.licenses.is_empty() {
            return Err(EngineError::RegistryInit {
                details: "SPDX license list contains no licenses".to_string(),
            });
        }

        let licenses = list
            .licenses
            .into_iter()
            .map(|license| (license.license_id.clone(), license))
            .collect();

        Ok(Self {
            license_list_version: list.license_list_version,
            licenses,
        })
    }

    pub fn license_list_version(&self) -> &str {
        &self.license_list_version
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }

    /// True for cataloged ids and for any `LicenseRef-` reference
    pub fn is_valid_license_id(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        self.licenses.contains_key(id) || id.starts_with(LICENSE_REF_PREFIX)
    }

    /// Exact-match lookup using the catalog's canonical casing
    pub fn get_details(&self, id: &str) -> Option<&SpdxLicenseInfo> {
        self.licenses.get(id)
    }

    /// Catalog name for an id, or an empty string when not cataloged
    pub fn full_name(&self, id: &str) -> &str {
        self.get_details(id)
            .map(|info| info.full_name.as_str())
            .unwrap_or("")
    }
}
