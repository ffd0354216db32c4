use serde::{Deserialize, Serialize};

/// One entry of the bundled SPDX license list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxLicenseInfo {
    pub license_id: String,
    #[serde(rename = "name")]
    pub full_name: String,
    #[serde(default)]
    pub details_url: String,
    #[serde(rename = "reference", default)]
    pub reference_url: String,
    #[serde(default)]
    pub reference_number: i32,
    #[serde(rename = "isDeprecatedLicenseId", default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub is_osi_approved: bool,
    #[serde(default)]
    pub see_also: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fsf_libre: Option<bool>,
}

/// Top-level shape of the SPDX `licenses.json` document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxLicenseList {
    pub license_list_version: String,
    pub licenses: Vec<SpdxLicenseInfo>,
}
