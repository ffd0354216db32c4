use serde::{Deserialize, Serialize};

/// Canonical license row referenced by associations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub id: i32,
    /// SPDX boolean expression, or a legacy `;` / `/` separated list
    #[serde(rename = "spdx")]
    pub spdx_expression: String,
    #[serde(default)]
    pub name: String,
}

impl LicenseRecord {
    pub fn new(id: i32, spdx_expression: &str, name: &str) -> Self {
        Self {
            id,
            spdx_expression: spdx_expression.to_string(),
            name: name.to_string(),
        }
    }
}

/// Descriptive license row from the detail table, keyed by SPDX id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseDetail {
    pub license_id: String,
    pub name: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub details_url: String,
    #[serde(default)]
    pub reference_number: i32,
    #[serde(default)]
    pub is_deprecated_license_id: bool,
    #[serde(default)]
    pub is_osi_approved: bool,
    #[serde(default)]
    pub is_fsf_libre: bool,
    #[serde(default)]
    pub see_also: Vec<String>,
}

/// OSADL compatibility metadata for one license
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsadlInfo {
    pub license_id: String,
    #[serde(default)]
    pub compatibilities: Vec<String>,
    #[serde(default)]
    pub incompatibilities: Vec<String>,
    #[serde(default)]
    pub depending_compatibilities: Vec<String>,
    #[serde(default)]
    pub copyleft_clause: bool,
    #[serde(default)]
    pub patent_hints: bool,
    #[serde(default)]
    pub use_cases: Vec<String>,
}
