use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Detection method that reported a license association.
///
/// Stored as a small integer in the license data; values outside the known set
/// are preserved as `Unknown` so they still take part in iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i16", into = "i16")]
pub enum SourceId {
    /// Declared at component level, e.g. a package manifest field
    ComponentDeclared,
    /// `SPDX-License-Identifier` tag found in shipped attribution files
    SpdxAttributionFile,
    /// Internal scan of LICENSE / COPYING / META-INF style files
    InternalAttributionFile,
    /// Third-party scanner output on attribution files
    ScancodeAttributionFile,
    Unknown(i16),
}

impl SourceId {
    pub fn as_raw(self) -> i16 {
        match self {
            SourceId::ComponentDeclared => 0,
            SourceId::InternalAttributionFile => 3,
            SourceId::ScancodeAttributionFile => 5,
            SourceId::SpdxAttributionFile => 6,
            SourceId::Unknown(raw) => raw,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceId::ComponentDeclared => "component_declared",
            SourceId::SpdxAttributionFile => "spdx_attribution_file",
            SourceId::InternalAttributionFile => "internal_attribution_file",
            SourceId::ScancodeAttributionFile => "scancode_attribution_file",
            SourceId::Unknown(_) => "unknown",
        }
    }
}

impl From<i16> for SourceId {
    fn from(raw: i16) -> Self {
        match raw {
            0 => SourceId::ComponentDeclared,
            3 => SourceId::InternalAttributionFile,
            5 => SourceId::ScancodeAttributionFile,
            6 => SourceId::SpdxAttributionFile,
            other => SourceId::Unknown(other),
        }
    }
}

impl From<SourceId> for i16 {
    fn from(source: SourceId) -> Self {
        source.as_raw()
    }
}

impl FromStr for SourceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "component_declared" => Ok(SourceId::ComponentDeclared),
            "spdx_attribution_file" => Ok(SourceId::SpdxAttributionFile),
            "internal_attribution_file" => Ok(SourceId::InternalAttributionFile),
            "scancode_attribution_file" => Ok(SourceId::ScancodeAttributionFile),
            _ => Err(format!(
                "Invalid source: {}. Expected one of component_declared, spdx_attribution_file, \
                 internal_attribution_file, scancode_attribution_file",
                s
            )),
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceId::Unknown(raw) => write!(f, "unknown({})", raw),
            known => write!(f, "{}", known.name()),
        }
    }
}

/// One detection event: a license believed to apply to purl@version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseAssociation {
    pub purl: String,
    /// `None` or empty marks an unversioned association
    #[serde(default)]
    pub version: Option<String>,
    pub source_id: SourceId,
    pub license_id: i32,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl LicenseAssociation {
    pub fn new(purl: &str, version: Option<&str>, source_id: SourceId, license_id: i32) -> Self {
        Self {
            purl: purl.to_string(),
            version: version.map(String::from),
            source_id,
            license_id,
            date: None,
        }
    }

    pub fn is_unversioned(&self) -> bool {
        self.version.as_deref().map_or(true, str::is_empty)
    }
}
