use super::license_record::{LicenseDetail, OsadlInfo};
use super::resolution::ResponseStatus;
use serde::Serialize;

/// SPDX section of a license details response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpdxSection {
    pub full_name: String,
    pub id: String,
    pub details_url: String,
    pub reference_url: String,
    pub is_deprecated: bool,
    pub is_osi_approved: bool,
    pub see_also: Vec<String>,
}

/// OSADL compatibility section of a license details response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsadlSection {
    pub compatibility: Vec<String>,
    pub incompatibility: Vec<String>,
    pub depending_compatibility: Vec<String>,
    pub copyleft_clause: bool,
    pub patent_hints: bool,
    pub use_cases: Vec<String>,
}

impl From<OsadlInfo> for OsadlSection {
    fn from(info: OsadlInfo) -> Self {
        Self {
            compatibility: info.compatibilities,
            incompatibility: info.incompatibilities,
            depending_compatibility: info.depending_compatibilities,
            copyleft_clause: info.copyleft_clause,
            patent_hints: info.patent_hints,
            use_cases: info.use_cases,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseDetails {
    pub full_name: String,
    pub spdx: SpdxSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osadl: Option<OsadlSection>,
}

impl LicenseDetails {
    pub fn from_detail(detail: LicenseDetail, osadl: Option<OsadlInfo>) -> Self {
        Self {
            full_name: detail.name.clone(),
            spdx: SpdxSection {
                full_name: detail.name,
                id: detail.license_id,
                details_url: detail.details_url,
                reference_url: detail.reference,
                is_deprecated: detail.is_deprecated_license_id,
                is_osi_approved: detail.is_osi_approved,
                see_also: detail.see_also,
            },
            osadl: osadl.map(OsadlSection::from),
        }
    }
}

/// Result of a license detail lookup; an unknown id is an expected outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LicenseDetailsOutcome {
    Found(LicenseDetails),
    NotFound { id: String },
}

impl LicenseDetailsOutcome {
    pub fn status(&self) -> ResponseStatus {
        match self {
            LicenseDetailsOutcome::Found(_) => ResponseStatus::Success,
            LicenseDetailsOutcome::NotFound { .. } => ResponseStatus::NotFound,
        }
    }

    pub fn message(&self) -> String {
        match self {
            LicenseDetailsOutcome::Found(_) => "License details retrieved successfully".to_string(),
            LicenseDetailsOutcome::NotFound { id } => format!("License details not found: {}", id),
        }
    }

    pub fn details(&self) -> Option<&LicenseDetails> {
        match self {
            LicenseDetailsOutcome::Found(details) => Some(details),
            LicenseDetailsOutcome::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mit_detail() -> LicenseDetail {
        LicenseDetail {
            license_id: "MIT".to_string(),
            name: "MIT License".to_string(),
            reference: "https://spdx.org/licenses/MIT.html".to_string(),
            details_url: "https://spdx.org/licenses/MIT.json".to_string(),
            reference_number: 1,
            is_deprecated_license_id: false,
            is_osi_approved: true,
            is_fsf_libre: true,
            see_also: vec!["https://opensource.org/license/mit/".to_string()],
        }
    }

    #[test]
    fn test_from_detail_maps_spdx_section() {
        let details = LicenseDetails::from_detail(mit_detail(), None);
        assert_eq!(details.full_name, "MIT License");
        assert_eq!(details.spdx.id, "MIT");
        assert_eq!(details.spdx.reference_url, "https://spdx.org/licenses/MIT.html");
        assert!(details.spdx.is_osi_approved);
        assert!(details.osadl.is_none());
    }

    #[test]
    fn test_from_detail_with_osadl() {
        let osadl = OsadlInfo {
            license_id: "MIT".to_string(),
            compatibilities: vec!["Apache-2.0".to_string()],
            copyleft_clause: false,
            ..Default::default()
        };
        let details = LicenseDetails::from_detail(mit_detail(), Some(osadl));
        let section = details.osadl.unwrap();
        assert_eq!(section.compatibility, vec!["Apache-2.0".to_string()]);
        assert!(!section.copyleft_clause);
    }

    #[test]
    fn test_outcome_status() {
        let found = LicenseDetailsOutcome::Found(LicenseDetails::from_detail(mit_detail(), None));
        let missing = LicenseDetailsOutcome::NotFound {
            id: "NOPE".to_string(),
        };
        assert_eq!(found.status(), ResponseStatus::Success);
        assert_eq!(missing.status(), ResponseStatus::NotFound);
        assert!(missing.message().contains("NOPE"));
        assert!(missing.details().is_none());
    }
}
