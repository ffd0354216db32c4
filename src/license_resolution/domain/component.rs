use crate::shared::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// A request to resolve the licenses of one component.
///
/// When the caller supplies a combined `purl@version` string and no explicit
/// requirement, the query is split on the first `@` for lookup purposes. The
/// un-split string is kept so that responses echo exactly what was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentQuery {
    purl: String,
    requirement: String,
    original_purl: Option<String>,
}

impl ComponentQuery {
    pub fn new(purl: impl Into<String>, requirement: Option<String>) -> Result<Self> {
        let purl = purl.into();
        if purl.trim().is_empty() {
            return Err(EngineError::invalid_input("purl", "must not be empty").into());
        }

        let requirement = requirement.unwrap_or_default();
        if requirement.is_empty() {
            if let Some((base, version)) = purl.split_once('@') {
                if base.trim().is_empty() {
                    return Err(EngineError::invalid_input(
                        "purl",
                        "must not be empty before the '@' version",
                    )
                    .into());
                }
                return Ok(Self {
                    purl: base.to_string(),
                    requirement: version.to_string(),
                    original_purl: Some(purl),
                });
            }
        }

        Ok(Self {
            purl,
            requirement,
            original_purl: None,
        })
    }

    /// PURL used for version resolution and record lookup
    pub fn purl(&self) -> &str {
        &self.purl
    }

    /// Requirement used for version resolution
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    pub fn was_split(&self) -> bool {
        self.original_purl.is_some()
    }

    /// PURL echoed back in the result
    pub fn echo_purl(&self) -> &str {
        self.original_purl.as_deref().unwrap_or(&self.purl)
    }

    /// Requirement echoed back in the result; empty for split queries
    pub fn echo_requirement(&self) -> &str {
        if self.was_split() {
            ""
        } else {
            &self.requirement
        }
    }
}

/// A concrete component version produced by the component resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    pub purl: String,
    pub version: String,
}

impl ResolvedComponent {
    pub fn new(purl: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            purl: purl.into(),
            version: version.into(),
        }
    }
}
