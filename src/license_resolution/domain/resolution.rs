use serde::Serialize;
use std::fmt;

/// A resolved SPDX license with its catalog name (empty when not cataloged)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseEntry {
    pub id: String,
    pub full_name: String,
}

impl LicenseEntry {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
        }
    }
}

/// Engine output for one component query
///
/// Items that could not be resolved keep `purl`/`requirement` and leave the
/// remaining fields empty; they are never dropped from a batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ComponentLicenseResult {
    pub purl: String,
    pub requirement: String,
    pub version: String,
    pub statement: String,
    pub licenses: Vec<LicenseEntry>,
}

impl ComponentLicenseResult {
    pub fn unresolved(purl: &str, requirement: &str) -> Self {
        Self {
            purl: purl.to_string(),
            requirement: requirement.to_string(),
            ..Default::default()
        }
    }

    pub fn has_licenses(&self) -> bool {
        !self.licenses.is_empty()
    }
}

/// How a single query ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Licenses found for the exact resolved version
    ResolvedExact,
    /// Licenses found through the unversioned fallback
    ResolvedFallback,
    /// The component resolver could not produce a version
    ComponentNotFound,
    /// No associations, versioned or unversioned
    NoLicenseData,
    /// Associations existed but no license record yielded an SPDX id
    NoValidLicenses,
    /// The record store failed while querying associations
    StoreFault,
}

impl ResolutionOutcome {
    pub fn is_resolved(self) -> bool {
        matches!(
            self,
            ResolutionOutcome::ResolvedExact | ResolutionOutcome::ResolvedFallback
        )
    }
}

/// Per-outcome counters for one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub resolved_exact: usize,
    pub resolved_fallback: usize,
    pub component_not_found: usize,
    pub no_license_data: usize,
    pub no_valid_licenses: usize,
    pub store_fault: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[ResolutionOutcome]) -> Self {
        let mut summary = BatchSummary {
            total: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome {
                ResolutionOutcome::ResolvedExact => summary.resolved_exact += 1,
                ResolutionOutcome::ResolvedFallback => summary.resolved_fallback += 1,
                ResolutionOutcome::ComponentNotFound => summary.component_not_found += 1,
                ResolutionOutcome::NoLicenseData => summary.no_license_data += 1,
                ResolutionOutcome::NoValidLicenses => summary.no_valid_licenses += 1,
                ResolutionOutcome::StoreFault => summary.store_fault += 1,
            }
        }
        summary
    }

    pub fn resolved(&self) -> usize {
        self.resolved_exact + self.resolved_fallback
    }

    pub fn unresolved(&self) -> usize {
        self.total - self.resolved()
    }
}

/// Response status handed to the transport layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    /// Some items (or a lookup) produced nothing; still a usable response
    PartialSuccess,
    /// The requested license id is unknown
    NotFound,
    /// No item of the batch produced any license
    Failed,
}

impl ResponseStatus {
    /// Classifies a batch by how many items produced licenses
    pub fn for_batch(resolved: usize, total: usize) -> Self {
        if resolved == 0 {
            ResponseStatus::Failed
        } else if resolved < total {
            ResponseStatus::PartialSuccess
        } else {
            ResponseStatus::Success
        }
    }

    pub fn http_code(self) -> u16 {
        match self {
            ResponseStatus::Success | ResponseStatus::PartialSuccess => 200,
            ResponseStatus::NotFound | ResponseStatus::Failed => 404,
        }
    }

    /// Warning-level statuses are recoverable and reported, not failed
    pub fn is_warning(self) -> bool {
        matches!(self, ResponseStatus::PartialSuccess | ResponseStatus::NotFound)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Success => write!(f, "SUCCESS"),
            ResponseStatus::PartialSuccess => write!(f, "SUCCEEDED_WITH_WARNINGS"),
            ResponseStatus::NotFound => write!(f, "NOT_FOUND"),
            ResponseStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Results of a batch, in input order, with their aggregate status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResolution {
    pub status: ResponseStatus,
    pub results: Vec<ComponentLicenseResult>,
    pub summary: BatchSummary,
}

impl BatchResolution {
    pub fn new(results: Vec<ComponentLicenseResult>, outcomes: &[ResolutionOutcome]) -> Self {
        let summary = BatchSummary::from_outcomes(outcomes);
        let resolved = results.iter().filter(|r| r.has_licenses()).count();
        Self {
            status: ResponseStatus::for_batch(resolved, results.len()),
            results,
            summary,
        }
    }

    /// PURLs (as echoed) of the items without licenses
    pub fn unresolved_purls(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.has_licenses())
            .map(|r| r.purl.as_str())
            .collect()
    }

    pub fn message(&self) -> String {
        match self.status {
            ResponseStatus::Success => "Licenses retrieved successfully".to_string(),
            _ if self.results.is_empty() => {
                "Licenses not found for requested component(s)".to_string()
            }
            _ => format!(
                "No licenses found for the following component(s): {}",
                self.unresolved_purls().join(", ")
            ),
        }
    }
}
