use crate::license_resolution::domain::{LicenseAssociation, SourceId};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Rank assigned to sources outside the known set
pub const UNKNOWN_SOURCE_RANK: usize = 999;

/// Detection sources from highest to lowest authority
const SOURCE_PRIORITY_ORDER: [SourceId; 4] = [
    SourceId::SpdxAttributionFile,
    SourceId::InternalAttributionFile,
    SourceId::ScancodeAttributionFile,
    SourceId::ComponentDeclared,
];

/// Sources queried by default; scancode output is left out for its false-positive rate
pub const DEFAULT_INCLUDED_SOURCES: [SourceId; 3] = [
    SourceId::ComponentDeclared,
    SourceId::SpdxAttributionFile,
    SourceId::InternalAttributionFile,
];

/// SourcePriority policy for ranking license detection sources
///
/// Priority order (highest first):
/// 1. SPDX-License-Identifier tags in attribution files
/// 2. Internal scan of attribution files
/// 3. Scancode scan of attribution files
/// 4. Component-level declaration
pub struct SourcePriority;

impl SourcePriority {
    /// Returns the rank of a source; lower is more authoritative
    pub fn rank(source: SourceId) -> usize {
        SOURCE_PRIORITY_ORDER
            .iter()
            .position(|known| *known == source)
            .unwrap_or(UNKNOWN_SOURCE_RANK)
    }

    /// Selects the association reported by the most authoritative source
    ///
    /// Ties keep input order. Returns `None` only for an empty slice.
    pub fn select_best(associations: &[LicenseAssociation]) -> Option<&LicenseAssociation> {
        associations
            .iter()
            .min_by_key(|association| Self::rank(association.source_id))
    }

    /// Collects every distinct license id regardless of source
    pub fn extract_unique_license_ids(associations: &[LicenseAssociation]) -> BTreeSet<i32> {
        associations.iter().map(|a| a.license_id).collect()
    }
}

/// How associations from several sources are combined into license ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Union of all license ids across the included sources
    #[default]
    MergeAll,
    /// Only the license of the single highest-ranked association
    SingleBest,
}

impl MergeStrategy {
    pub fn license_ids(self, associations: &[LicenseAssociation]) -> BTreeSet<i32> {
        match self {
            MergeStrategy::MergeAll => SourcePriority::extract_unique_license_ids(associations),
            MergeStrategy::SingleBest => SourcePriority::select_best(associations)
                .map(|best| best.license_id)
                .into_iter()
                .collect(),
        }
    }
}

impl FromStr for MergeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "merge_all" => Ok(MergeStrategy::MergeAll),
            "single_best" => Ok(MergeStrategy::SingleBest),
            _ => Err(format!(
                "Invalid merge strategy: {}. Please specify 'merge_all' or 'single_best'",
                s
            )),
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::MergeAll => write!(f, "merge_all"),
            MergeStrategy::SingleBest => write!(f, "single_best"),
        }
    }
}
