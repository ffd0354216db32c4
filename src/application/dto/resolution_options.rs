use crate::license_resolution::domain::SourceId;
use crate::license_resolution::policies::{MergeStrategy, DEFAULT_INCLUDED_SOURCES};

/// Default number of batch items resolved concurrently
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Settings for the resolution pipeline, after config defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOptions {
    pub concurrency: usize,
    pub merge_strategy: MergeStrategy,
    pub sources: Vec<SourceId>,
}

impl Default for ResolutionOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            merge_strategy: MergeStrategy::default(),
            sources: DEFAULT_INCLUDED_SOURCES.to_vec(),
        }
    }
}

/// Settings for license detail lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailOptions {
    pub osadl_enrichment: bool,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            osadl_enrichment: true,
        }
    }
}
