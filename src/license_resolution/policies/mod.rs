pub mod source_priority;

pub use source_priority::{
    MergeStrategy, SourcePriority, DEFAULT_INCLUDED_SOURCES, UNKNOWN_SOURCE_RANK,
};
