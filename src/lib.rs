//! purl-licenses - license resolution for package URLs
//!
//! Given a PURL and a version requirement, this library resolves the concrete
//! component version, gathers the license associations recorded for it and
//! returns a deduplicated list of SPDX identifiers together with a conjunctive
//! license statement (`"MIT AND Apache-2.0"`). It also serves descriptive
//! metadata for a single SPDX license.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_resolution`): Domain models, source priority
//!   policy, SPDX expression parser and SPDX license registry
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for collaborators
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use purl_licenses::prelude::*;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let registry = Arc::new(SpdxRegistry::embedded()?);
//! let store = Arc::new(SnapshotStore::load(Path::new("snapshot.json"))?);
//!
//! let engine = LicenseEngine::new(
//!     store.clone(),
//!     store,
//!     registry,
//!     ResolutionOptions::default(),
//!     DetailOptions::default(),
//! );
//!
//! let request = ComponentRequest::new("pkg:github/scanoss/engine@5.0.0", None);
//! let result = engine.resolve(&request).await?;
//! println!("{}", result.statement);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{
        CachingComponentResolver, HttpComponentResolver,
    };
    pub use crate::adapters::outbound::snapshot::SnapshotStore;
    pub use crate::application::dto::{
        ComponentRequest, DetailOptions, OutputFormat, ResolutionOptions,
    };
    pub use crate::application::use_cases::{
        GetLicenseDetailsUseCase, LicenseEngine, ResolveComponentLicensesUseCase,
    };
    pub use crate::license_resolution::domain::{
        BatchResolution, ComponentLicenseResult, LicenseAssociation, LicenseDetails,
        LicenseDetailsOutcome, LicenseEntry, LicenseRecord, ResponseStatus, SourceId,
    };
    pub use crate::license_resolution::policies::{MergeStrategy, SourcePriority};
    pub use crate::license_resolution::services::{ExpressionParser, SpdxRegistry};
    pub use crate::ports::inbound::LicenseResolutionPort;
    pub use crate::ports::outbound::{
        ComponentResolver, LicenseRecordStore, OutputPresenter, ResultFormatter,
    };
    pub use crate::shared::Result;
}
