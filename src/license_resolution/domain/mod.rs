pub mod association;
pub mod component;
pub mod license_details;
pub mod license_record;
pub mod resolution;
pub mod spdx_license;

pub use association::{LicenseAssociation, SourceId};
pub use component::{ComponentQuery, ResolvedComponent};
pub use license_details::{LicenseDetails, LicenseDetailsOutcome, OsadlSection, SpdxSection};
pub use license_record::{LicenseDetail, LicenseRecord, OsadlInfo};
pub use resolution::{
    BatchResolution, BatchSummary, ComponentLicenseResult, LicenseEntry, ResolutionOutcome,
    ResponseStatus,
};
pub use spdx_license::{SpdxLicenseInfo, SpdxLicenseList};
