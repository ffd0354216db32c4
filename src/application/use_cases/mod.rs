/// Use cases module containing application business logic orchestration
mod get_license_details;
mod license_engine;
mod resolve_component_licenses;

pub use get_license_details::GetLicenseDetailsUseCase;
pub use license_engine::LicenseEngine;
pub use resolve_component_licenses::ResolveComponentLicensesUseCase;
