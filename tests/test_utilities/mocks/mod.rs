/// Mock implementations for testing
mod mock_component_resolver;
mod mock_license_record_store;

pub use mock_component_resolver::MockComponentResolver;
pub use mock_license_record_store::MockLicenseRecordStore;
