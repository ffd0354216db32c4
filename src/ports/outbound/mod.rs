/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach its collaborators (component resolver, license data, output).
pub mod component_resolver;
pub mod formatter;
pub mod license_record_store;
pub mod output_presenter;

pub use component_resolver::ComponentResolver;
pub use formatter::ResultFormatter;
pub use license_record_store::LicenseRecordStore;
pub use output_presenter::OutputPresenter;
