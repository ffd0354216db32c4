/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (CLI, API, etc.)
/// use to interact with the application core.
pub mod license_resolution_port;

pub use license_resolution_port::LicenseResolutionPort;
