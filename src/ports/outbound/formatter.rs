use crate::license_resolution::domain::{BatchResolution, LicenseDetailsOutcome};
use crate::shared::Result;

/// ResultFormatter port for rendering engine output
pub trait ResultFormatter {
    /// Formats the results of a resolution batch
    fn format_resolution(&self, batch: &BatchResolution) -> Result<String>;

    /// Formats the outcome of a license detail lookup
    fn format_details(&self, outcome: &LicenseDetailsOutcome) -> Result<String>;
}
