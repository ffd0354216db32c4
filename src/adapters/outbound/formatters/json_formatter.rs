use crate::license_resolution::domain::{
    BatchResolution, BatchSummary, ComponentLicenseResult, LicenseDetails, LicenseDetailsOutcome,
    ResponseStatus,
};
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatusView {
    status: String,
    code: u16,
    message: String,
}

impl StatusView {
    fn new(status: ResponseStatus, message: String) -> Self {
        Self {
            status: status.to_string(),
            code: status.http_code(),
            message,
        }
    }
}

#[derive(Debug, Serialize)]
struct ResolutionDocument<'a> {
    components: &'a [ComponentLicenseResult],
    summary: &'a BatchSummary,
    status: StatusView,
}

#[derive(Debug, Serialize)]
struct DetailsDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<&'a LicenseDetails>,
    status: StatusView,
}

/// JsonFormatter adapter rendering engine output as pretty-printed JSON
///
/// The layout mirrors the service responses: a payload plus a `status`
/// block carrying the status name, HTTP-equivalent code and message.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format_resolution(&self, batch: &BatchResolution) -> Result<String> {
        let document = ResolutionDocument {
            components: &batch.results,
            summary: &batch.summary,
            status: StatusView::new(batch.status, batch.message()),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn format_details(&self, outcome: &LicenseDetailsOutcome) -> Result<String> {
        let document = DetailsDocument {
            license: outcome.details(),
            status: StatusView::new(outcome.status(), outcome.message()),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
