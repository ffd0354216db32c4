use crate::license_resolution::domain::{
    BatchResolution, ComponentLicenseResult, LicenseDetails, LicenseDetailsOutcome,
    ResponseStatus,
};
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextFormatter adapter rendering engine output for terminals
///
/// Colors are only emitted when enabled; output written to files or pipes
/// stays plain.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn status_line(&self, status: ResponseStatus, message: &str) -> String {
        let label = status.to_string();
        let label = if !self.colored {
            label
        } else {
            match status {
                ResponseStatus::Success => label.green().bold().to_string(),
                ResponseStatus::PartialSuccess | ResponseStatus::NotFound => {
                    label.yellow().bold().to_string()
                }
                ResponseStatus::Failed => label.red().bold().to_string(),
            }
        };
        format!("{}: {}", label, message)
    }

    fn component_header(&self, result: &ComponentLicenseResult) -> String {
        let mut header = result.purl.clone();
        if !result.version.is_empty() {
            header.push_str(&format!(" ({})", result.version));
        }
        if self.colored {
            header.bold().to_string()
        } else {
            header
        }
    }

    fn write_component(&self, out: &mut String, result: &ComponentLicenseResult) {
        let _ = writeln!(out, "{}", self.component_header(result));
        if !result.has_licenses() {
            let none = "no licenses found";
            if self.colored {
                let _ = writeln!(out, "  {}", none.dimmed());
            } else {
                let _ = writeln!(out, "  {}", none);
            }
            return;
        }

        let _ = writeln!(out, "  statement: {}", result.statement);
        for license in &result.licenses {
            if license.full_name.is_empty() {
                let _ = writeln!(out, "  - {}", license.id);
            } else {
                let _ = writeln!(out, "  - {} ({})", license.id, license.full_name);
            }
        }
    }

    fn write_details(&self, out: &mut String, details: &LicenseDetails) {
        let spdx = &details.spdx;
        let _ = writeln!(out, "{} ({})", details.full_name, spdx.id);
        let _ = writeln!(out, "  reference:     {}", spdx.reference_url);
        let _ = writeln!(out, "  details:       {}", spdx.details_url);
        let _ = writeln!(out, "  osi approved:  {}", yes_no(spdx.is_osi_approved));
        let _ = writeln!(out, "  deprecated:    {}", yes_no(spdx.is_deprecated));
        for url in &spdx.see_also {
            let _ = writeln!(out, "  see also:      {}", url);
        }

        if let Some(osadl) = &details.osadl {
            let _ = writeln!(out, "  copyleft:      {}", yes_no(osadl.copyleft_clause));
            let _ = writeln!(out, "  patent hints:  {}", yes_no(osadl.patent_hints));
            if !osadl.compatibility.is_empty() {
                let _ = writeln!(out, "  compatible:    {}", osadl.compatibility.join(", "));
            }
            if !osadl.incompatibility.is_empty() {
                let _ = writeln!(out, "  incompatible:  {}", osadl.incompatibility.join(", "));
            }
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl ResultFormatter for TextFormatter {
    fn format_resolution(&self, batch: &BatchResolution) -> Result<String> {
        let mut out = String::new();
        for result in &batch.results {
            self.write_component(&mut out, result);
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} of {} component(s) resolved",
            batch.summary.resolved(),
            batch.summary.total
        );
        let _ = writeln!(out, "{}", self.status_line(batch.status, &batch.message()));
        Ok(out)
    }

    fn format_details(&self, outcome: &LicenseDetailsOutcome) -> Result<String> {
        let mut out = String::new();
        if let Some(details) = outcome.details() {
            self.write_details(&mut out, details);
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{}", self.status_line(outcome.status(), &outcome.message()));
        Ok(out)
    }
}
