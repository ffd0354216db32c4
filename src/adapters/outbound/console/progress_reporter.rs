use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Shows an indicatif spinner while a batch is resolved. Everything goes to
/// stderr so it doesn't interfere with stdout output, and indicatif hides the
/// spinner when stderr is not a terminal.
pub struct StderrProgressReporter {
    enabled: bool,
    spinner: Option<ProgressBar>,
}

impl StderrProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            spinner: None,
        }
    }

    /// Starts a spinner with the given message
    pub fn start(&mut self, message: &str) {
        if !self.enabled {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("   {spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    /// Removes the spinner without printing anything
    pub fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Clears the spinner and prints a completion message
    pub fn finish(&mut self, message: &str) {
        self.clear();
        if self.enabled {
            eprintln!("{}", message);
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let mut reporter = StderrProgressReporter::new(true);
        reporter.start("Resolving 3 component(s)...");
        assert!(reporter.spinner.is_some());
        reporter.finish("done");
        assert!(reporter.spinner.is_none());
    }

    #[test]
    fn test_disabled_reporter_never_creates_spinner() {
        let mut reporter = StderrProgressReporter::new(false);
        reporter.start("Resolving...");
        assert!(reporter.spinner.is_none());
        reporter.finish("done");
    }
}
