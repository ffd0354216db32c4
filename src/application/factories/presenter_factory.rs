use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where a rendered license report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Stdout unless `--output` named a report file
    pub fn from_output(output: Option<PathBuf>) -> Self {
        output.map_or(PresenterType::Stdout, PresenterType::File)
    }
}

/// Picks the presenter for resolution and license-detail reports
///
/// Stdout keeps reports pipeable into other tools; a report file is written
/// through `FileSystemWriter`, which refuses to follow symlinks.
///
/// ```
/// use purl_licenses::application::factories::{PresenterFactory, PresenterType};
/// use std::path::PathBuf;
///
/// let target = PresenterType::from_output(Some(PathBuf::from("licenses.json")));
/// let presenter = PresenterFactory::create(target);
/// ```
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
