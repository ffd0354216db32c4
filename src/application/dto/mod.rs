/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod component_request;
mod output_format;
mod resolution_options;

pub use component_request::{ComponentBatchRequest, ComponentRequest};
pub use output_format::OutputFormat;
pub use resolution_options::{DetailOptions, ResolutionOptions, DEFAULT_CONCURRENCY};
