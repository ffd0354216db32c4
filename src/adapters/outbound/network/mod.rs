/// Network adapters for external API calls
mod caching_component_resolver;
mod http_component_resolver;

pub use caching_component_resolver::CachingComponentResolver;
pub use http_component_resolver::{HttpComponentResolver, DEFAULT_TIMEOUT_SECS};
