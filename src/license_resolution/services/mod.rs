pub mod expression_parser;
pub mod spdx_registry;

pub use expression_parser::{ExpressionError, ExpressionParser};
pub use spdx_registry::SpdxRegistry;
