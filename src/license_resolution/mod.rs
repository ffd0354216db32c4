//! License resolution domain: value types, source priority policy, SPDX
//! expression parsing and the SPDX registry. Free of I/O.
pub mod domain;
pub mod policies;
pub mod services;
