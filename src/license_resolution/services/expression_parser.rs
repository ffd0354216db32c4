//! License expression parsing.
//!
//! Turns a raw license string from the record store into atomic SPDX
//! identifiers. Compound SPDX expressions go through the `spdx` crate; legacy
//! delimiter lists (`;` for newer multi-license rows, `/` for older dual
//! licenses) are split by hand.

use indexmap::IndexSet;
use spdx::{Expression, ParseMode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("license expression is empty")]
    Empty,
    #[error("no license identifiers found in expression '{0}'")]
    NoIdentifiers(String),
}

pub struct ExpressionParser;

impl ExpressionParser {
    /// Parses a license string into SPDX identifiers, in order of appearance
    ///
    /// # Errors
    /// Returns an error for blank input or input without any identifier;
    /// callers treat it as "skip this record", never as a fatal condition.
    pub fn parse(expression: &str) -> Result<Vec<String>, ExpressionError> {
        if expression.trim().is_empty() {
            return Err(ExpressionError::Empty);
        }

        if Self::is_compound(expression) {
            if let Some(identifiers) = Self::extract_identifiers(expression) {
                return Ok(identifiers);
            }
        }

        let identifiers = Self::split_legacy(expression);
        if identifiers.is_empty() {
            return Err(ExpressionError::NoIdentifiers(expression.to_string()));
        }
        Ok(identifiers)
    }

    fn is_compound(expression: &str) -> bool {
        expression.contains(" AND ") || expression.contains(" OR ") || expression.contains('(')
    }

    /// Flat identifier set of a boolean expression; operator structure is dropped
    ///
    /// The `spdx` crate only validates here. Identifiers are taken from the
    /// input as written, so `GPL-2.0+` stays `GPL-2.0+`. Imprecise names
    /// (`Apache 2.0`, `BSD`) fail strict parsing and go to legacy splitting.
    fn extract_identifiers(expression: &str) -> Option<Vec<String>> {
        Expression::parse_mode(expression, ParseMode::STRICT).ok()?;

        let mut identifiers: IndexSet<String> = IndexSet::new();
        let mut tokens = expression
            .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
            .filter(|token| !token.is_empty());
        while let Some(token) = tokens.next() {
            match token {
                "AND" | "OR" => {}
                // exceptions modify the preceding license, they are not licenses
                "WITH" => {
                    tokens.next();
                }
                license => {
                    identifiers.insert(license.to_string());
                }
            }
        }

        if identifiers.is_empty() {
            None
        } else {
            Some(identifiers.into_iter().collect())
        }
    }

    fn split_legacy(expression: &str) -> Vec<String> {
        let delimiter = if expression.contains(';') { ';' } else { '/' };
        expression
            .split(delimiter)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect()
    }
}
