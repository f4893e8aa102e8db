//! Postal code grammar validation.
//!
//! Two strictness levels are provided:
//! - [`parse_code`] accepts progressive input (a bare area, or an area plus
//!   a partial local part) for search-as-you-type callers.
//! - [`parse_area_code`] and [`parse_zip_code`] reject anything partial,
//!   for APIs that must fail loudly instead of silently returning nothing.

use std::sync::OnceLock;

use regex::Regex;

use super::error::{Result, ZipcodeError};
use super::models::{ParsedCode, ZipCode};

/// Compiled regex for the permissive postal code grammar.
static CODE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached code grammar: exactly 3 area digits, an optional
/// hyphen, then 0-4 local digits.
fn code_regex() -> &'static Regex {
    // [0-9], not \d: the regex crate's \d also matches non-ASCII digits
    // such as full-width １２３, which are not valid postal code input.
    CODE_PATTERN
        .get_or_init(|| Regex::new(r"^([0-9]{3})-?([0-9]{0,4})$").expect("Invalid postal code regex pattern"))
}

/// Parses a full or partial postal code.
///
/// Accepts `AAA`, `AAA-L{0..4}`, or `AAALLLL` where `A` is an area digit
/// and `L` a local digit. `full_code` is set only when all 4 local digits
/// are present.
///
/// # Errors
/// Fails with [`ZipcodeError::InvalidCodeFormat`] on wrong digit counts,
/// non-digit characters, or malformed hyphenation.
pub fn parse_code(input: &str) -> Result<ParsedCode> {
    let caps = code_regex()
        .captures(input)
        .ok_or_else(|| ZipcodeError::InvalidCodeFormat {
            input: input.to_string(),
        })?;

    let area = caps[1].to_string();
    let local = caps[2].to_string();
    let complete = local.len() == 4;
    let full_code = complete.then(|| format!("{area}{local}"));

    Ok(ParsedCode {
        area,
        local,
        full_code,
        complete,
    })
}

/// Parses a bare 3-digit area code. Nothing else is accepted, not even a
/// trailing hyphen.
pub fn parse_area_code(input: &str) -> Result<String> {
    if input.len() == 3 && input.bytes().all(|b| b.is_ascii_digit()) {
        Ok(input.to_string())
    } else {
        Err(ZipcodeError::InvalidAreaCode {
            input: input.to_string(),
        })
    }
}

/// Parses a complete postal code (`AAA-LLLL` or `AAALLLL`).
///
/// # Errors
/// Partial input that [`parse_code`] would accept fails here with
/// [`ZipcodeError::IncompleteCode`]; anything outside the grammar fails
/// with [`ZipcodeError::InvalidCodeFormat`].
pub fn parse_zip_code(input: &str) -> Result<ZipCode> {
    let parsed = parse_code(input)?;
    match parsed.full_code {
        Some(full_code) => Ok(ZipCode {
            area: parsed.area,
            local: parsed.local,
            full_code,
        }),
        None => Err(ZipcodeError::IncompleteCode {
            input: input.to_string(),
        }),
    }
}
