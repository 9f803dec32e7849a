//! Precompiled regex predicates used by the string validation helpers.
//!
//! Patterns are compiled once on first use. The email pattern is a shape
//! check (local part, `@`, dotted domain), not full RFC validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches strings containing at least one lowercase letter.
pub static HAS_LOWER_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new("[a-z]").expect("hardwired pattern must compile"));

/// Matches strings containing at least one uppercase letter.
pub static HAS_UPPER_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new("[A-Z]").expect("hardwired pattern must compile"));

/// Matches strings containing at least one decimal digit.
pub static HAS_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new("[0-9]").expect("hardwired pattern must compile"));

/// Matches strings shaped like `local@domain.tld`.
pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("hardwired pattern must compile"));
