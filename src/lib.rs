//! # Auxide
//!
//! Extension-style helpers for primitive and built-in types. Every operation
//! is a small, stateless transformation over its input; there is no shared
//! mutable state and no lifecycle beyond call/return.
//!
//! ## Features
//!
//! - **Membership**: `is_in`/`not_in` checks against finite lists
//! - **Deep cloning**: independent copies via a JSON round-trip
//! - **Object-to-map projection**: field mappings with a non-null variant
//! - **Enum metadata**: declared labels and parse-by-name
//! - **Sequences**: single-probe emptiness checks and diagnostic printing
//! - **Strings**: validation, defaulting parsers, and join helpers
//! - **Errors**: one-line log formatting with fresh correlation identifiers
//!
//! ## Quick Start
//!
//! ```rust
//! use auxide::{Membership, StringExt};
//!
//! assert!(2.is_in(&[1, 2, 3]));
//! assert_eq!("notanint".parse_to_int_or_default(Some(99)), Some(99));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clone;
pub mod compare;
pub mod datetime;
pub mod enums;
pub mod errfmt;
pub mod error;
pub mod fields;
pub mod object;
pub mod patterns;
pub mod sequence;
pub mod strings;

// Re-export commonly used items
pub use clone::DeepClone;
pub use compare::Membership;
pub use datetime::DateTimeExt;
pub use enums::EnumMeta;
pub use errfmt::ErrorExt;
pub use error::{AuxideError, AuxideResult};
pub use object::ObjectExt;
pub use sequence::SequenceExt;
pub use strings::{JoinPiece, JoinWith, StringExt};

/// Version information for the auxide library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the auxide library
pub const NAME: &str = env!("CARGO_PKG_NAME");
