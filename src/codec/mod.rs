//! Flat-file codec for stored records
//!
//! One field per line:
//!
//! ```text
//! key = v1|v2|...|vn
//! ```
//!
//! Encoding renders each typed value as text. Decoding yields string values
//! only; it does not re-run coercion.
//!
//! # Decode policy
//!
//! - Blank lines are ignored
//! - Lines without `=` are skipped and reported
//! - The line is split on the first `=` only
//! - An empty right-hand side decodes to a single empty value
//! - A repeated key replaces the earlier line

mod decoder;
mod encoder;

pub use decoder::{decode, decode_with_report, DecodeReport};
pub use encoder::{encode, encode_line};

/// Separator between key and values
pub const KEY_SEPARATOR: &str = " = ";

/// Separator between values
pub const VALUE_SEPARATOR: &str = "|";

/// Line terminator written by the encoder
pub const LINE_TERMINATOR: &str = "\n";
