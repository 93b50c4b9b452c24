//! # Error Types
//!
//! This module defines the error returned when a position cannot be built from
//! extracted sentence data.

use std::fmt;

use crate::nmea_content::SentenceFormat;

/// Represents all possible errors raised by the position builder and the
/// coordinate converter.
///
/// These are only surfaced when those operations are called directly. The route
/// builder treats every one of them as a reason to skip the line.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The sentence carried no data fields at all.
    EmptyFields,

    /// The format tag is well-formed but not one of the supported formats.
    ///
    /// Contains the offending tag.
    UnsupportedFormat(String),

    /// A field required by the format layout is missing.
    MissingParameter {
        /// The format whose layout was being applied
        format: SentenceFormat,
        /// The 0-based index of the missing field
        index: usize,
    },

    /// A field that must be numeric could not be parsed as a finite number.
    ///
    /// Contains the field text.
    ParseError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyFields => write!(f, "sentence has no fields"),
            Error::UnsupportedFormat(tag) => write!(f, "unsupported sentence format '{tag}'"),
            Error::MissingParameter { format, index } => {
                write!(f, "{} sentence is missing field {index}", format.tag())
            }
            Error::ParseError(field) => write!(f, "field '{field}' is not numeric"),
        }
    }
}

impl std::error::Error for Error {}
