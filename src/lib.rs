//! # NMEA Route
//!
//! This library turns an NMEA 0183 GPS log into a route: the positions
//! recovered from the log's fix sentences, in the order they appeared.
//!
//! Every line goes through the same pipeline:
//! - framing: `$GP` + three-letter format tag + fields + `*CC`
//! - checksum: XOR of every byte between `$` and `*`
//! - field extraction into [`SentenceData`]
//! - format membership and a format-specific shape check (GLL, GGA, RMC)
//! - conversion of the `DDMM.MMMM` coordinates into a [`Position`]
//!
//! Lines rejected at any step are skipped; a log mixing sentence types and the
//! odd corrupted line still yields the positions it holds.
//!
//! Checksums are compared as two zero-padded hex digits by default, which
//! differs from the reference behaviour of comparing an unpadded rendering.
//! [`ChecksumFormat::Unpadded`] selects the latter.
//!
//! ## Usage
//!
//! ```rust
//! use nmea_route::route_from_lines;
//!
//! let log = [
//!     "$GPGLL,4916.45,N,12311.12,W,225444*5C",
//!     "$GPGSV,3,1,12,01,40,083,46*44",
//!     "$GPGGA,123519,4807.038,N,01131.000,W,1,08,,545.4,M,,M,,*67",
//! ];
//!
//! let route = route_from_lines(log);
//! assert_eq!(route.len(), 2);
//! assert_eq!(route[1].altitude(), 545.4);
//! ```

pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;
mod position;
mod route;

pub use error::Error;
pub use nmea0183::*;
pub use nmea_content::{
    HemispherePolicy, SentenceData, SentenceFormat, degrees_from_nmea,
    position_from_sentence_data,
};
pub use position::Position;
pub use route::*;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
