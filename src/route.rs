//! # Route Building
//!
//! This module runs every line of a log through the sentence pipeline and
//! collects the accepted positions, in log order, into a [`Route`].
//!
//! For each line the stages are, in order:
//! 1. framing ([`is_well_formed`])
//! 2. checksum ([`has_valid_checksum_with`])
//! 3. field extraction ([`extract_sentence_data`])
//! 4. format membership ([`SUPPORTED_FORMATS`](crate::nmea_content::SUPPORTED_FORMATS))
//! 5. format shape ([`matches_structure`])
//! 6. non-empty fields
//! 7. conversion ([`position_from_sentence_data`])
//!
//! A line rejected by any stage is skipped and logged at debug level; it never
//! aborts the pass.

use std::{fmt, io::BufRead};

use log::{debug, trace};

use crate::{
    ChecksumFormat, Error, Position, extract_sentence_data, has_valid_checksum_with,
    is_well_formed,
    nmea_content::{
        HemispherePolicy, SentenceFormat, matches_structure, position_from_sentence_data,
    },
};

/// The positions recovered from a log, in the order their sentences appeared.
pub type Route = Vec<Position>;

/// Options for the line pipeline.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RouteOptions {
    /// How the checksum field is compared
    pub checksum: ChecksumFormat,
    /// Which hemisphere indicators pass the structural check
    pub hemispheres: HemispherePolicy,
}

/// Why a line was left out of a route.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// The line does not have the `$GPFFF...*CC` framing.
    NotWellFormed,
    /// The checksum field does not match the sentence content.
    ChecksumMismatch,
    /// The format tag is not one of the supported formats.
    UnsupportedFormat(String),
    /// The line does not have the canonical shape of its format.
    StructureMismatch(SentenceFormat),
    /// The sentence has no data fields.
    NoFields,
    /// The fields could not be turned into a position.
    Position(Error),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotWellFormed => write!(f, "not a well-formed sentence"),
            Rejection::ChecksumMismatch => write!(f, "checksum mismatch"),
            Rejection::UnsupportedFormat(tag) => write!(f, "unsupported format '{tag}'"),
            Rejection::StructureMismatch(format) => {
                write!(f, "does not match the {} layout", format.tag())
            }
            Rejection::NoFields => write!(f, "sentence has no fields"),
            Rejection::Position(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Rejection::Position(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Error> for Rejection {
    fn from(error: Error) -> Self {
        Rejection::Position(error)
    }
}

/// Runs a single line through the whole pipeline with default options.
///
/// See [`accept_line_with`].
pub fn accept_line(line: &str) -> Result<Position, Rejection> {
    accept_line_with(line, RouteOptions::default())
}

/// Runs a single line through the whole pipeline and reports the first stage
/// that rejected it.
///
/// # Examples
///
/// ```rust
/// use nmea_route::{Rejection, RouteOptions, accept_line_with};
///
/// let options = RouteOptions::default();
///
/// let position = accept_line_with("$GPGLL,4916.45,N,12311.12,W,225444*5C", options).unwrap();
/// assert!((position.latitude() - 49.2742).abs() < 1e-4);
///
/// let result = accept_line_with("$GPGLL,4916.45,N,12311.12,W,225444*5D", options);
/// assert_eq!(result, Err(Rejection::ChecksumMismatch));
///
/// let result = accept_line_with("$GPGSV,3,1,12,01,40,083,46*44", options);
/// assert_eq!(result, Err(Rejection::UnsupportedFormat("GSV".to_string())));
/// ```
pub fn accept_line_with(line: &str, options: RouteOptions) -> Result<Position, Rejection> {
    if !is_well_formed(line) {
        return Err(Rejection::NotWellFormed);
    }
    if !has_valid_checksum_with(line, options.checksum) {
        return Err(Rejection::ChecksumMismatch);
    }

    let data = extract_sentence_data(line).ok_or(Rejection::NotWellFormed)?;

    let Some(format) = data.sentence_format() else {
        return Err(Rejection::UnsupportedFormat(data.format));
    };

    if !matches_structure(line, format, options.hemispheres) {
        return Err(Rejection::StructureMismatch(format));
    }
    if data.fields.is_empty() {
        return Err(Rejection::NoFields);
    }

    Ok(position_from_sentence_data(&data)?)
}

/// Builds a route from a line-oriented log using default options.
///
/// See [`route_from_log_with`].
pub fn route_from_log<R: BufRead>(log: R) -> std::io::Result<Route> {
    route_from_log_with(log, RouteOptions::default())
}

/// Builds a route from a line-oriented log, reading it once from start to end.
///
/// A trailing `\r` is removed from every line before it is checked, so logs
/// with CRLF line endings are read as expected. Lines rejected by the pipeline
/// are skipped, and so are lines that are not valid UTF-8.
///
/// # Errors
///
/// Only I/O errors from `log` are returned; rejected lines never are.
///
/// # Examples
///
/// ```rust
/// use nmea_route::route_from_log;
///
/// let log = "$GPGLL,4916.45,N,12311.12,W,225444*5C\r\n\
///            $GPGSV,3,1,12,01,40,083,46*44\r\n\
///            $GPGLL,4916.45,N,12311.12,W,225444*5D\r\n";
///
/// let route = route_from_log(log.as_bytes()).unwrap();
/// assert_eq!(route.len(), 1);
/// ```
pub fn route_from_log_with<R: BufRead>(log: R, options: RouteOptions) -> std::io::Result<Route> {
    let mut builder = RouteBuilder::new(options);

    for line in log.split(b'\n') {
        let line = line?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);

        match std::str::from_utf8(line) {
            Ok(line) => builder.push(line),
            Err(e) => builder.skip(e),
        }
    }

    Ok(builder.finish())
}

/// Builds a route from lines already in memory using default options.
///
/// See [`route_from_lines_with`].
pub fn route_from_lines<I, S>(lines: I) -> Route
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    route_from_lines_with(lines, RouteOptions::default())
}

/// Builds a route from lines already in memory.
///
/// Lines are taken as they are; they must not carry line terminators.
///
/// # Examples
///
/// ```rust
/// use nmea_route::{HemispherePolicy, RouteOptions, route_from_lines_with};
///
/// let lines = [
///     "$GPGLL,4916.45,N,12311.12,W,225444*5C",
///     "$GPGLL,4916.45,S,12311.12,W,225444*41",
/// ];
///
/// let options = RouteOptions::default();
/// assert_eq!(route_from_lines_with(lines, options).len(), 1);
///
/// let options = RouteOptions { hemispheres: HemispherePolicy::Any, ..options };
/// let route = route_from_lines_with(lines, options);
/// assert_eq!(route.len(), 2);
/// assert!(route[1].latitude() < 0.0);
/// ```
pub fn route_from_lines_with<I, S>(lines: I, options: RouteOptions) -> Route
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = RouteBuilder::new(options);

    for line in lines {
        builder.push(line.as_ref());
    }

    builder.finish()
}

/// Accumulates one pass over a log.
struct RouteBuilder {
    options: RouteOptions,
    route: Route,
    lines: usize,
}

impl RouteBuilder {
    fn new(options: RouteOptions) -> Self {
        Self {
            options,
            route: Route::new(),
            lines: 0,
        }
    }

    fn push(&mut self, line: &str) {
        self.lines += 1;

        match accept_line_with(line, self.options) {
            Ok(position) => {
                trace!("line {}: accepted {position:?}", self.lines);
                self.route.push(position);
            }
            Err(rejection) => debug!("line {}: skipped, {rejection}", self.lines),
        }
    }

    fn skip(&mut self, reason: impl fmt::Display) {
        self.lines += 1;
        debug!("line {}: skipped, {reason}", self.lines);
    }

    fn finish(self) -> Route {
        debug!(
            "route built: {} of {} lines accepted",
            self.route.len(),
            self.lines
        );
        self.route
    }
}
