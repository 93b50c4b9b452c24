//! # Sentence Content
//!
//! This module turns the data fields of a framed sentence into a [`Position`].
//!
//! Three fix formats are supported: GLL, GGA and RMC. Each one has a canonical
//! shape, checked by [`matches_structure`], and a field layout
//! ([`FormatLayout`]) telling the position builder where latitude, longitude,
//! their hemisphere indicators and the altitude live.

mod parse;
mod sentences;

pub use parse::degrees_from_nmea;
pub use sentences::{FormatLayout, matches_structure};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Position};

/// The format tags a sentence must carry to be turned into a position.
pub const SUPPORTED_FORMATS: [&str; 3] = ["GLL", "GGA", "RMC"];

/// Checks whether `tag` is one of [`SUPPORTED_FORMATS`].
///
/// # Examples
///
/// ```rust
/// use nmea_route::nmea_content::is_supported_format;
///
/// assert!(is_supported_format("GGA"));
/// assert!(!is_supported_format("GSV"));
/// ```
pub fn is_supported_format(tag: &str) -> bool {
    SUPPORTED_FORMATS.contains(&tag)
}

/// The format tag and data fields of one sentence.
///
/// Fields are kept exactly as they appear in the sentence, empty fields
/// included, and are only converted by [`position_from_sentence_data`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceData {
    /// Three-letter format tag, e.g. `GLL`
    pub format: String,
    /// Comma-delimited fields between the format tag and the checksum
    pub fields: Vec<String>,
}

impl SentenceData {
    pub fn new(format: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            format: format.into(),
            fields,
        }
    }

    /// The supported format named by the tag, if any.
    pub fn sentence_format(&self) -> Option<SentenceFormat> {
        SentenceFormat::from_tag(&self.format)
    }
}

/// A supported fix format.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceFormat {
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// Global Positioning System Fix Data
    GGA,
    /// Recommended Minimum Navigation Information
    RMC,
}

impl SentenceFormat {
    /// Looks up a format by its three-letter tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "GLL" => Some(Self::GLL),
            "GGA" => Some(Self::GGA),
            "RMC" => Some(Self::RMC),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::GLL => "GLL",
            Self::GGA => "GGA",
            Self::RMC => "RMC",
        }
    }

    /// Where the position fields of this format live.
    pub const fn layout(self) -> &'static FormatLayout {
        match self {
            Self::GLL => &sentences::gll::LAYOUT,
            Self::GGA => &sentences::gga::LAYOUT,
            Self::RMC => &sentences::rmc::LAYOUT,
        }
    }
}

/// Defines which hemisphere indicators the structural check accepts.
///
/// The position builder always honours `S` and `W`; this only affects which
/// sentences reach it when building a route.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum HemispherePolicy {
    /// Latitude must be `N`. Longitude must be `W`, except in RMC sentences
    /// where `E` is accepted as well.
    #[default]
    NorthWest,

    /// Latitude may be `N` or `S`, longitude may be `E` or `W`.
    Any,
}

impl HemispherePolicy {
    pub(crate) fn latitudes(self) -> &'static [Hemisphere] {
        match self {
            Self::NorthWest => &[Hemisphere::North],
            Self::Any => &[Hemisphere::North, Hemisphere::South],
        }
    }

    pub(crate) fn longitudes(self) -> &'static [Hemisphere] {
        match self {
            Self::NorthWest => &[Hemisphere::West],
            Self::Any => &[Hemisphere::East, Hemisphere::West],
        }
    }
}

macro_rules! indicator_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Parses a single indicator character.
            pub fn parser(i: &str) -> nom::IResult<&str, Self> {
                use nom::Parser;

                nom::branch::alt(($(
                    nom::character::complete::char($char).map(|_| Self::$variant),
                )*)).parse(i)
            }
        }
    };
}

indicator_enum! {
    /// Hemisphere indicator following a latitude or longitude field
    pub enum Hemisphere {
        /// N - North
        'N' => North,
        /// S - South
        'S' => South,
        /// E - East
        'E' => East,
        /// W - West
        'W' => West,
    }
}

impl Hemisphere {
    /// Looks up the indicator held by a whole field.
    pub(crate) fn from_field(field: &str) -> Option<Self> {
        match field {
            "N" => Some(Self::North),
            "S" => Some(Self::South),
            "E" => Some(Self::East),
            "W" => Some(Self::West),
            _ => None,
        }
    }
}

indicator_enum! {
    /// RMC Status Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

/// Builds a position from the data fields of a supported sentence.
///
/// Latitude and longitude are converted with [`degrees_from_nmea`]; an `S`
/// latitude hemisphere makes the latitude negative and a `W` longitude
/// hemisphere makes the longitude negative, whatever sign the coordinate text
/// carries. Any other indicator keeps the converted value. Formats without an
/// altitude field get an altitude of `0`.
///
/// # Errors
///
/// - [`Error::EmptyFields`] if `data` has no fields
/// - [`Error::UnsupportedFormat`] if the tag is not in [`SUPPORTED_FORMATS`]
/// - [`Error::ParseError`] if a coordinate or altitude field is not numeric
/// - [`Error::MissingParameter`] if the sentence has fewer fields than its
///   format requires
///
/// # Examples
///
/// ```rust
/// use nmea_route::{SentenceData, position_from_sentence_data};
///
/// let fields = ["4916.45", "N", "12311.12", "W", "225444"];
/// let data = SentenceData::new("GLL", fields.map(String::from).to_vec());
///
/// let position = position_from_sentence_data(&data).unwrap();
/// assert!((position.latitude() - 49.2742).abs() < 1e-4);
/// assert!((position.longitude() + 123.1853).abs() < 1e-4);
/// assert_eq!(position.altitude(), 0.0);
/// ```
pub fn position_from_sentence_data(data: &SentenceData) -> Result<Position, Error> {
    if data.fields.is_empty() {
        return Err(Error::EmptyFields);
    }

    let format = data
        .sentence_format()
        .ok_or_else(|| Error::UnsupportedFormat(data.format.clone()))?;
    let layout = format.layout();

    let field = |index: usize| {
        data.fields
            .get(index)
            .map(String::as_str)
            .ok_or(Error::MissingParameter { format, index })
    };

    let mut latitude = degrees_from_nmea(field(layout.latitude)?)?;
    let mut longitude = degrees_from_nmea(field(layout.longitude)?)?;
    let altitude = match layout.altitude {
        Some(index) => parse::altitude(field(index)?)?,
        None => 0.0,
    };

    if data.fields.len() < layout.min_fields {
        return Err(Error::MissingParameter {
            format,
            index: data.fields.len(),
        });
    }

    if Hemisphere::from_field(field(layout.latitude_hemisphere)?) == Some(Hemisphere::South) {
        latitude = -latitude.abs();
    }
    if Hemisphere::from_field(field(layout.longitude_hemisphere)?) == Some(Hemisphere::West) {
        longitude = -longitude.abs();
    }

    Ok(Position::new(latitude, longitude, altitude))
}
