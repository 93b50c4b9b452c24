pub(crate) mod gga;
pub(crate) mod gll;
pub(crate) mod rmc;

use nom::{IResult, Parser, bytes::complete::tag, character::complete::char};

use crate::{
    TALKER_PREFIX,
    nmea_content::{HemispherePolicy, SentenceFormat},
    parsing::{checksum_chars, consumed},
};

/// Where the position fields of a format live, as 0-based field indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatLayout {
    /// Fewest fields a sentence of this format may have
    pub min_fields: usize,
    /// Latitude in `DDMM.MMMM`
    pub latitude: usize,
    /// Latitude hemisphere indicator
    pub latitude_hemisphere: usize,
    /// Longitude in `DDDMM.MMMM`
    pub longitude: usize,
    /// Longitude hemisphere indicator
    pub longitude_hemisphere: usize,
    /// Altitude in meters, if the format carries one
    pub altitude: Option<usize>,
}

/// Checks a whole sentence against the canonical shape of `format`.
///
/// This is stricter than [`is_well_formed`](crate::is_well_formed): every field
/// the position builder reads must be present and syntactically valid, and
/// the hemisphere indicators must be allowed by `policy`.
///
/// | Format | Shape |
/// |--------|-------|
/// | GLL    | `$GPGLL,lat,N,lon,W,time*CC` |
/// | RMC    | `$GPRMC,time,A\|V,lat,N,lon,E\|W,speed,course,date,,A\|W*CC` |
/// | GGA    | `$GPGGA,time,lat,N,lon,W,fix,sats,,±alt,M,,M,,*CC` |
///
/// The table shows [`HemispherePolicy::NorthWest`]; with
/// [`HemispherePolicy::Any`] latitudes may be `N` or `S` and longitudes `E` or
/// `W`.
///
/// # Examples
///
/// ```rust
/// use nmea_route::nmea_content::{HemispherePolicy, SentenceFormat, matches_structure};
///
/// let line = "$GPGLL,4916.45,N,12311.12,W,225444*5C";
/// assert!(matches_structure(line, SentenceFormat::GLL, HemispherePolicy::NorthWest));
/// assert!(!matches_structure(line, SentenceFormat::GGA, HemispherePolicy::NorthWest));
///
/// let south = "$GPGLL,4916.45,S,12311.12,W,225444*41";
/// assert!(!matches_structure(south, SentenceFormat::GLL, HemispherePolicy::NorthWest));
/// assert!(matches_structure(south, SentenceFormat::GLL, HemispherePolicy::Any));
/// ```
pub fn matches_structure(line: &str, format: SentenceFormat, policy: HemispherePolicy) -> bool {
    structure(line, format, policy).is_ok()
}

fn structure(i: &str, format: SentenceFormat, policy: HemispherePolicy) -> IResult<&str, ()> {
    let (i, _) = tag(TALKER_PREFIX).parse(i)?;
    let (i, _) = tag(format.tag()).parse(i)?;
    let (i, _) = char(',').parse(i)?;

    let (i, _) = match format {
        SentenceFormat::GLL => gll::structure(i, policy)?,
        SentenceFormat::GGA => gga::structure(i, policy)?,
        SentenceFormat::RMC => rmc::structure(i, policy)?,
    };

    let (i, _) = char('*').parse(i)?;
    let (i, _) = consumed(checksum_chars).parse(i)?;

    Ok((i, ()))
}
