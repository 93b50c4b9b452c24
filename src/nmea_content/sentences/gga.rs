use nom::{IResult, Parser, bytes::complete::tag, character::complete::char};

use super::FormatLayout;
use crate::{
    nmea_content::{HemispherePolicy, parse::hemisphere},
    parsing::{numeric, signed_numeric},
};

/// GGA - Global Positioning System Fix Data
///
/// ```text
///                                                      10
///         0         1       2 3        4 5 6  7   8   9 |  11 12  13
///         |         |       | |        | | |  |   |   | |   | |   |
///  $GPGGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh
/// ```
///
/// Only the shape `time,lat,N,lon,W,fix,sats,,alt,M,,M,,` is accepted: empty
/// HDOP, geoidal separation and DGPS fields.
pub(crate) const LAYOUT: FormatLayout = FormatLayout {
    min_fields: 14,
    latitude: 1,
    latitude_hemisphere: 2,
    longitude: 3,
    longitude_hemisphere: 4,
    altitude: Some(8),
};

pub(super) fn structure(i: &str, policy: HemispherePolicy) -> IResult<&str, ()> {
    let (i, _) = (numeric, char(',')).parse(i)?;
    let (i, _) = (numeric, char(','), hemisphere(policy.latitudes()), char(',')).parse(i)?;
    let (i, _) = (numeric, char(','), hemisphere(policy.longitudes()), char(',')).parse(i)?;
    let (i, _) = (numeric, char(','), numeric, tag(",,")).parse(i)?;
    let (i, _) = (signed_numeric, tag(",M,,M,,")).parse(i)?;

    Ok((i, ()))
}
