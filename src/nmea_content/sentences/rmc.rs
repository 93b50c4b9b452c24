use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, one_of},
};

use super::FormatLayout;
use crate::{
    nmea_content::{Hemisphere, HemispherePolicy, Status, parse::hemisphere},
    parsing::numeric,
};

/// RMC - Recommended Minimum Navigation Information
///
/// ```text
///         0         1 2       3 4        5 6   7   8      9  10
///         |         | |       | |        | |   |   |      |  |
///  $GPRMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,ddmmyy,x.x,a*hh
/// ```
///
/// Only sentences with an empty magnetic variation field are accepted. The
/// longitude hemisphere may always be `E` or `W`.
pub(crate) const LAYOUT: FormatLayout = FormatLayout {
    min_fields: 11,
    latitude: 2,
    latitude_hemisphere: 3,
    longitude: 4,
    longitude_hemisphere: 5,
    altitude: None,
};

const LONGITUDES: &[Hemisphere] = &[Hemisphere::East, Hemisphere::West];

pub(super) fn structure(i: &str, policy: HemispherePolicy) -> IResult<&str, ()> {
    let (i, _) = (numeric, char(','), Status::parser, char(',')).parse(i)?;
    let (i, _) = (numeric, char(','), hemisphere(policy.latitudes()), char(',')).parse(i)?;
    let (i, _) = (numeric, char(','), hemisphere(LONGITUDES), char(',')).parse(i)?;
    let (i, _) = (numeric, char(','), numeric, char(','), numeric).parse(i)?;
    let (i, _) = (tag(",,"), one_of("AW")).parse(i)?;

    Ok((i, ()))
}
