use nom::{IResult, Parser, character::complete::char};

use super::FormatLayout;
use crate::{
    nmea_content::{HemispherePolicy, parse::hemisphere},
    parsing::numeric,
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// ```text
///         0       1 2        3 4
///         |       | |        | |
///  $GPGLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss*hh
/// ```
pub(crate) const LAYOUT: FormatLayout = FormatLayout {
    min_fields: 5,
    latitude: 0,
    latitude_hemisphere: 1,
    longitude: 2,
    longitude_hemisphere: 3,
    altitude: None,
};

pub(super) fn structure(i: &str, policy: HemispherePolicy) -> IResult<&str, ()> {
    let (i, _) = (numeric, char(','), hemisphere(policy.latitudes()), char(',')).parse(i)?;
    let (i, _) = (numeric, char(','), hemisphere(policy.longitudes()), char(',')).parse(i)?;
    let (i, _) = numeric(i)?;

    Ok((i, ()))
}
