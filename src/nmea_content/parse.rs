use nom::{Parser, combinator::verify, error::Error as NomError};

use crate::{Error, nmea_content::Hemisphere};

/// Converts an NMEA `DDMM.MMMM` / `DDDMM.MMMM` coordinate into decimal degrees.
///
/// The whole degrees are the integer part of the value divided by 100, the
/// remainder is minutes. The result carries no hemisphere sign; that is applied
/// by the position builder from the hemisphere indicator.
///
/// # Errors
///
/// [`Error::ParseError`] if `field` is not a finite number.
///
/// # Examples
///
/// ```rust
/// use nmea_route::degrees_from_nmea;
///
/// let degrees = degrees_from_nmea("4916.45").unwrap();
/// assert!((degrees - (49.0 + 16.45 / 60.0)).abs() < 1e-9);
///
/// assert!(degrees_from_nmea("").is_err());
/// ```
pub fn degrees_from_nmea(field: &str) -> Result<f64, Error> {
    let value = number(field)?;
    let whole_degrees = (value / 100.0).floor();
    let minutes = value - whole_degrees * 100.0;

    Ok(whole_degrees + minutes / 60.0)
}

pub(crate) fn altitude(field: &str) -> Result<f64, Error> {
    number(field)
}

fn number(field: &str) -> Result<f64, Error> {
    field
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::ParseError(field.to_owned()))
}

/// Parses a hemisphere indicator, accepting only those in `allowed`.
pub(crate) fn hemisphere<'a>(
    allowed: &'static [Hemisphere],
) -> impl Parser<&'a str, Output = Hemisphere, Error = NomError<&'a str>> {
    verify(Hemisphere::parser, move |h: &Hemisphere| allowed.contains(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_from_nmea() {
        let cases = [
            ("4916.45", 49.274166),
            ("12311.12", 123.185333),
            ("4807.038", 48.1173),
            ("01131.000", 11.516666),
            ("0000.00", 0.0),
            ("30", 0.5),
            ("9000", 90.0),
        ];

        for (field, expected) in cases {
            let degrees = degrees_from_nmea(field).unwrap();
            assert!(
                (degrees - expected).abs() < 1e-5,
                "{field:?}: expected {expected}, got {degrees}"
            );
        }
    }

    #[test]
    fn test_degrees_from_nmea_not_numeric() {
        for field in ["", "N", "49l6.45", "inf", "NaN"] {
            assert_eq!(
                degrees_from_nmea(field),
                Err(Error::ParseError(field.to_string()))
            );
        }
    }

    #[test]
    fn test_hemisphere() {
        let mut north = hemisphere(&[Hemisphere::North]);
        assert_eq!(north.parse("N,"), Ok((",", Hemisphere::North)));
        assert!(north.parse("S,").is_err());

        let mut any = hemisphere(&[Hemisphere::East, Hemisphere::West]);
        assert_eq!(any.parse("E"), Ok(("", Hemisphere::East)));
        assert!(any.parse("N").is_err());
    }
}
