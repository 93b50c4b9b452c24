//! # NMEA 0183 Sentence Framing
//!
//! This module checks the framing of a single NMEA 0183 sentence, verifies its
//! checksum and splits it into a format tag and its data fields.
//!
//! A well-formed sentence looks like `$GPFFF,D1,D2,...,Dn*CC`, where `FFF` is
//! the three-letter format tag and `CC` the two-digit hexadecimal checksum.

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till, take_while_m_n},
    character::complete::char,
};

use crate::{nmea_content::SentenceData, parsing::consumed};

/// The only accepted start of a sentence: `$` followed by the GPS talker ID.
pub const TALKER_PREFIX: &str = "$GP";

/// The shortest possible sentence, `$GPFFF*CC`.
pub const MIN_SENTENCE_LEN: usize = 9;

const FORMAT_TAG_LEN: usize = 3;
const CHECKSUM_SUFFIX_LEN: usize = 3;

/// Defines how the checksum field is compared against the computed checksum.
///
/// The checksum is always the XOR of every byte between the `$` prefix and the
/// `*` delimiter. The two modes only differ in how that byte is rendered before
/// it is compared with the two characters after the `*`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChecksumFormat {
    /// The computed byte is rendered as two uppercase hexadecimal digits.
    ///
    /// This is the standard NMEA 0183 rule: `*0A` matches a checksum of `0x0A`.
    /// It is the default, unlike the reference behaviour kept in
    /// [`ChecksumFormat::Unpadded`].
    #[default]
    Padded,

    /// The computed byte is rendered without zero padding.
    ///
    /// Checksums below `0x10` render as a single digit and therefore never match
    /// a two-character checksum field. This is the reference behaviour; use
    /// this mode to reproduce tools that compare against an unpadded rendering.
    Unpadded,
}

/// Checks whether `line` has the framing of a GPS sentence.
///
/// A line is well-formed when all of the following hold:
/// 1. it starts with [`TALKER_PREFIX`],
/// 2. the next three characters are uppercase ASCII letters (the format tag),
/// 3. the third character from the end is `*`,
/// 4. the last two characters are hexadecimal digits,
/// 5. no `$` or `*` appears between the leading `$` and the trailing `*CC`.
///
/// Lines shorter than [`MIN_SENTENCE_LEN`] and lines containing non-ASCII
/// characters are rejected.
///
/// # Examples
///
/// ```rust
/// use nmea_route::is_well_formed;
///
/// assert!(is_well_formed("$GPGLL,4916.45,N,12311.12,W,225444*5C"));
/// assert!(is_well_formed("$GPGGA*56"));
///
/// assert!(!is_well_formed("$GNGLL,4916.45,N,12311.12,W,225444*5C")); // (wrong talker)
/// assert!(!is_well_formed("$GPgll,4916.45,N,12311.12,W,225444*5C")); // (lowercase tag)
/// assert!(!is_well_formed("$GPGLL,4916.45,N,12311.12,W,225444*5G")); // (non-hex checksum)
/// assert!(!is_well_formed("$GP*5C"));                                // (too short)
/// ```
pub fn is_well_formed(line: &str) -> bool {
    if line.len() < MIN_SENTENCE_LEN || !line.is_ascii() {
        return false;
    }

    frame(line).is_ok()
}

fn frame(i: &str) -> IResult<&str, &str> {
    let (i, _) = tag(TALKER_PREFIX).parse(i)?;
    let (i, format) = take_while_m_n(FORMAT_TAG_LEN, FORMAT_TAG_LEN, |c: char| {
        c.is_ascii_uppercase()
    })
    .parse(i)?;
    let (i, _) = take_till(|c: char| c == '$' || c == '*').parse(i)?;
    let (i, _) = char('*').parse(i)?;
    let (i, _) = consumed(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit())).parse(i)?;

    Ok((i, format))
}

/// Calculates the NMEA 0183 checksum of the sentence content.
///
/// The checksum is the XOR of every byte in `data`, which is everything between
/// the `$` prefix and the `*` delimiter (both excluded).
///
/// # Examples
///
/// ```rust
/// use nmea_route::checksum;
///
/// assert_eq!(checksum("GPGLL,4916.45,N,12311.12,W,225444"), 0x5C);
/// assert_eq!(checksum(""), 0);
/// ```
pub fn checksum(data: &str) -> u8 {
    data.bytes()
        .fold(0u8, |accumulated_xor, byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea_route::format_checksum;
///
/// assert_eq!(format_checksum(0x5C), "5C");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Checks the checksum of `line` using [`ChecksumFormat::Padded`].
///
/// See [`has_valid_checksum_with`].
pub fn has_valid_checksum(line: &str) -> bool {
    has_valid_checksum_with(line, ChecksumFormat::default())
}

/// Recomputes the checksum of `line` and compares it, case-insensitively, with
/// the two characters following the last `*`.
///
/// Safe to call on any input: a line without a leading `$`, without a `*`, or
/// with a checksum field that is not exactly two characters long is reported
/// as invalid.
///
/// # Examples
///
/// ```rust
/// use nmea_route::{ChecksumFormat, has_valid_checksum_with};
///
/// let line = "$GPRMC,10,A*0B";
/// assert!(has_valid_checksum_with(line, ChecksumFormat::Padded));
/// assert!(!has_valid_checksum_with(line, ChecksumFormat::Unpadded));
///
/// assert!(has_valid_checksum_with("$GPGLL,4916.45,N,12311.12,W,225444*5c", ChecksumFormat::Unpadded));
/// ```
pub fn has_valid_checksum_with(line: &str, format: ChecksumFormat) -> bool {
    let Some((data, found)) = split_checksum(line) else {
        return false;
    };

    let calculated = checksum(data);
    let found = found.to_ascii_uppercase();

    match format {
        ChecksumFormat::Padded => format_checksum(calculated) == found,
        ChecksumFormat::Unpadded => format!("{calculated:X}") == found,
    }
}

fn split_checksum(line: &str) -> Option<(&str, &str)> {
    let (data, found) = line.strip_prefix('$')?.rsplit_once('*')?;
    (found.len() == 2).then_some((data, found))
}

/// Splits a well-formed sentence into its format tag and data fields.
///
/// The talker prefix and the `*CC` suffix are dropped by position, the next
/// three characters become the format tag, and everything after the character
/// that follows the tag is split on `,`. Fields are kept in their original
/// textual form. A sentence whose payload holds no `,` yields an empty field
/// list.
///
/// Returns [`None`] when `sentence` is too short to hold the prefix, the format
/// tag and the checksum suffix.
///
/// # Examples
///
/// ```rust
/// use nmea_route::extract_sentence_data;
///
/// let data = extract_sentence_data("$GPGGA,1,2,3*4A").unwrap();
/// assert_eq!(data.format, "GGA");
/// assert_eq!(data.fields, ["1", "2", "3"]);
///
/// let data = extract_sentence_data("$GPGGA*56").unwrap();
/// assert_eq!(data.format, "GGA");
/// assert!(data.fields.is_empty());
/// ```
pub fn extract_sentence_data(sentence: &str) -> Option<SentenceData> {
    let end = sentence.len().checked_sub(CHECKSUM_SUFFIX_LEN)?;
    let body = sentence.get(TALKER_PREFIX.len()..end)?;
    let format = body.get(..FORMAT_TAG_LEN)?;
    let payload = &body[FORMAT_TAG_LEN..];

    if !payload.contains(',') {
        return Some(SentenceData::new(format, Vec::new()));
    }

    let fields = payload
        .get(1..)?
        .split(',')
        .map(str::to_owned)
        .collect();

    Some(SentenceData::new(format, fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLL: &str = "$GPGLL,4916.45,N,12311.12,W,225444*5C";

    #[test]
    fn test_well_formed() {
        let cases = [
            GLL,
            "$GPGLL,4916.45,N,12311.12,W,225444*5c",
            "$GPGSV,3,1,12,01,40,083,46*44",
            "$GPZZZ,1,2*4E",
            "$GPGGA*56",
        ];

        for input in cases {
            assert!(is_well_formed(input), "Rejected: {input:?}");
        }
    }

    #[test]
    fn test_not_well_formed() {
        let cases = [
            "GPGLL,4916.45,N,12311.12,W,225444*5C",
            "$GNGLL,4916.45,N,12311.12,W,225444*5C",
            "$GPGlL,4916.45,N,12311.12,W,225444*5C",
            "$GPG1L,4916.45,N,12311.12,W,225444*5C",
            "$GPGLL,4916.45,N,12311.12,W,225444,5C",
            "$GPGLL,4916.45,N,12311.12,W,225444*5",
            "$GPGLL,4916.45,N,12311.12,W,225444*5CA",
            "$GPGLL,4916.45,N,12311.12,W,225444*XY",
            "$GPGLL,4916.45,N,12311$12,W,225444*5C",
            "$GPGLL,4916.45,N,12311*12,W,225444*5C",
            "$GPGLL,4916.45,N,12311.12,W,225444*5C\r",
            "$GPGLL,4916.45,N,12311.12,W,225444°*5C",
        ];

        for input in cases {
            assert!(!is_well_formed(input), "Accepted: {input:?}");
        }
    }

    #[test]
    fn test_short_lines() {
        for input in ["", "$", "$GP", "$GPGGA", "$GPGGA*5", "*5C", "$GPGG*5C"] {
            assert!(!is_well_formed(input), "Accepted: {input:?}");
            assert!(!has_valid_checksum(input), "Accepted: {input:?}");
        }
    }

    #[test]
    fn test_checksum() {
        assert!(has_valid_checksum(GLL));
        assert!(has_valid_checksum("$GPGSV,3,1,12,01,40,083,46*44"));
        assert!(!has_valid_checksum("$GPGLL,4916.45,N,12311.12,W,225445*5C"));
        assert!(!has_valid_checksum("$GPGLL,4916.45,N,12311.12,W,225444*5D"));
    }

    #[test]
    fn test_checksum_case_insensitive() {
        assert!(has_valid_checksum("$GPGLL,4916.45,N,12311.12,W,225444*5c"));
        assert!(has_valid_checksum_with(
            "$GPGGA,123519,4807.038,N,01131.000,W,1,08,,-12.5,M,,M,,*7c",
            ChecksumFormat::Unpadded
        ));
    }

    #[test]
    fn test_checksum_below_0x10() {
        for (line, padded) in [("$GPRMC,10,A*0B", true), ("$GPRMC,14,A*0F", true), ("$GPRMC,14,A*F", false)] {
            assert_eq!(has_valid_checksum(line), padded, "{line:?}");
            assert!(!has_valid_checksum_with(line, ChecksumFormat::Unpadded), "{line:?}");
        }
    }

    #[test]
    fn test_checksum_standalone() {
        assert!(!has_valid_checksum("GPGLL,4916.45,N,12311.12,W,225444*5C"));
        assert!(!has_valid_checksum("$GPGLL,4916.45,N,12311.12,W,225444"));
        assert!(!has_valid_checksum("$*00*"));
        assert!(has_valid_checksum("$*00"));
    }

    #[test]
    fn test_extract() {
        let data = extract_sentence_data(GLL).unwrap();
        assert_eq!(data.format, "GLL");
        assert_eq!(data.fields, ["4916.45", "N", "12311.12", "W", "225444"]);

        let data = extract_sentence_data("$GPGGA,1,2,3*4A").unwrap();
        assert_eq!(data.format, "GGA");
        assert_eq!(data.fields, ["1", "2", "3"]);
    }

    #[test]
    fn test_extract_keeps_empty_fields() {
        let data =
            extract_sentence_data("$GPGGA,123519,4807.038,N,01131.000,W,1,08,,545.4,M,,M,,*67")
                .unwrap();
        assert_eq!(data.fields.len(), 14);
        assert_eq!(data.fields[7], "");
        assert_eq!(data.fields[8], "545.4");
        assert_eq!(data.fields[13], "");
    }

    #[test]
    fn test_extract_no_fields() {
        let data = extract_sentence_data("$GPGGA*56").unwrap();
        assert_eq!(data.format, "GGA");
        assert!(data.fields.is_empty());

        let data = extract_sentence_data("$GPGGA,*56").unwrap();
        assert_eq!(data.fields, [""]);
    }

    #[test]
    fn test_extract_short_input() {
        for input in ["", "$GP", "$GPGG*5", "$GPGG"] {
            assert_eq!(extract_sentence_data(input), None, "{input:?}");
        }
    }
}
