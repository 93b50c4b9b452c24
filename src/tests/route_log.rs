use std::io::{self, BufReader, Read};

use crate::{Position, route_from_lines, route_from_log};

const GLL: &str = "$GPGLL,4916.45,N,12311.12,W,225444*5C";
const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,W,1,08,,545.4,M,,M,,*67";
const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,,A*50";

#[test]
fn test_skips_rejected_lines() {
    let log = [
        GLL,
        "$GPGLL,4916.45,N,12311.12,W,225444*5D",
        "$GPGSV,3,1,12,01,40,083,46*44",
    ];

    let route = route_from_lines(log);
    assert_eq!(route.len(), 1);
    assert!((route[0].latitude() - 49.2742).abs() < 1e-4);
    assert!((route[0].longitude() + 123.1853).abs() < 1e-4);
    assert_eq!(route[0].altitude(), 0.0);
}

#[test]
fn test_keeps_log_order() {
    let log = [RMC, "garbage", GGA, "", GLL, GGA];

    let route = route_from_lines(log);
    let altitudes: Vec<f64> = route.iter().map(Position::altitude).collect();
    assert_eq!(altitudes, [0.0, 545.4, 0.0, 545.4]);
    assert!(route[0].longitude() > 0.0);
    assert!(route[2].longitude() < -100.0);

    // no deduplication
    assert_eq!(route[1], route[3]);
}

#[test]
fn test_owned_lines() {
    let log: Vec<String> = vec![GLL.to_string(), GGA.to_string()];
    assert_eq!(route_from_lines(&log).len(), 2);
    assert_eq!(route_from_lines(log).len(), 2);
}

#[test]
fn test_empty_log() {
    assert!(route_from_lines(Vec::<&str>::new()).is_empty());
    assert!(route_from_log(io::empty()).unwrap().is_empty());
}

#[test]
fn test_reader() {
    let log = format!("{GLL}\n{GGA}\r\n$GPGSV,3,1,12,01,40,083,46*44\n\n{RMC}");

    let route = route_from_log(log.as_bytes()).unwrap();
    assert_eq!(route.len(), 3);
    assert_eq!(route, route_from_lines([GLL, GGA, RMC]));
}

#[test]
fn test_reader_skips_invalid_utf8() {
    let log: &[u8] = b"$GPGLL,4916.45,N,12311.12,W,225444*5C\n\
                       $GPGLL,49\xb016.45\n\
                       \xff\xfe\r\n\
                       $GPGLL,4916.45,N,12311.12,W,225444*5C\n";

    let route = route_from_log(log).unwrap();
    assert_eq!(route, route_from_lines([GLL, GLL]));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device unplugged"))
    }
}

#[test]
fn test_reader_error() {
    let result = route_from_log(BufReader::new(FailingReader));
    assert_eq!(result.unwrap_err().to_string(), "device unplugged");
}
