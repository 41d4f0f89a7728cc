//! Frequency values with unit parsing and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A frequency value stored in Hertz.
///
/// Parses from strings like "5GHz", "200MHz", "1kHz", "50Hz", and bare
/// numeric values (interpreted as Hz). Analysis setups use this to validate
/// adaptive-frequency fields at configuration load time; sweep endpoints are
/// deliberately *not* parsed through this type, since they must reach the
/// engine exactly as written.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency(f64);

const UNITS: [(&str, f64); 4] = [
    ("ghz", 1e9),
    ("mhz", 1e6),
    ("khz", 1e3),
    ("hz", 1.0),
];

impl Frequency {
    /// Creates a new frequency from a value in Hertz.
    pub fn new(hz: f64) -> Self {
        Self(hz)
    }

    /// Returns the frequency in Hertz.
    pub fn hz(&self) -> f64 {
        self.0
    }

    /// Returns the frequency in gigahertz.
    pub fn ghz(&self) -> f64 {
        self.0 / 1e9
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({self})")
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hz = self.0;
        if hz >= 1e9 {
            write!(f, "{}GHz", hz / 1e9)
        } else if hz >= 1e6 {
            write!(f, "{}MHz", hz / 1e6)
        } else if hz >= 1e3 {
            write!(f, "{}kHz", hz / 1e3)
        } else {
            write!(f, "{hz}Hz")
        }
    }
}

/// Error type for parsing frequency strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrequencyError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseFrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid frequency: '{}'", self.input)
    }
}

impl std::error::Error for ParseFrequencyError {}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseFrequencyError {
            input: s.to_string(),
        };

        let lower = s.to_ascii_lowercase();
        for (suffix, scale) in UNITS {
            if let Some(num) = lower.strip_suffix(suffix) {
                let val: f64 = num.trim().parse().map_err(|_| err())?;
                return Ok(Frequency(val * scale));
            }
        }

        // Bare number, interpreted as Hz
        let val: f64 = s.parse().map_err(|_| err())?;
        Ok(Frequency(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_suffixed() {
        assert_eq!("5GHz".parse::<Frequency>().unwrap().hz(), 5e9);
        assert_eq!("200MHz".parse::<Frequency>().unwrap().hz(), 2e8);
        assert_eq!("1kHz".parse::<Frequency>().unwrap().hz(), 1e3);
        assert_eq!("50Hz".parse::<Frequency>().unwrap().hz(), 50.0);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("5ghz".parse::<Frequency>().unwrap().hz(), 5e9);
        assert_eq!("1KHZ".parse::<Frequency>().unwrap().hz(), 1e3);
    }

    #[test]
    fn parse_bare_number() {
        assert_eq!("1000000".parse::<Frequency>().unwrap().hz(), 1e6);
    }

    #[test]
    fn parse_with_space() {
        assert_eq!("3.5 GHz".parse::<Frequency>().unwrap().hz(), 3.5e9);
    }

    #[test]
    fn parse_invalid() {
        assert!("fast".parse::<Frequency>().is_err());
        assert!("GHz".parse::<Frequency>().is_err());
    }

    #[test]
    fn display_selects_best_unit() {
        assert_eq!(format!("{}", Frequency::new(5e9)), "5GHz");
        assert_eq!(format!("{}", Frequency::new(2e8)), "200MHz");
        assert_eq!(format!("{}", Frequency::new(1.5e3)), "1.5kHz");
        assert_eq!(format!("{}", Frequency::new(60.0)), "60Hz");
    }

    #[test]
    fn ghz_accessor() {
        assert_eq!(Frequency::new(2.5e9).ghz(), 2.5);
    }
}
