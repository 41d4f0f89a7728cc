//! Frequency-sweep quadruples carried verbatim from configuration to engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One frequency-sweep entry: `[mode, start, stop, step]`.
///
/// Serialized as a four-element array, matching the configuration file
/// layout, e.g. `["linear count", "0", "1kHz", 10]`. The fields are not
/// interpreted by Ferrite; they are handed to the engine's sweep-creation
/// call exactly as configured. The engine owns unit parsing and mode
/// validation for these values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint(pub String, pub String, pub String, pub SweepStep);

impl SweepPoint {
    /// The distribution mode, e.g. "linear count", "linear scale", "log scale".
    pub fn mode(&self) -> &str {
        &self.0
    }

    /// The sweep start frequency, as written in the configuration.
    pub fn start(&self) -> &str {
        &self.1
    }

    /// The sweep stop frequency, as written in the configuration.
    pub fn stop(&self) -> &str {
        &self.2
    }

    /// The step: a point count, a frequency increment, or a decade count,
    /// depending on the mode.
    pub fn step(&self) -> &SweepStep {
        &self.3
    }
}

/// The step field of a sweep quadruple.
///
/// Configuration files write this either as a number (`10`) or as a string
/// (`"10MHz"`); both forms are preserved as written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SweepStep {
    /// A numeric step, typically a point or decade count.
    Count(f64),
    /// A textual step, typically a frequency increment with units.
    Text(String),
}

impl fmt::Display for SweepStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepStep::Count(n) => write!(f, "{n}"),
            SweepStep::Text(s) => write!(f, "{s}"),
        }
    }
}
