//! Shared foundational types used across the Ferrite configuration toolkit.
//!
//! This crate provides frequency values with unit parsing, and the sweep
//! quadruple types that travel from configuration files to the design engine
//! without modification.

#![warn(missing_docs)]

pub mod frequency;
pub mod sweep;

pub use frequency::{Frequency, ParseFrequencyError};
pub use sweep::{SweepPoint, SweepStep};
