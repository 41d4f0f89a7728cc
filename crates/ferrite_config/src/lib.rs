//! Parsing and validation of Ferrite configuration files.
//!
//! This crate reads a configuration file (JSON or TOML) and produces a
//! strongly-typed [`ConfigRoot`] holding one sub-configuration per category:
//! nets, components, padstacks, pin groups, ports, sources, setups, SPICE
//! models, and boundaries. Every category is independently optional; an
//! absent key yields that category's empty default.
//!
//! Construction and validation are purely local. Nothing in this crate
//! resolves net names or reference designators against a live design; that
//! happens at apply time, in `ferrite_apply`.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;
pub mod validate;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_json, load_config_from_toml};
pub use types::*;
