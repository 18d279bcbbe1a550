//! Weather checker: a simulated weather producer paired with a dual-sink
//! logger.
//!
//! A run walks a fixed list of locations, draws a random condition for each
//! and reports progress through a named logger that writes every line to
//! the console and appends it to a log file.
//!
//! The crate is structured into a few small modules:
//! - [`log`]: levels, records, sinks, the fan-out `Logger` and its registry.
//! - [`weather`]: conditions, randomness and delay strategies, and the
//!   `WeatherChecker` driver.
//! - [`config`] / [`settings`]: INI-style configuration and its typed view.

/// Handles configuration loading.
pub mod config;
/// Logging utilities for the application.
pub mod log;
/// Typed settings built from a `Config`.
pub mod settings;
/// Simulated weather checks.
pub mod weather;
