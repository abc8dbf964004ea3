//! ABC Core - Backend logic for Audiobook Chapter GUI
//!
//! This crate contains the chapter cue selection and alignment engine with
//! zero UI dependencies. It turns silence-gap candidates from the analysis
//! backend into a chapter list driven by a single control value, compares
//! the result against chapter sets from other sources, and carries the
//! session, configuration, and logging plumbing around that engine.

pub mod alignment;
pub mod config;
pub mod engine;
pub mod logging;
pub mod models;
pub mod selection;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
