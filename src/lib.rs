//! Klingon Clock (workspace facade crate).
//!
//! Re-exports the workspace crates as `klingon_clock::{core,input,term,types}`
//! and adds the pieces that touch the host: configuration, wall clock
//! sampling, logging, and headless output.

pub use klingon_clock_core as core;
pub use klingon_clock_input as input;
pub use klingon_clock_term as term;
pub use klingon_clock_types as types;

pub mod clock;
pub mod config;
pub mod headless;
pub mod logging;
