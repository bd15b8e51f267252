//! CLI command implementations.

pub mod preview;
pub mod providers;
pub mod run;
