//! CLI library components for regscan.

pub mod logging;
pub mod run;
