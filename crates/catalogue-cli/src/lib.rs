//! CLI library components for the catalogue browser.

pub mod logging;
pub mod render;
pub mod report;
