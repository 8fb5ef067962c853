//! Output modules for rendering benchmark results.
//!
//! Console comparison lines, a comfy-table summary, JSON reports, and the
//! indicatif progress spinner.

pub mod json;
pub mod progress;
pub mod summary;
pub mod table;
