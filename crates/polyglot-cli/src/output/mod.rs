//! Rendering helpers for command output.

mod diagnostic;
pub mod table;

pub use diagnostic::load_error_report;
