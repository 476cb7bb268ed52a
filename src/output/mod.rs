//! Output formatting for calculation results.
//!
//! - [`terminal`] - colored table for interactive use
//! - [`json`] - machine readable output

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{format_row, render_error, render_notice, render_report, Palette};
