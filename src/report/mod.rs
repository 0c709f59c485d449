//! Scan report construction and rendering.
//!
//! - [`json`] — builds the `list.json` artifact and writes it to disk.
//! - [`terminal`] — warning lines, summary box, and `--verbose` dependency tables.

pub mod json;
pub mod terminal;
