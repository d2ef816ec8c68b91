//! # Folio Site
//!
//! The folio application: wires the document source, language resolver and
//! renderer together, runs the startup sequence and writes the rendered page.
//! The `folio` binary exposes it on the command line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
