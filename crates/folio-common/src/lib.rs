//! # Folio Common
//!
//! Shared types, utilities, and common functionality for folio.
//!
//! This crate provides the foundational pieces used across the other crates
//! in the workspace: the error type, logging bootstrap, the document sources
//! every JSON fetch goes through, and a handful of string helpers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod source;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{FolioError, Result};
pub use logging::{init_logging, LoggingConfig, LoggingGuard};
pub use source::{source_for, DocumentSource, FileSource, HttpSource, StaticSource};

#[cfg(any(test, feature = "testing"))]
pub use source::MockDocumentSource;
pub use types::*;
pub use utils::*;
