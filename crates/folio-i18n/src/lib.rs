//! # Folio I18n
//!
//! Language resolution for folio: which of the two configured languages is
//! active, where that choice is persisted for the session, and how content
//! values are overlaid with entries from the translation dictionary.
//!
//! Content is authored in the primary language. The secondary language is
//! served by walking a JSON dictionary with dotted key paths and falling back
//! to the original value on any miss.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod resolver;
pub mod session;

pub use context::*;
pub use dictionary::*;
pub use error::*;
pub use language::*;
pub use resolver::*;
pub use session::*;
