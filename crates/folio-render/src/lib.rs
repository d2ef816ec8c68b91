//! # Folio Render
//!
//! Section rendering for the folio portfolio.
//!
//! Content documents are loaded once into a [`ContentStore`]. Each section
//! turns them into [`Patch`]es for the current language, and a [`Page`]
//! applies the patches to an in-memory document and routes user events to
//! [`Action`]s. The renderer also drives the project detail modal and the
//! staggered skill-bar animation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod dom;
pub mod events;
pub mod labels;
pub mod modal;
pub mod models;
pub mod node;
pub mod page;
pub mod patch;
pub mod renderer;
pub mod sections;
pub mod selector;
pub mod store;
pub mod template;
pub mod traits;

pub use animation::*;
pub use dom::*;
pub use events::*;
pub use modal::*;
pub use models::*;
pub use node::*;
pub use page::*;
pub use patch::*;
pub use renderer::*;
pub use sections::*;
pub use selector::*;
pub use store::*;
pub use template::*;
pub use traits::*;
