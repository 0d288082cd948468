//! Keep a Changelog document model: parsing, release mutation and
//! rendering back to markdown.
pub mod change_type;
pub mod document;
pub mod parser;
pub mod release;
pub mod render;

pub use change_type::ChangeType;
pub use document::{Changelog, Link};
pub use release::Release;
pub use render::Renderer;
