//! Shared XML helpers
//!
//! - [`element`]: tree accessors over [`xmltree::Element`] used by the parser

pub mod element;

pub use element::ElementExt;
