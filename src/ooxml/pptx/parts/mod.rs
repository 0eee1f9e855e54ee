/// Parts for PowerPoint presentation documents.
///
/// Thin wrappers over OPC parts that know how to read the PresentationML
/// stored in them.
pub mod presentation;
pub mod slide;

pub use presentation::PresentationPart;
pub use slide::{SlideLayoutPart, SlidePart};
