//! Mutable presentation writer components for PPTX.

pub mod docprops;
pub mod pres;
pub mod slide;

// Re-export main types
pub use pres::{DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH, MutablePresentation};
pub use slide::MutableSlide;
