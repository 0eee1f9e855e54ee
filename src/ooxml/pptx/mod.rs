//! PowerPoint (.pptx) presentation support.
//!
//! Writing goes through [`MutablePresentation`], which builds slides on the
//! two layouts of a built-in template and serializes them as a complete
//! package. Reading goes through [`Package`], [`Presentation`] and [`Slide`],
//! which expose what a written deck contains: slide size, titles, subtitles
//! and body paragraphs with their outline levels.
//!
//! ```rust,no_run
//! use journey_deck::ooxml::pptx::{LayoutKind, MutablePresentation, Package};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide(LayoutKind::TitleSlide).set_title("Hello");
//! pres.save("hello.pptx")?;
//!
//! let pkg = Package::open("hello.pptx")?;
//! assert_eq!(pkg.presentation()?.slide_count()?, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod layout;
pub mod package;
pub mod parts;
pub mod presentation;
pub mod shapes;
pub mod slide;
pub mod template;
pub mod writer;

pub use layout::LayoutKind;
pub use package::Package;
pub use presentation::Presentation;
pub use shapes::{Paragraph, Placeholder, TextFrame};
pub use slide::Slide;
pub use writer::{MutablePresentation, MutableSlide};
