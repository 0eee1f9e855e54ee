//! Journey Deck - builds the development-journey slide deck of the calendar
//! management application as a PowerPoint (.pptx) file.
//!
//! The crate has three layers:
//!
//! - **`common`**: EMU measurements and XML escaping
//! - **`ooxml`**: an OPC package reader/writer and a small PresentationML
//!   model that writes title and title-and-content slides and reads them back
//! - **`deck`**: the slide descriptors, the narrative content, and the
//!   rendering glue between the two
//!
//! # Example - Building the deck
//!
//! ```no_run
//! use journey_deck::deck::{DeckSettings, build_and_save};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = DeckSettings::new().with_output_path("journey.pptx");
//! let path = build_and_save(&settings)?;
//! println!("Presentation saved as: {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing a custom presentation
//!
//! ```no_run
//! use journey_deck::ooxml::pptx::{LayoutKind, MutablePresentation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//!
//! let cover = pres.add_slide(LayoutKind::TitleSlide);
//! cover.set_title("Quarterly Review");
//! cover.set_subtitle("Engineering\nQ3")?;
//!
//! let body = pres.add_slide(LayoutKind::TitleAndContent);
//! body.set_title("Highlights");
//! body.add_paragraph("Shipped:", 0)?;
//! body.add_paragraph("Service layer", 1)?;
//!
//! pres.save("review.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a deck back
//!
//! ```no_run
//! use journey_deck::ooxml::pptx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("journey.pptx")?;
//! let pres = pkg.presentation()?;
//! println!("{} slides", pres.slide_count()?);
//!
//! for slide in pres.slides()? {
//!     for para in slide.body_paragraphs()? {
//!         println!("{}{}", "  ".repeat(para.level as usize), para.text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod deck;
pub mod ooxml;

pub use deck::{Deck, DeckError, DeckSettings, SlideDescriptor, SlideLayout, build_and_save};
pub use ooxml::{OoxmlError, pptx};
