//! Office Open XML (OOXML) support for PowerPoint presentations.
//!
//! The module is organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships)
//! 2. **PresentationML** (`pptx`): writing decks with [`pptx::MutablePresentation`]
//!    and reading them back with [`pptx::Package`]
//!
//! # Example: Reading a Presentation
//!
//! ```rust,no_run
//! use journey_deck::ooxml::pptx::Package;
//!
//! let pkg = Package::open("CalendarApp_Development_Journey.pptx")?;
//! let pres = pkg.presentation()?;
//!
//! for slide in pres.slides()? {
//!     println!("{}", slide.title()?.unwrap_or_default());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
