//! Build settings for the deck.

use crate::common::unit::Emu;
use std::path::PathBuf;

/// File name the deck is written to, relative to the working directory.
pub const OUTPUT_PATH: &str = "CalendarApp_Development_Journey.pptx";

/// Where and how the deck is written.
///
/// Fields are public; the `with_*` methods are for chaining:
///
/// ```
/// use journey_deck::deck::DeckSettings;
///
/// let settings = DeckSettings::new()
///     .with_output_path("/tmp/journey.pptx")
///     .with_creator("Calendar Team");
/// assert_eq!(settings.creator, "Calendar Team");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSettings {
    pub output_path: PathBuf,
    pub slide_width: Emu,
    pub slide_height: Emu,
    /// `dc:creator` written to the core properties
    pub creator: String,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_PATH),
            slide_width: Emu::from_inches(10.0),
            slide_height: Emu::from_inches(7.5),
            creator: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

impl DeckSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_slide_size(mut self, width: Emu, height: Emu) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DeckSettings::default();
        assert_eq!(settings.output_path, PathBuf::from(OUTPUT_PATH));
        assert_eq!(settings.slide_width.get(), 9_144_000);
        assert_eq!(settings.slide_height.get(), 6_858_000);
    }
}
