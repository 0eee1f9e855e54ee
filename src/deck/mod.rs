//! The development-journey deck: slide descriptors, their content, and the
//! glue that renders them into a PowerPoint package.
//!
//! ```no_run
//! use journey_deck::deck::{DeckSettings, build_and_save};
//!
//! let path = build_and_save(&DeckSettings::default())?;
//! println!("Presentation saved as: {}", path.display());
//! # Ok::<(), journey_deck::deck::DeckError>(())
//! ```

pub mod content;
pub mod descriptor;
pub mod error;
pub mod outline;
pub mod render;
pub mod settings;

pub use content::development_journey;
pub use descriptor::{SlideDescriptor, SlideLayout};
pub use error::DeckError;
pub use outline::OutlineEntry;
pub use render::{build_and_save, render};
pub use settings::{DeckSettings, OUTPUT_PATH};

/// An ordered list of slides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<SlideDescriptor>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlideDescriptor> {
        self.slides.iter()
    }

    #[inline]
    pub fn slides(&self) -> &[SlideDescriptor] {
        &self.slides
    }

    pub fn push(&mut self, slide: SlideDescriptor) {
        self.slides.push(slide);
    }

    /// The first slide with the title layout, if any.
    pub fn title_slide(&self) -> Option<&SlideDescriptor> {
        self.slides.iter().find(|s| s.layout() == SlideLayout::Title)
    }

    /// First slide whose title is exactly `title`.
    pub fn find(&self, title: &str) -> Option<&SlideDescriptor> {
        self.slides.iter().find(|s| s.title() == title)
    }
}

impl FromIterator<SlideDescriptor> for Deck {
    fn from_iter<I: IntoIterator<Item = SlideDescriptor>>(iter: I) -> Self {
        Self {
            slides: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = SlideDescriptor;
    type IntoIter = std::vec::IntoIter<SlideDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a SlideDescriptor;
    type IntoIter = std::slice::Iter<'a, SlideDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
