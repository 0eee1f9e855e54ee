//! Slide descriptors: one slide's layout and text, before rendering.

use crate::deck::outline::OutlineEntry;

/// The two slide shapes a deck uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideLayout {
    /// Title and subtitle; used once, for the opening slide.
    Title,
    /// Title and a bulleted body outline.
    TitleAndBody,
}

/// In-memory description of one slide.
///
/// Built with the chained constructors below:
///
/// ```
/// use journey_deck::deck::{SlideDescriptor, SlideLayout};
///
/// let slide = SlideDescriptor::content("Technical Decisions")
///     .point("Key Technology Choices:")
///     .details(["Database: SQLite", "Styling: Bootstrap 5"]);
///
/// assert_eq!(slide.layout(), SlideLayout::TitleAndBody);
/// assert_eq!(slide.outline().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDescriptor {
    layout: SlideLayout,
    title: String,
    /// Only set on title slides; `\n` separates paragraphs
    subtitle: Option<String>,
    /// Only filled on title-and-body slides
    outline: Vec<OutlineEntry>,
}

impl SlideDescriptor {
    /// A title slide with a subtitle.
    pub fn title_slide(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            layout: SlideLayout::Title,
            title: title.into(),
            subtitle: Some(subtitle.into()),
            outline: Vec::new(),
        }
    }

    /// A title-and-body slide with an empty outline.
    pub fn content(title: impl Into<String>) -> Self {
        Self {
            layout: SlideLayout::TitleAndBody,
            title: title.into(),
            subtitle: None,
            outline: Vec::new(),
        }
    }

    /// Append a level-0 line.
    pub fn point(mut self, text: impl Into<String>) -> Self {
        self.outline.push(OutlineEntry::Point(text.into()));
        self
    }

    /// Append a level-1 line.
    pub fn detail(mut self, text: impl Into<String>) -> Self {
        self.outline.push(OutlineEntry::Detail(text.into()));
        self
    }

    /// Append several level-1 lines.
    pub fn details<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outline
            .extend(items.into_iter().map(|text| OutlineEntry::Detail(text.into())));
        self
    }

    /// Append several level-0 lines.
    pub fn points<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outline
            .extend(items.into_iter().map(|text| OutlineEntry::Point(text.into())));
        self
    }

    /// Append a blank paragraph.
    pub fn spacer(mut self) -> Self {
        self.outline.push(OutlineEntry::Spacer);
        self
    }

    #[inline]
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[inline]
    pub fn outline(&self) -> &[OutlineEntry] {
        &self.outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide() {
        let slide = SlideDescriptor::title_slide("Deck", "Line one\nLine two");
        assert_eq!(slide.layout(), SlideLayout::Title);
        assert_eq!(slide.title(), "Deck");
        assert_eq!(slide.subtitle(), Some("Line one\nLine two"));
        assert!(slide.outline().is_empty());
    }

    #[test]
    fn test_outline_keeps_order() {
        let slide = SlideDescriptor::content("Structure")
            .point("API:")
            .detail("  - Models")
            .spacer()
            .points(["Web:"])
            .details(vec![String::from("  - Pages")]);

        let levels: Vec<u8> = slide.outline().iter().map(OutlineEntry::level).collect();
        assert_eq!(levels, [0, 1, 0, 0, 1]);
        assert!(slide.outline()[2].is_spacer());
        assert_eq!(slide.subtitle(), None);
    }
}
