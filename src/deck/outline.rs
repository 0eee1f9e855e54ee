//! Body outlines: the leveled lines of a title-and-body slide.

/// One line of a slide's body outline.
///
/// The variant decides the indentation tier; the text is kept literally,
/// including any leading markers such as `"  - "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineEntry {
    /// A top-level line (level 0): lead-ins and sub-headings.
    Point(String),
    /// A supporting line (level 1).
    Detail(String),
    /// An empty paragraph at the default level, for vertical spacing.
    Spacer,
}

impl OutlineEntry {
    /// Classify a line the way hand-written outlines are laid out: an empty
    /// line is a spacer, a line ending in `:` is a point (sub-heading), and
    /// anything else is a detail.
    ///
    /// ```
    /// use journey_deck::deck::OutlineEntry;
    ///
    /// assert_eq!(OutlineEntry::from_line("Backend:"), OutlineEntry::Point("Backend:".into()));
    /// assert_eq!(OutlineEntry::from_line("  - Models"), OutlineEntry::Detail("  - Models".into()));
    /// assert_eq!(OutlineEntry::from_line(""), OutlineEntry::Spacer);
    /// ```
    pub fn from_line(line: &str) -> Self {
        if line.is_empty() {
            OutlineEntry::Spacer
        } else if line.ends_with(':') {
            OutlineEntry::Point(line.to_string())
        } else {
            OutlineEntry::Detail(line.to_string())
        }
    }

    /// The paragraph text; empty for a spacer.
    pub fn text(&self) -> &str {
        match self {
            OutlineEntry::Point(text) | OutlineEntry::Detail(text) => text,
            OutlineEntry::Spacer => "",
        }
    }

    /// The indentation level: 1 for details, 0 otherwise.
    pub fn level(&self) -> u8 {
        match self {
            OutlineEntry::Detail(_) => 1,
            OutlineEntry::Point(_) | OutlineEntry::Spacer => 0,
        }
    }

    #[inline]
    pub fn is_spacer(&self) -> bool {
        matches!(self, OutlineEntry::Spacer)
    }
}
