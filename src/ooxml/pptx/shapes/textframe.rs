/// Text frames and paragraphs of placeholder shapes.

/// Deepest outline level DrawingML supports (`lvl` is 0 through 8).
pub const MAX_LEVEL: u8 = 8;

/// One paragraph of a text frame: its run text and outline level.
///
/// A paragraph with empty text is a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub text: String,
    pub level: u8,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    /// An empty paragraph at the default level.
    #[inline]
    pub fn blank() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// The text content of a shape (`<p:txBody>`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from text, one paragraph per line.
    pub fn from_text(text: &str) -> Self {
        Self {
            paragraphs: text.split('\n').map(|line| Paragraph::new(line, 0)).collect(),
        }
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    #[inline]
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// All paragraph text joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_paragraphs(self) -> Vec<Paragraph> {
        self.paragraphs
    }
}
