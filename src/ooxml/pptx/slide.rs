/// Slides of a presentation read back from a package.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::parts::{SlideLayoutPart, SlidePart};
use crate::ooxml::pptx::shapes::{Paragraph, Placeholder};

/// A slide in a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use journey_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// for slide in pres.slides()? {
///     println!("{} [{}]", slide.title()?.unwrap_or_default(), slide.layout_name()?);
///     for para in slide.body_paragraphs()? {
///         println!("{}{}", "  ".repeat(para.level as usize), para.text);
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Slide<'a> {
    /// The underlying slide part
    part: SlidePart<'a>,
    /// The layout the slide is based on
    layout: Option<SlideLayoutPart<'a>>,
}

impl<'a> Slide<'a> {
    #[inline]
    pub(crate) fn new(part: SlidePart<'a>, layout: Option<SlideLayoutPart<'a>>) -> Self {
        Self { part, layout }
    }

    /// Get the slide name from the `<p:cSld>` element.
    pub fn name(&self) -> Result<String> {
        self.part.name()
    }

    /// All placeholder shapes on the slide.
    pub fn placeholders(&self) -> Result<Vec<Placeholder>> {
        self.part.placeholders()
    }

    /// Text of the title placeholder, or `None` if the slide has none.
    pub fn title(&self) -> Result<Option<String>> {
        Ok(self
            .placeholders()?
            .into_iter()
            .find(Placeholder::is_title)
            .map(|ph| ph.text_frame.text()))
    }

    /// Paragraphs of the subtitle placeholder; empty if there is none.
    pub fn subtitle(&self) -> Result<Vec<Paragraph>> {
        Ok(self
            .placeholders()?
            .into_iter()
            .find(Placeholder::is_subtitle)
            .map(|ph| ph.text_frame.into_paragraphs())
            .unwrap_or_default())
    }

    /// Paragraphs of the first body placeholder; empty if there is none.
    pub fn body_paragraphs(&self) -> Result<Vec<Paragraph>> {
        Ok(self
            .placeholders()?
            .into_iter()
            .find(Placeholder::is_body)
            .map(|ph| ph.text_frame.into_paragraphs())
            .unwrap_or_default())
    }

    /// Name of the slide's layout, e.g. "Title Slide"; empty if the slide
    /// has no layout relationship.
    pub fn layout_name(&self) -> Result<String> {
        match self.layout {
            Some(ref layout) => layout.name(),
            None => Ok(String::new()),
        }
    }

    /// Get access to the underlying slide part.
    #[inline]
    pub fn part(&self) -> &SlidePart<'a> {
        &self.part
    }
}
