/// Main presentation object - the high-level API for reading presentations.
use crate::common::unit::Emu;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::pptx::parts::{PresentationPart, SlideLayoutPart, SlidePart};
use crate::ooxml::pptx::slide::Slide;

/// A PowerPoint presentation.
///
/// Not intended to be constructed directly. Use `Package::presentation()` to
/// access a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use journey_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// if let Some((width, height)) = pres.slide_size()? {
///     println!("{:.1} x {:.1} in", width.to_inches(), height.to_inches());
/// }
/// println!("{} slides", pres.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Presentation<'a> {
    /// The underlying presentation part
    part: PresentationPart<'a>,
    /// Reference to the OPC package for accessing related parts
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    #[inline]
    pub(crate) fn new(part: PresentationPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// Get the number of slides in the presentation.
    pub fn slide_count(&self) -> Result<usize> {
        self.part.slide_count()
    }

    /// Get the slide dimensions as (width, height).
    ///
    /// Returns None if the slide size is not defined.
    pub fn slide_size(&self) -> Result<Option<(Emu, Emu)>> {
        self.part.slide_size()
    }

    /// Get all slides in presentation order.
    pub fn slides(&self) -> Result<Vec<Slide<'a>>> {
        let pres_part = self.part.part();
        let slide_rids = self.part.slide_rids()?;
        let mut slides = Vec::with_capacity(slide_rids.len());

        for rid in slide_rids {
            let rel = pres_part
                .rels()
                .get(&rid)
                .ok_or_else(|| OoxmlError::Opc(OpcError::RelationshipNotFound(rid.clone())))?;
            let slide_part = self.package.related_part(rel)?;

            let layout = match slide_part.rels().part_with_reltype(rt::SLIDE_LAYOUT) {
                Ok(layout_rel) => Some(SlideLayoutPart::from_part(
                    self.package.related_part(layout_rel)?,
                )),
                Err(OpcError::RelationshipNotFound(_)) => None,
                Err(e) => return Err(e.into()),
            };

            slides.push(Slide::new(SlidePart::from_part(slide_part), layout));
        }

        Ok(slides)
    }

    /// Get a specific slide by index (0-based).
    pub fn slide(&self, index: usize) -> Result<Option<Slide<'a>>> {
        Ok(self.slides()?.into_iter().nth(index))
    }

    /// Get access to the underlying presentation part.
    #[inline]
    pub fn part(&self) -> &PresentationPart<'a> {
        &self.part
    }

    /// Get access to the underlying OPC package.
    #[inline]
    pub fn package(&self) -> &'a OpcPackage {
        self.package
    }
}
