/// Presentation writer for PPTX.
use crate::common::unit::Emu;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part, Relationships};
use crate::ooxml::pptx::layout::LayoutKind;
use crate::ooxml::pptx::template;
use chrono::{DateTime, Utc};
use log::debug;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::docprops::{AppProperties, CoreProperties};
use super::slide::MutableSlide;

/// First value of the `sldId` sequence; lower IDs are reserved.
const FIRST_SLIDE_ID: u32 = 256;

/// Default slide width: 10 inches.
pub const DEFAULT_SLIDE_WIDTH: Emu = Emu::new(9_144_000);
/// Default slide height: 7.5 inches (4:3).
pub const DEFAULT_SLIDE_HEIGHT: Emu = Emu::new(6_858_000);

/// A mutable PowerPoint presentation for writing.
///
/// Slides are appended in order; [`MutablePresentation::save`] serializes the
/// whole package and writes it in one step.
///
/// # Examples
///
/// ```rust,no_run
/// use journey_deck::common::Emu;
/// use journey_deck::ooxml::pptx::{LayoutKind, MutablePresentation};
///
/// let mut pres = MutablePresentation::with_size(Emu::from_inches(10.0), Emu::from_inches(7.5));
/// let slide = pres.add_slide(LayoutKind::TitleAndContent);
/// slide.set_title("Agenda");
/// slide.add_paragraph("Overview:", 0)?;
/// slide.add_paragraph("Goals", 1)?;
/// pres.save("agenda.pptx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    slides: Vec<MutableSlide>,
    slide_width: Emu,
    slide_height: Emu,
    /// `dc:title` of the core properties
    title: Option<String>,
    /// `dc:creator` of the core properties
    creator: String,
    created: DateTime<Utc>,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SLIDE_WIDTH, DEFAULT_SLIDE_HEIGHT)
    }

    /// Create a new empty presentation with the given slide size.
    pub fn with_size(width: Emu, height: Emu) -> Self {
        Self {
            slides: Vec::new(),
            slide_width: width,
            slide_height: height,
            title: None,
            creator: env!("CARGO_PKG_NAME").to_string(),
            created: Utc::now(),
        }
    }

    /// Add a new slide using `layout` and return it for filling in.
    pub fn add_slide(&mut self, layout: LayoutKind) -> &mut MutableSlide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(slide_id, layout));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Set the document title recorded in the core properties.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Set the author recorded in the core properties.
    pub fn set_creator(&mut self, creator: &str) {
        self.creator = creator.to_string();
    }

    /// Override the creation timestamp (defaults to the time of construction).
    pub fn set_created(&mut self, created: DateTime<Utc>) {
        self.created = created;
    }

    /// Save the presentation to `path`, overwriting an existing file.
    ///
    /// The package is written through a temporary file in the same directory
    /// and renamed into place, so a failed save leaves nothing behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = self.to_package()?;
        PackageWriter::write(path, &package)?;
        Ok(())
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(PackageWriter::to_bytes(&self.to_package()?)?)
    }

    /// Assemble the OPC package: presentation, master, layouts, theme,
    /// property parts and one part per slide.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let pres_uri = uri("/ppt/presentation.xml")?;
        let master_uri = uri("/ppt/slideMasters/slideMaster1.xml")?;
        let theme_uri = uri("/ppt/theme/theme1.xml")?;
        let pres_props_uri = uri("/ppt/presProps.xml")?;
        let view_props_uri = uri("/ppt/viewProps.xml")?;
        let table_styles_uri = uri("/ppt/tableStyles.xml")?;

        // Presentation relationships: master first, slides last
        let mut pres_rels = Relationships::new(pres_uri.base_uri().to_string());
        let mut relate = |target: &PackURI, reltype: &str| {
            pres_rels.get_or_add(reltype, &target.relative_ref(pres_uri.base_uri()))
        };
        relate(&master_uri, rt::SLIDE_MASTER);
        relate(&pres_props_uri, rt::PRES_PROPS);
        relate(&view_props_uri, rt::VIEW_PROPS);
        relate(&theme_uri, rt::THEME);
        relate(&table_styles_uri, rt::TABLE_STYLES);

        let mut slide_rids = Vec::with_capacity(self.slides.len());
        let mut slide_parts = Vec::with_capacity(self.slides.len());
        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = uri(&format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rids.push(relate(&slide_uri, rt::SLIDE));

            let mut part = Part::new(slide_uri, ct::PML_SLIDE, slide.to_xml()?);
            part.relate_to(&slide.layout().partname()?, rt::SLIDE_LAYOUT);
            debug!(
                "slide {} ({}) -> {}",
                index + 1,
                slide.layout(),
                part.partname()
            );
            slide_parts.push(part);
        }

        let pres_xml = self.generate_presentation_xml(&slide_rids)?;
        package.add_part(Part::with_rels(
            pres_uri.clone(),
            ct::PML_PRESENTATION_MAIN,
            pres_xml.into_bytes(),
            pres_rels,
        ));

        // Master relationship IDs must match the master's sldLayoutIdLst
        let mut master = Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml(),
        );
        for kind in LayoutKind::ALL {
            let layout_uri = kind.partname()?;
            master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);

            let mut layout = Part::new(
                layout_uri,
                ct::PML_SLIDE_LAYOUT,
                template::slide_layout_xml(kind),
            );
            layout.relate_to(&master_uri, rt::SLIDE_MASTER);
            package.add_part(layout);
        }
        master.relate_to(&theme_uri, rt::THEME);
        package.add_part(master);

        package.add_part(Part::new(theme_uri, ct::OFC_THEME, template::default_theme_xml()));
        package.add_part(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml(),
        ));
        package.add_part(Part::new(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml(),
        ));
        package.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml(),
        ));

        for part in slide_parts {
            package.add_part(part);
        }

        let core_uri = uri("/docProps/core.xml")?;
        let core = CoreProperties {
            title: self.title.clone(),
            creator: self.creator.clone(),
            created: self.created,
        };
        package.add_part(Part::new(core_uri.clone(), ct::OPC_CORE_PROPERTIES, core.to_xml()));

        let app_uri = uri("/docProps/app.xml")?;
        let app = AppProperties {
            slides: self.slides.len(),
            paragraphs: self
                .slides
                .iter()
                .map(|s| s.paragraphs().len() + s.subtitle().len())
                .sum(),
        };
        package.add_part(Part::new(app_uri.clone(), ct::OFC_EXTENDED_PROPERTIES, app.to_xml()));

        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(package)
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_rids` holds the presentation's relationship ID for each slide,
    /// in slide order.
    pub(crate) fn generate_presentation_xml(&self, slide_rids: &[String]) -> Result<String> {
        if slide_rids.len() != self.slides.len() {
            return Err(OoxmlError::InvalidFormat(format!(
                "{} slide relationship IDs for {} slides",
                slide_rids.len(),
                self.slides.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Slide master ID list; the master is always rId1
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

fn uri(partname: &str) -> Result<PackURI> {
    PackURI::new(partname).map_err(|e| OoxmlError::Opc(OpcError::InvalidPackUri(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width().get(), 9144000);
        assert_eq!(pres.slide_height().get(), 6858000);
    }

    #[test]
    fn test_add_slide_assigns_ids() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(LayoutKind::TitleSlide).set_title("One");
        pres.add_slide(LayoutKind::TitleAndContent).set_title("Two");

        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slides()[0].slide_id(), 256);
        assert_eq!(pres.slides()[1].slide_id(), 257);
        assert_eq!(pres.slides()[1].title(), Some("Two"));
    }

    #[test]
    fn test_xml_generation() {
        let mut pres = MutablePresentation::with_size(Emu::new(12192000), Emu::new(6858000));
        pres.add_slide(LayoutKind::TitleSlide).set_title("Test");

        let xml = pres.generate_presentation_xml(&["rId6".to_string()]).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
        assert!(pres.generate_presentation_xml(&[]).is_err());
    }

    #[test]
    fn test_package_relationships() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(LayoutKind::TitleSlide).set_title("Title");
        pres.add_slide(LayoutKind::TitleAndContent).set_title("Body");

        let package = pres.to_package().unwrap();
        let main = package.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);
        assert_eq!(main.rels().get("rId1").unwrap().reltype(), rt::SLIDE_MASTER);
        assert_eq!(main.rels().get("rId6").unwrap().target_ref(), "slides/slide1.xml");
        assert_eq!(main.rels().get("rId7").unwrap().target_ref(), "slides/slide2.xml");

        let slide2 = package
            .get_part(&PackURI::new("/ppt/slides/slide2.xml").unwrap())
            .unwrap();
        let layout = package.part_related_by(slide2, rt::SLIDE_LAYOUT).unwrap();
        assert_eq!(layout.partname().as_str(), "/ppt/slideLayouts/slideLayout2.xml");

        let master = package.part_related_by(layout, rt::SLIDE_MASTER).unwrap();
        assert_eq!(master.rels().get("rId1").unwrap().target_ref(), "../slideLayouts/slideLayout1.xml");
        assert!(package.part_related_by(master, rt::THEME).is_ok());
        assert!(package.rels().part_with_reltype(rt::CORE_PROPERTIES).is_ok());
    }

    #[test]
    fn test_pinned_timestamp_gives_identical_bytes() {
        use chrono::TimeZone;

        let created = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        let build = || {
            let mut pres = MutablePresentation::new();
            pres.set_created(created);
            let slide = pres.add_slide(LayoutKind::TitleAndContent);
            slide.set_title("Same");
            slide.add_paragraph("Body", 1).unwrap();
            pres.to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_to_bytes_is_zip() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(LayoutKind::TitleSlide).set_title("Zip");
        let bytes = pres.to_bytes().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
