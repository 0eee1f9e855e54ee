/// Slide types and implementation for PPTX presentations.
use crate::common::xml::escape_text;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::layout::LayoutKind;
use crate::ooxml::pptx::shapes::textframe::{MAX_LEVEL, Paragraph, TextFrame};
use std::fmt::Write as FmtWrite;

/// A mutable slide in a presentation.
///
/// A slide starts out with the placeholders of its layout: a title plus
/// either a subtitle or a body. Text is assigned to those placeholders.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256 and up)
    pub(crate) slide_id: u32,
    layout: LayoutKind,
    /// Text of the title placeholder
    title: Option<String>,
    /// Paragraphs of the subtitle or body placeholder, depending on layout
    text_frame: TextFrame,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32, layout: LayoutKind) -> Self {
        Self {
            slide_id,
            layout,
            title: None,
            text_frame: TextFrame::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    /// Set the slide title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replace the subtitle text. Each line becomes its own paragraph.
    ///
    /// # Errors
    /// [`OoxmlError::PlaceholderNotFound`] if the layout has no subtitle.
    pub fn set_subtitle(&mut self, text: &str) -> Result<()> {
        if !self.layout.has_subtitle() {
            return Err(self.missing("subtitle"));
        }
        self.text_frame = TextFrame::from_text(text);
        Ok(())
    }

    /// Subtitle paragraphs; empty for layouts without a subtitle.
    pub fn subtitle(&self) -> &[Paragraph] {
        if self.layout.has_subtitle() {
            self.text_frame.paragraphs()
        } else {
            &[]
        }
    }

    /// Append a paragraph to the body placeholder.
    ///
    /// # Errors
    /// [`OoxmlError::PlaceholderNotFound`] if the layout has no body, or
    /// [`OoxmlError::InvalidFormat`] if `level` is deeper than DrawingML allows.
    pub fn add_paragraph(&mut self, text: &str, level: u8) -> Result<()> {
        if !self.layout.has_body() {
            return Err(self.missing("body"));
        }
        if level > MAX_LEVEL {
            return Err(OoxmlError::InvalidFormat(format!(
                "paragraph level {} exceeds {}",
                level, MAX_LEVEL
            )));
        }
        self.text_frame.push(Paragraph::new(text, level));
        Ok(())
    }

    /// Append an empty paragraph to the body placeholder.
    pub fn add_blank_paragraph(&mut self) -> Result<()> {
        self.add_paragraph("", 0)
    }

    /// Body paragraphs; empty for layouts without a body.
    pub fn paragraphs(&self) -> &[Paragraph] {
        if self.layout.has_body() {
            self.text_frame.paragraphs()
        } else {
            &[]
        }
    }

    fn missing(&self, placeholder: &'static str) -> OoxmlError {
        OoxmlError::PlaceholderNotFound {
            layout: self.layout.name(),
            placeholder,
        }
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        // Group shape is id 1, so placeholders take 2 and 3
        let title_ph = format!(r#"<p:ph type="{}"/>"#, self.layout.title_ph_type());
        let title = TextFrame::from_text(self.title.as_deref().unwrap_or(""));
        write_placeholder(&mut xml, 2, "Title 1", &title_ph, title.paragraphs())?;

        match self.layout {
            LayoutKind::TitleSlide => write_placeholder(
                &mut xml,
                3,
                "Subtitle 2",
                r#"<p:ph type="subTitle" idx="1"/>"#,
                self.text_frame.paragraphs(),
            )?,
            LayoutKind::TitleAndContent => write_placeholder(
                &mut xml,
                3,
                "Content Placeholder 2",
                r#"<p:ph idx="1"/>"#,
                self.text_frame.paragraphs(),
            )?,
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

/// Write a placeholder shape that inherits its geometry from the layout.
fn write_placeholder(
    xml: &mut String,
    id: u32,
    name: &str,
    ph: &str,
    paragraphs: &[Paragraph],
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, id, name)
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str("<p:nvPr>");
    xml.push_str(ph);
    xml.push_str("</p:nvPr>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    if paragraphs.is_empty() {
        xml.push_str("<a:p/>");
    }
    for paragraph in paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");
    if paragraph.level > 0 {
        write!(xml, r#"<a:pPr lvl="{}"/>"#, paragraph.level)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    if paragraph.is_blank() {
        xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
    } else {
        xml.push_str("<a:r>");
        xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
        write!(xml, "<a:t>{}</a:t>", escape_text(&paragraph.text))
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
    }
    xml.push_str("</a:p>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide_xml() {
        let mut slide = MutableSlide::new(256, LayoutKind::TitleSlide);
        slide.set_title("Deck & Title");
        slide.set_subtitle("line one\nline two").unwrap();

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains("<a:t>Deck &amp; Title</a:t>"));
        assert!(xml.contains("<a:t>line one</a:t>"));
        assert!(xml.contains("<a:t>line two</a:t>"));
    }

    #[test]
    fn test_body_paragraph_levels() {
        let mut slide = MutableSlide::new(257, LayoutKind::TitleAndContent);
        slide.set_title("Body");
        slide.add_paragraph("Lead:", 0).unwrap();
        slide.add_paragraph("  - <td> detail", 1).unwrap();
        slide.add_blank_paragraph().unwrap();

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(xml.contains("<a:p><a:r><a:rPr lang=\"en-US\" dirty=\"0\"/><a:t>Lead:</a:t>"));
        assert!(xml.contains(r#"<a:pPr lvl="1"/>"#));
        assert!(xml.contains("<a:t>  - &lt;td&gt; detail</a:t>"));
        assert!(xml.contains(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#));
        assert_eq!(slide.paragraphs().len(), 3);
    }

    #[test]
    fn test_placeholder_mismatch() {
        let mut title = MutableSlide::new(256, LayoutKind::TitleSlide);
        assert!(matches!(
            title.add_paragraph("text", 0),
            Err(OoxmlError::PlaceholderNotFound {
                placeholder: "body",
                ..
            })
        ));

        let mut content = MutableSlide::new(257, LayoutKind::TitleAndContent);
        assert!(matches!(
            content.set_subtitle("text"),
            Err(OoxmlError::PlaceholderNotFound {
                layout: "Title and Content",
                placeholder: "subtitle",
            })
        ));
    }

    #[test]
    fn test_level_limit() {
        let mut slide = MutableSlide::new(256, LayoutKind::TitleAndContent);
        assert!(slide.add_paragraph("deep", MAX_LEVEL).is_ok());
        assert!(matches!(
            slide.add_paragraph("too deep", MAX_LEVEL + 1),
            Err(OoxmlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_body_has_one_paragraph() {
        let slide = MutableSlide::new(256, LayoutKind::TitleAndContent);
        let xml = slide.to_xml().unwrap();
        assert_eq!(xml.matches("<a:p/>").count(), 1);
    }
}
