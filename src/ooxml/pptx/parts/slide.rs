/// Slide parts and related types.
///
/// This module contains parts for slides and slide layouts.
use crate::common::xml::resolve_entity;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use crate::ooxml::pptx::shapes::{Paragraph, Placeholder};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A slide part.
///
/// Corresponds to `/ppt/slides/slideN.xml` in the package.
pub struct SlidePart<'a> {
    /// The underlying OPC part
    part: &'a Part,
}

impl<'a> SlidePart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    /// Get the slide name from `<p:cSld name="...">`; empty if unnamed.
    pub fn name(&self) -> Result<String> {
        csld_name(self.part.blob())
    }

    /// Parse the placeholder shapes of the slide, in document order.
    ///
    /// Shapes without a `<p:ph>` element are skipped.
    pub fn placeholders(&self) -> Result<Vec<Placeholder>> {
        parse_placeholders(self.part.blob())
    }

    /// Get the underlying OPC part.
    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }
}

/// A slide layout part.
///
/// Corresponds to `/ppt/slideLayouts/slideLayoutN.xml` in the package.
pub struct SlideLayoutPart<'a> {
    part: &'a Part,
}

impl<'a> SlideLayoutPart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    /// The layout name, e.g. "Title and Content".
    pub fn name(&self) -> Result<String> {
        csld_name(self.part.blob())
    }

    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }
}

fn csld_name(xml: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"cSld" => {
                return attr_value(&e, b"name").map(Option::unwrap_or_default);
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok(String::new())
}

/// Value of the unprefixed attribute `key`, entity references resolved.
fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            let raw = std::str::from_utf8(&attr.value)?;
            return Ok(Some(crate::common::xml::unescape_xml(raw)));
        }
    }
    Ok(None)
}

/// Parser state while walking a slide's shape tree.
#[derive(Default)]
struct ShapeState {
    shape: Placeholder,
    is_placeholder: bool,
    paragraph: Option<Paragraph>,
    in_text: bool,
}

fn parse_placeholders(xml: &[u8]) -> Result<Vec<Placeholder>> {
    let mut reader = Reader::from_reader(xml);
    // Run text keeps its leading and trailing whitespace
    reader.config_mut().trim_text(false);

    let mut placeholders = Vec::new();
    let mut current: Option<ShapeState> = None;
    let mut new_shape = false;
    let mut shape_done = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                match (name.as_ref(), current.as_mut()) {
                    (b"p", Some(state)) => state.paragraph = Some(Paragraph::default()),
                    (b"t", Some(state)) if state.paragraph.is_some() => state.in_text = true,
                    (_, Some(state)) => read_shape_attrs(&e, state)?,
                    (b"sp", None) => new_shape = true,
                    _ => {},
                }
            },
            Ok(Event::Empty(e)) => {
                let name = e.local_name();
                match (name.as_ref(), current.as_mut()) {
                    (b"p", Some(state)) => state.shape.text_frame.push(Paragraph::default()),
                    (_, Some(state)) => read_shape_attrs(&e, state)?,
                    _ => {},
                }
            },
            Ok(Event::Text(e)) => {
                if let Some(para) = text_target(&mut current) {
                    para.text.push_str(std::str::from_utf8(e.as_ref())?);
                }
            },
            Ok(Event::GeneralRef(e)) => {
                if let Some(para) = text_target(&mut current) {
                    let name = std::str::from_utf8(e.as_ref())?;
                    let ch = resolve_entity(name).ok_or_else(|| {
                        OoxmlError::Xml(format!("Unknown entity reference: &{};", name))
                    })?;
                    para.text.push(ch);
                }
            },
            Ok(Event::End(e)) => {
                let name = e.local_name();
                match (name.as_ref(), current.as_mut()) {
                    (b"t", Some(state)) => state.in_text = false,
                    (b"p", Some(state)) => {
                        if let Some(para) = state.paragraph.take() {
                            state.shape.text_frame.push(para);
                        }
                    },
                    (b"sp", Some(_)) => shape_done = true,
                    _ => {},
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();

        if new_shape {
            current = Some(ShapeState::default());
            new_shape = false;
        }
        if shape_done {
            if let Some(state) = current.take() {
                if state.is_placeholder {
                    placeholders.push(state.shape);
                }
            }
            shape_done = false;
        }
    }

    Ok(placeholders)
}

/// The paragraph receiving text, if the parser is inside `<a:t>`.
fn text_target(current: &mut Option<ShapeState>) -> Option<&mut Paragraph> {
    current
        .as_mut()
        .filter(|state| state.in_text)
        .and_then(|state| state.paragraph.as_mut())
}

/// Pick up shape name, placeholder type/index and paragraph level.
fn read_shape_attrs(e: &BytesStart<'_>, state: &mut ShapeState) -> Result<()> {
    match e.local_name().as_ref() {
        b"cNvPr" => {
            if let Some(name) = attr_value(e, b"name")? {
                state.shape.name = name;
            }
        },
        b"ph" => {
            state.is_placeholder = true;
            state.shape.ph_type = attr_value(e, b"type")?;
            if let Some(idx) = attr_value(e, b"idx")? {
                state.shape.idx = atoi_simd::parse::<u32>(idx.as_bytes())
                    .map_err(|_| OoxmlError::Xml(format!("Invalid placeholder idx: {}", idx)))?;
            }
        },
        b"pPr" => {
            if let (Some(para), Some(lvl)) = (state.paragraph.as_mut(), attr_value(e, b"lvl")?) {
                para.level = atoi_simd::parse::<u8>(lvl.as_bytes())
                    .map_err(|_| OoxmlError::Xml(format!("Invalid paragraph level: {}", lvl)))?;
            }
        },
        _ => {},
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::PackURI;
    use crate::ooxml::opc::constants::content_type as ct;

    const SLIDE: &str = concat!(
        r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>"#,
        r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
        r#"<p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US"/><a:t>Fix &amp; Ship</a:t></a:r></a:p></p:txBody></p:sp>"#,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Content Placeholder 2"/><p:cNvSpPr/><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr>"#,
        r#"<p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>"#,
        r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>Lead:</a:t></a:r></a:p>"#,
        r#"<a:p><a:pPr lvl="1"/><a:r><a:rPr lang="en-US"/><a:t>  - &lt;td&gt; &#x25BA; &quot;x&quot;</a:t></a:r></a:p>"#,
        r#"<a:p><a:endParaRPr lang="en-US"/></a:p>"#,
        r#"</p:txBody></p:sp>"#,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="4" name="TextBox 3"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>"#,
        r#"<p:spPr/><p:txBody><a:bodyPr/><a:p><a:r><a:t>not a placeholder</a:t></a:r></a:p></p:txBody></p:sp>"#,
        r#"</p:spTree></p:cSld></p:sld>"#,
    );

    fn slide_part() -> Part {
        Part::new(PackURI::new("/ppt/slides/slide1.xml").unwrap(), ct::PML_SLIDE, SLIDE)
    }

    #[test]
    fn test_placeholders() {
        let part = slide_part();
        let placeholders = SlidePart::from_part(&part).placeholders().unwrap();
        assert_eq!(placeholders.len(), 2);

        let title = &placeholders[0];
        assert!(title.is_title());
        assert_eq!(title.name, "Title 1");
        assert_eq!(title.text_frame.text(), "Fix & Ship");

        let body = &placeholders[1];
        assert!(body.is_body());
        assert_eq!(body.idx, 1);
        let paragraphs = body.text_frame.paragraphs();
        assert_eq!(paragraphs[0], Paragraph::new("Lead:", 0));
        assert_eq!(paragraphs[1], Paragraph::new("  - <td> ► \"x\"", 1));
        assert_eq!(paragraphs[2], Paragraph::blank());
    }

    #[test]
    fn test_layout_name() {
        let part = Part::new(
            PackURI::new("/ppt/slideLayouts/slideLayout2.xml").unwrap(),
            ct::PML_SLIDE_LAYOUT,
            r#"<p:sldLayout xmlns:p="p" type="obj"><p:cSld name="Title and Content"/></p:sldLayout>"#,
        );
        assert_eq!(SlideLayoutPart::from_part(&part).name().unwrap(), "Title and Content");
        assert_eq!(SlidePart::from_part(&slide_part()).name().unwrap(), "");
    }
}
