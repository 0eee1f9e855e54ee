/// Presentation part - the main part in a .pptx package.
///
/// Corresponds to `/ppt/presentation.xml` in the package.
use crate::common::unit::Emu;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use quick_xml::Reader;
use quick_xml::events::Event;

/// The main presentation part.
///
/// Holds the slide size and the ordered list of slide references.
pub struct PresentationPart<'a> {
    /// The underlying OPC part
    part: &'a Part,
}

impl<'a> PresentationPart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    #[inline]
    fn xml_bytes(&self) -> &[u8] {
        self.part.blob()
    }

    /// Number of `<p:sldId>` entries.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_rids()?.len())
    }

    /// The slide size from `<p:sldSz>`, or `None` if it is not defined.
    pub fn slide_size(&self) -> Result<Option<(Emu, Emu)>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"sldSz" => {
                    let mut cx = None;
                    let mut cy = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"cx" => cx = Some(parse_emu(&attr.value)?),
                            b"cy" => cy = Some(parse_emu(&attr.value)?),
                            _ => {},
                        }
                    }
                    return Ok(cx.zip(cy));
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }

    /// Relationship IDs of all slides, in presentation order.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        reader.config_mut().trim_text(true);

        let mut rids = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"sldId" => {
                    for attr in e.attributes() {
                        let attr = attr?;
                        // The relationship ID is the namespaced `r:id`; the plain `id` is the slide ID
                        if attr.key.prefix().is_some() && attr.key.local_name().as_ref() == b"id" {
                            rids.push(std::str::from_utf8(&attr.value)?.to_string());
                            break;
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(rids)
    }

    /// Get the underlying OPC part.
    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }
}

fn parse_emu(value: &[u8]) -> Result<Emu> {
    atoi_simd::parse::<i64>(value)
        .map(Emu::new)
        .map_err(|_| OoxmlError::Xml(format!("Invalid EMU value: {}", String::from_utf8_lossy(value))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::PackURI;
    use crate::ooxml::opc::constants::content_type as ct;

    fn part(xml: &str) -> Part {
        Part::new(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            xml,
        )
    }

    #[test]
    fn test_slide_rids_in_order() {
        let part = part(
            r#"<p:presentation xmlns:p="p" xmlns:r="r"><p:sldIdLst><p:sldId id="256" r:id="rId7"/><p:sldId id="257" r:id="rId6"/></p:sldIdLst></p:presentation>"#,
        );
        let pres = PresentationPart::from_part(&part);
        assert_eq!(pres.slide_rids().unwrap(), ["rId7", "rId6"]);
        assert_eq!(pres.slide_count().unwrap(), 2);
    }

    #[test]
    fn test_slide_size() {
        let part = part(r#"<p:presentation xmlns:p="p"><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#);
        let size = PresentationPart::from_part(&part).slide_size().unwrap();
        assert_eq!(size, Some((Emu::new(9144000), Emu::new(6858000))));

        let part = part_without_size();
        assert_eq!(PresentationPart::from_part(&part).slide_size().unwrap(), None);
    }

    fn part_without_size() -> Part {
        part(r#"<p:presentation xmlns:p="p"/>"#)
    }
}
