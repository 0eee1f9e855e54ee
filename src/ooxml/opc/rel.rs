/// Relationships between parts in an OPC package.
///
/// Every part (and the package itself) owns an ordered collection of
/// relationships, serialized to a `_rels/*.rels` part next to it.
use crate::common::xml::{escape_attr, unescape_xml};
use crate::ooxml::opc::constants::{namespace, target_mode};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's base URI unless external
    target_ref: String,

    /// Base URI of the source, for resolving `target_ref`
    base_uri: String,

    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: String,
        reltype: String,
        target_ref: String,
        base_uri: String,
        is_external: bool,
    ) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// The absolute partname this relationship points at.
    ///
    /// Fails for external relationships, which point outside the package.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(format!(
                "{} is external and has no target part",
                self.r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Ordered collection of relationships from a single source.
///
/// Insertion order is kept so that serialized `.rels` parts are stable
/// between runs.
#[derive(Debug, Clone)]
pub struct Relationships {
    base_uri: String,
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty collection for a source whose directory is `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    /// Parse a `.rels` part.
    pub fn from_xml(base_uri: String, xml: &[u8]) -> Result<Self> {
        let mut rels = Self::new(base_uri);
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(ref e) | Event::Start(ref e)
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target = None;
                    let mut external = false;

                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = unescape_xml(std::str::from_utf8(&attr.value)?);
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target = Some(value),
                            b"TargetMode" => external = value == target_mode::EXTERNAL,
                            _ => {},
                        }
                    }

                    match (r_id, reltype, target) {
                        (Some(r_id), Some(reltype), Some(target)) => {
                            rels.add_relationship(reltype, target, r_id, external);
                        },
                        _ => {
                            return Err(OpcError::InvalidRelationship(
                                "Relationship element missing Id, Type or Target".to_string(),
                            ));
                        },
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Add a relationship with an explicit ID, replacing any with the same ID.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
        is_external: bool,
    ) -> &Relationship {
        let rel = Relationship::new(
            r_id,
            reltype,
            target_ref,
            self.base_uri.clone(),
            is_external,
        );
        match self.rels.iter().position(|r| r.r_id == rel.r_id) {
            Some(pos) => {
                self.rels[pos] = rel;
                &self.rels[pos]
            },
            None => {
                self.rels.push(rel);
                &self.rels[self.rels.len() - 1]
            },
        }
    }

    /// Return the ID of an internal relationship of `reltype` to `target_ref`,
    /// creating one with the next free ID if none exists.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|r| !r.is_external && r.reltype == reltype && r.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.add_relationship(
            reltype.to_string(),
            target_ref.to_string(),
            r_id.clone(),
            false,
        );
        r_id
    }

    /// The lowest unused `rIdN`.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self
            .rels
            .iter()
            .filter_map(|rel| {
                rel.r_id
                    .strip_prefix("rId")
                    .and_then(|n| atoi_simd::parse::<u32>(n.as_bytes()).ok())
            })
            .collect();
        used.sort_unstable();

        let mut next = 1u32;
        for n in used {
            if n == next {
                next += 1;
            } else if n > next {
                break;
            }
        }
        format!("rId{}", next)
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|r| r.r_id == r_id)
    }

    /// The single relationship of `reltype`.
    ///
    /// Fails if there is none, or more than one.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.iter().filter(|r| r.reltype == reltype);
        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::RelationshipNotFound(format!(
                "No relationship of type '{}'",
                reltype
            ))),
            (Some(_), Some(_)) => Err(OpcError::InvalidRelationship(format!(
                "Multiple relationships of type '{}'",
                reltype
            ))),
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::PACKAGE_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(r#"<Relationship Id=""#);
            xml.push_str(&escape_attr(&rel.r_id));
            xml.push_str(r#"" Type=""#);
            xml.push_str(&escape_attr(&rel.reltype));
            xml.push_str(r#"" Target=""#);
            xml.push_str(&escape_attr(&rel.target_ref));
            xml.push('"');
            if rel.is_external {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>");
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new(crate::ooxml::opc::packuri::PACKAGE_URI.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_next_r_id_fills_gaps() {
        let mut rels = Relationships::new("/ppt".to_string());
        rels.add_relationship(rt::SLIDE.into(), "slides/slide1.xml".into(), "rId1".into(), false);
        rels.add_relationship(rt::SLIDE.into(), "slides/slide3.xml".into(), "rId3".into(), false);

        let r_id = rels.get_or_add(rt::SLIDE, "slides/slide2.xml");
        assert_eq!(r_id, "rId2");
        assert_eq!(rels.get_or_add(rt::SLIDE, "slides/slide2.xml"), "rId2");
        assert_eq!(rels.len(), 3);
    }

    #[test]
    fn test_part_with_reltype() {
        let mut rels = Relationships::new("/ppt/slides".to_string());
        rels.get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml");

        let rel = rels.part_with_reltype(rt::SLIDE_LAYOUT).unwrap();
        assert_eq!(
            rel.target_partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout2.xml"
        );
        assert!(matches!(
            rels.part_with_reltype(rt::THEME),
            Err(OpcError::RelationshipNotFound(_))
        ));
    }

    #[test]
    fn test_xml_round_trip_keeps_order() {
        let mut rels = Relationships::new("/ppt".to_string());
        rels.get_or_add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        rels.get_or_add(rt::SLIDE, "slides/slide1.xml");
        rels.add_relationship(
            "http://example.com/link".into(),
            "https://example.com/?a=1&b=2".into(),
            "rId9".into(),
            true,
        );

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Target="https://example.com/?a=1&amp;b=2" TargetMode="External""#));

        let parsed = Relationships::from_xml("/ppt".to_string(), xml.as_bytes()).unwrap();
        let ids: Vec<&str> = parsed.iter().map(|r| r.r_id()).collect();
        assert_eq!(ids, ["rId1", "rId2", "rId9"]);
        let external = parsed.get("rId9").unwrap();
        assert!(external.is_external());
        assert_eq!(external.target_ref(), "https://example.com/?a=1&b=2");
        assert!(external.target_partname().is_err());
    }
}
