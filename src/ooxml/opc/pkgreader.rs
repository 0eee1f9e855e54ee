//! Low-level, read-only view of a serialized OPC package.
//!
//! The reader resolves content types and walks the relationship graph from
//! the package relationships outward, loading every internal part it reaches
//! exactly once.

use crate::common::xml::unescape_xml;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use log::debug;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

/// A part as loaded from the archive.
#[derive(Debug)]
pub struct SerializedPart {
    pub partname: PackURI,
    pub content_type: String,
    pub blob: Vec<u8>,
    pub rels: Relationships,
}

/// Content type lookup built from `[Content_Types].xml`.
struct ContentTypeMap {
    /// Keyed by lowercase extension
    defaults: HashMap<String, String>,
    /// Keyed by lowercase partname
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self {
            defaults: HashMap::new(),
            overrides: HashMap::new(),
        };
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let kind = match e.local_name().as_ref() {
                        b"Default" => Some((&b"Extension"[..], true)),
                        b"Override" => Some((&b"PartName"[..], false)),
                        _ => None,
                    };
                    if let Some((key_attr, is_default)) = kind {
                        let mut key = None;
                        let mut content_type = None;
                        for attr in e.attributes() {
                            let attr = attr?;
                            let value = unescape_xml(std::str::from_utf8(&attr.value)?);
                            if attr.key.as_ref() == key_attr {
                                key = Some(value.to_lowercase());
                            } else if attr.key.as_ref() == b"ContentType" {
                                content_type = Some(value);
                            }
                        }

                        if let (Some(key), Some(ct)) = (key, content_type) {
                            if is_default {
                                map.defaults.insert(key, ct);
                            } else {
                                map.overrides.insert(key, ct);
                            }
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!(
                        "Content types parse error: {}",
                        e
                    )));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Override first, then the default for the extension.
    fn get(&self, pack_uri: &PackURI) -> Result<&str> {
        self.overrides
            .get(&pack_uri.as_str().to_lowercase())
            .or_else(|| self.defaults.get(&pack_uri.ext().to_lowercase()))
            .map(String::as_str)
            .ok_or_else(|| OpcError::ContentTypeNotFound(pack_uri.to_string()))
    }
}

/// All parts of a package, in the order they were discovered.
pub struct PackageReader {
    pkg_rels: Relationships,
    sparts: SmallVec<[SerializedPart; 32]>,
}

impl PackageReader {
    /// Load everything reachable from the package relationships.
    pub fn from_phys_reader(mut phys_reader: PhysPkgReader) -> Result<Self> {
        let content_types = ContentTypeMap::from_xml(&phys_reader.content_types_xml()?)?;
        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let pkg_rels = Self::load_rels(&mut phys_reader, &package_uri)?;

        let mut sparts = SmallVec::new();
        let mut visited: HashSet<PackURI> = HashSet::new();
        let mut pending: Vec<PackURI> = Self::internal_targets(&pkg_rels)?;

        while let Some(partname) = pending.pop() {
            if !visited.insert(partname.clone()) {
                continue;
            }

            let content_type = content_types.get(&partname)?.to_string();
            let blob = phys_reader.blob_for(&partname)?;
            let rels = Self::load_rels(&mut phys_reader, &partname)?;
            // Reverse so targets are visited in relationship order
            pending.extend(Self::internal_targets(&rels)?.into_iter().rev());

            debug!("loaded part {} ({} bytes)", partname, blob.len());
            sparts.push(SerializedPart {
                partname,
                content_type,
                blob,
                rels,
            });
        }

        Ok(Self { pkg_rels, sparts })
    }

    fn load_rels(phys_reader: &mut PhysPkgReader, source: &PackURI) -> Result<Relationships> {
        let base_uri = source.base_uri().to_string();
        match phys_reader.rels_xml_for(source)? {
            Some(xml) => Relationships::from_xml(base_uri, &xml),
            None => Ok(Relationships::new(base_uri)),
        }
    }

    fn internal_targets(rels: &Relationships) -> Result<Vec<PackURI>> {
        rels.iter()
            .filter(|rel| !rel.is_external())
            .map(|rel| rel.target_partname())
            .collect()
    }

    /// Consume the reader, yielding the package relationships and parts.
    pub fn into_parts(self) -> (Relationships, impl Iterator<Item = SerializedPart>) {
        (self.pkg_rels, self.sparts.into_iter())
    }
}
