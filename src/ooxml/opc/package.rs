/// The in-memory OPC package.
///
/// An `OpcPackage` is the set of parts plus the package-level relationships.
/// It is built part by part when writing, or loaded whole from an archive
/// when reading.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::rel::{Relationship, Relationships};
use std::io::Read;
use std::path::Path;

pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    /// Parts in insertion order; serialization follows this order
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Load a package file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::open(path)?)
    }

    /// Load a package from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::from_reader(reader)?)
    }

    /// Load a package from archive bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::from_bytes(data)?)
    }

    fn from_phys_reader(phys_reader: PhysPkgReader) -> Result<Self> {
        let (rels, sparts) = PackageReader::from_phys_reader(phys_reader)?.into_parts();
        let parts = sparts
            .map(|spart| Part::with_rels(spart.partname, spart.content_type, spart.blob, spart.rels))
            .collect();
        Ok(Self { rels, parts })
    }

    /// The part the package's `officeDocument` relationship points at.
    pub fn main_document_part(&self) -> Result<&Part> {
        let rel = self.rels.part_with_reltype(relationship_type::OFFICE_DOCUMENT)?;
        self.get_part(&rel.target_partname()?)
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|part| part.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// The part `rel` points at. `rel` must be internal.
    pub fn related_part(&self, rel: &Relationship) -> Result<&Part> {
        self.get_part(&rel.target_partname()?)
    }

    /// The single part `source` relates to with `reltype`.
    pub fn part_related_by(&self, source: &Part, reltype: &str) -> Result<&Part> {
        self.related_part(source.rels().part_with_reltype(reltype)?)
    }

    /// Add a part, replacing any existing part with the same partname.
    pub fn add_part(&mut self, part: Part) {
        match self
            .parts
            .iter()
            .position(|p| p.partname() == part.partname())
        {
            Some(pos) => self.parts[pos] = part,
            None => self.parts.push(part),
        }
    }

    #[inline]
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to `partname`, returning the relationship ID.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        let target_ref = partname.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref)
    }

    #[inline]
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
