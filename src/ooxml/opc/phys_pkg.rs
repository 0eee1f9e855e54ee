//! The physical (ZIP) side of an OPC package.
//!
//! [`PhysPkgReader`] pulls member blobs out of an archive by partname and
//! [`PhysPkgWriter`] assembles a new archive in memory.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Reads parts out of a ZIP-based OPC package held in memory.
pub struct PhysPkgReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PhysPkgReader {
    /// Open a package file.
    ///
    /// # Errors
    /// Returns [`OpcError::PackageNotFound`] if the path does not exist, or a
    /// ZIP error if the file is not an archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Read a whole package from `reader` into memory.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// The decompressed content of the member backing `pack_uri`.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = match self.archive.by_name(pack_uri.membername()) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(OpcError::PartNotFound(pack_uri.to_string()));
            },
            Err(e) => return Err(e.into()),
        };
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// The `[Content_Types].xml` stream, required in every package.
    pub fn content_types_xml(&mut self) -> Result<Vec<u8>> {
        let uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        self.blob_for(&uri)
    }

    /// The `.rels` part for `source_uri`, or `None` if it has no relationships.
    pub fn rels_xml_for(&mut self, source_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        match self.blob_for(&rels_uri) {
            Ok(blob) => Ok(Some(blob)),
            Err(OpcError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Number of members in the archive.
    #[inline]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

/// Builds a ZIP-based OPC package in memory.
///
/// Members get a fixed modification time so that two packages with the same
/// parts produce the same archive.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    /// Write a part with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.start_file(pack_uri.membername(), self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish the central directory and return the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_members() {
        let content_types = PackURI::new(CONTENT_TYPES_URI).unwrap();
        let rels = PackURI::new("/_rels/.rels").unwrap();
        let presentation = PackURI::new("/ppt/presentation.xml").unwrap();

        let mut writer = PhysPkgWriter::new();
        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&rels, b"<Relationships/>").unwrap();
        writer.write(&presentation, b"<p:presentation/>").unwrap();
        let data = writer.finish().unwrap();

        let mut reader = PhysPkgReader::from_bytes(data).unwrap();
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.content_types_xml().unwrap(), b"<Types/>");
        assert_eq!(reader.blob_for(&presentation).unwrap(), b"<p:presentation/>");

        let pkg = PackURI::new("/").unwrap();
        assert_eq!(reader.rels_xml_for(&pkg).unwrap().unwrap(), b"<Relationships/>");
        assert!(reader.rels_xml_for(&presentation).unwrap().is_none());
    }

    #[test]
    fn test_missing_member_is_part_not_found() {
        let data = PhysPkgWriter::new().finish().unwrap();
        let mut reader = PhysPkgReader::from_bytes(data).unwrap();
        let missing = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert!(matches!(
            reader.blob_for(&missing),
            Err(OpcError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_identical_parts_give_identical_archives() {
        let uri = PackURI::new("/a.xml").unwrap();
        let build = || {
            let mut writer = PhysPkgWriter::new();
            writer.write(&uri, b"<a/>").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PhysPkgReader::open(dir.path().join("missing.pptx"));
        assert!(matches!(result, Err(OpcError::PackageNotFound(_))));
    }
}
