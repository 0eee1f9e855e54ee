//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] to a ZIP archive: `[Content_Types].xml`, the
//! package relationships, then every part followed by its `.rels` part.

use crate::common::xml::escape_attr;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use log::debug;
use std::collections::BTreeMap;
use std::fs::{self, File, Permissions};
use std::io::{self, Write};
use std::path::Path;

pub struct PackageWriter;

impl PackageWriter {
    /// Write a package to `path`, replacing any existing file.
    ///
    /// The archive is serialized completely before anything touches the
    /// file system, then written to a temporary file next to `path` and
    /// renamed into place. On failure no file is left at `path` or beside it.
    /// A replaced file keeps its permissions; a new file gets `0o644` on Unix.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let path = path.as_ref();
        let bytes = Self::to_bytes(package)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(&bytes)?;
        let permissions = target_permissions(path, staged.as_file())?;
        staged.as_file().set_permissions(permissions)?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| OpcError::IoError(e.error))?;

        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Serialize a package to archive bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        let content_types = ContentTypesItem::from_package(package).to_xml();
        phys_writer.write(&content_types_uri, content_types.as_bytes())?;

        let pkg_rels_uri = PackURI::new(PACKAGE_URI)
            .and_then(|uri| uri.rels_uri())
            .map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&pkg_rels_uri, package.rels().to_xml().as_bytes())?;

        for part in package.iter_parts() {
            debug!("writing part {} ({} bytes)", part.partname(), part.blob().len());
            phys_writer.write(part.partname(), part.blob())?;
            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri().map_err(OpcError::InvalidPackUri)?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        phys_writer.finish()
    }
}

/// Permissions of the regular file at `path`, or the default for a new file.
fn target_permissions(path: &Path, staged: &File) -> io::Result<Permissions> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(meta.permissions()),
        Ok(_) => new_file_permissions(staged),
        Err(e) if e.kind() == io::ErrorKind::NotFound => new_file_permissions(staged),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn new_file_permissions(_staged: &File) -> io::Result<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions(staged: &File) -> io::Result<Permissions> {
    Ok(staged.metadata()?.permissions())
}

/// Builder for `[Content_Types].xml`.
///
/// `BTreeMap`s keep the output sorted and therefore reproducible.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Parts whose type is the extension's default need no override.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext().to_lowercase();
        if self.defaults.get(&ext).is_some_and(|d| d == content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(r#"<Default Extension=""#);
            xml.push_str(&escape_attr(ext));
            xml.push_str(r#"" ContentType=""#);
            xml.push_str(&escape_attr(content_type));
            xml.push_str(r#""/>"#);
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str(r#"<Override PartName=""#);
            xml.push_str(&escape_attr(partname));
            xml.push_str(r#"" ContentType=""#);
            xml.push_str(&escape_attr(content_type));
            xml.push_str(r#""/>"#);
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::part::Part;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(
            &PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
        );
        cti.add_content_type(&PackURI::new("/ppt/notes.xml").unwrap(), ct::XML);

        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="xml" ContentType="application/xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/presentation.xml""#));
        assert!(!xml.contains("/ppt/notes.xml"));
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");
        std::fs::write(&path, b"stale").unwrap();

        PackageWriter::write(&path, &sample_package()).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..2], b"PK");
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    fn sample_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        pkg.add_part(Part::new(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>",
        ));
        pkg
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");
        PackageWriter::write(&path, &sample_package()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_replaced_file_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");
        std::fs::write(&path, b"stale").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o640)).unwrap();

        PackageWriter::write(&path, &sample_package()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
        assert_eq!(&std::fs::read(&path).unwrap()[..2], b"PK");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.pptx");

        let result = PackageWriter::write(&path, &OpcPackage::new());
        assert!(matches!(result, Err(OpcError::IoError(_))));
        assert!(!path.exists());
    }
}
