/// Open Packaging Conventions (OPC) implementation.
///
/// The container layer underneath PresentationML: named parts, the
/// relationships between them, content types, and the ZIP archive they
/// are stored in.
///
/// - [`OpcPackage`] is the in-memory package: parts plus package relationships
/// - [`pkgreader`] loads a package by walking its relationship graph
/// - [`pkgwriter`] serializes a package, optionally straight to disk

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
