/// The PackURI value type: the name of a part inside an OPC package.
use std::fmt;

/// The pseudo-partname of the package itself.
pub const PACKAGE_URI: &str = "/";

/// The partname of the content types stream.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// A partname within an OPC package, e.g. `/ppt/slides/slide3.xml`.
///
/// PackURIs always begin with a forward slash and use forward slashes as
/// separators. The package itself is addressed by [`PACKAGE_URI`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a PackURI, rejecting strings that do not start with `/`.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("PackURI must begin with slash, got '{}'", uri));
        }
        Ok(Self { uri })
    }

    /// Resolve a relationship target (e.g. `../slideLayouts/slideLayout2.xml`)
    /// against the directory it is relative to (e.g. `/ppt/slides`).
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self, String> {
        let mut segments: Vec<&str> = Vec::new();
        if !relative_ref.starts_with('/') {
            segments.extend(base_uri.split('/').filter(|s| !s.is_empty()));
        }
        for segment in relative_ref.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    if segments.pop().is_none() {
                        return Err(format!(
                            "Relative reference '{}' escapes the package root from '{}'",
                            relative_ref, base_uri
                        ));
                    }
                },
                other => segments.push(other),
            }
        }
        Self::new(format!("/{}", segments.join("/")))
    }

    /// The directory portion, e.g. `/ppt/slides` for `/ppt/slides/slide1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// The final path segment, e.g. `slide1.xml`. Empty for the package URI.
    pub fn filename(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or("")
    }

    /// The extension without the leading period, e.g. `xml`.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        filename.rfind('.').map_or("", |pos| &filename[pos + 1..])
    }

    /// The numeric suffix of tuple partnames, e.g. 21 for `slide21.xml`.
    pub fn idx(&self) -> Option<u32> {
        let filename = self.filename();
        let stem = filename.rfind('.').map_or(filename, |pos| &filename[..pos]);
        let digits = stem.len() - stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 || digits == stem.len() {
            return None;
        }
        stem[stem.len() - digits..].parse().ok()
    }

    /// The ZIP member name: the URI without its leading slash.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// The partname of the `.rels` part holding this part's relationships,
    /// e.g. `/ppt/slides/_rels/slide1.xml.rels`.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let base = self.base_uri();
        let filename = self.filename();
        if base == "/" {
            Self::new(format!("/_rels/{}.rels", filename))
        } else {
            Self::new(format!("{}/_rels/{}.rels", base, filename))
        }
    }

    /// The reference to this part relative to `base_uri`, suitable as a
    /// relationship target. Inverse of [`PackURI::from_rel_ref`].
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }
        let base: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let target: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();
        let common = base
            .iter()
            .zip(target.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = vec![".."; base.len() - common];
        parts.extend_from_slice(&target[common..]);
        parts.join("/")
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for PackURI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_leading_slash() {
        assert!(PackURI::new("ppt/presentation.xml").is_err());
        assert!(PackURI::new("/ppt/presentation.xml").is_ok());
    }

    #[test]
    fn test_components() {
        let uri = PackURI::new("/ppt/slides/slide21.xml").unwrap();
        assert_eq!(uri.base_uri(), "/ppt/slides");
        assert_eq!(uri.filename(), "slide21.xml");
        assert_eq!(uri.ext(), "xml");
        assert_eq!(uri.idx(), Some(21));
        assert_eq!(uri.membername(), "ppt/slides/slide21.xml");

        let singleton = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(singleton.idx(), None);
        assert_eq!(PackURI::new("/[Content_Types].xml").unwrap().base_uri(), "/");
    }

    #[test]
    fn test_rels_uri() {
        let pkg = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(pkg.rels_uri().unwrap().as_str(), "/_rels/.rels");

        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(
            pres.rels_uri().unwrap().as_str(),
            "/ppt/_rels/presentation.xml.rels"
        );
    }

    #[test]
    fn test_from_rel_ref() {
        let uri = PackURI::from_rel_ref("/ppt/slides", "../slideLayouts/slideLayout2.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/slideLayouts/slideLayout2.xml");

        let uri = PackURI::from_rel_ref("/", "ppt/presentation.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/presentation.xml");

        let uri = PackURI::from_rel_ref("/ppt", "/docProps/core.xml").unwrap();
        assert_eq!(uri.as_str(), "/docProps/core.xml");

        assert!(PackURI::from_rel_ref("/", "../escape.xml").is_err());
    }

    #[test]
    fn test_relative_ref() {
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        assert_eq!(
            layout.relative_ref("/ppt/slides"),
            "../slideLayouts/slideLayout1.xml"
        );

        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(slide.relative_ref("/ppt"), "slides/slide1.xml");
        assert_eq!(slide.relative_ref("/"), "ppt/slides/slide1.xml");
    }
}
