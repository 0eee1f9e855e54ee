use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Character data only needs the markup characters escaped
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build XML text escaper")
});

static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\""])
        .expect("Failed to build XML attribute escaper")
});

// LeftmostLongest so that "&amp;lt;" decodes to "&lt;" and not "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape text for use as element content (`<a:t>`).
///
/// Quotes and apostrophes are left alone; they are legal in character data
/// and keeping them literal makes the written parts easier to diff.
///
/// # Examples
///
/// ```
/// use journey_deck::common::xml::escape_text;
/// assert_eq!(escape_text("<td> & \"x\""), "&lt;td&gt; &amp; \"x\"");
/// ```
#[inline]
pub fn escape_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Escape text for use inside a double-quoted attribute value.
///
/// # Examples
///
/// ```
/// use journey_deck::common::xml::escape_attr;
/// assert_eq!(escape_attr("a \"b\" & c"), "a &quot;b&quot; &amp; c");
/// ```
#[inline]
pub fn escape_attr(s: &str) -> String {
    ATTR_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;"])
}

/// Replace the five predefined XML entities with their characters.
///
/// Unknown or incomplete entities are left unchanged.
///
/// # Examples
///
/// ```
/// use journey_deck::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&bogus;"), "&bogus;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Resolve the name of a general or character reference (the part between
/// `&` and `;`) to the character it stands for.
///
/// Returns `None` for names that are neither predefined entities nor valid
/// decimal/hexadecimal character references.
///
/// # Examples
///
/// ```
/// use journey_deck::common::xml::resolve_entity;
/// assert_eq!(resolve_entity("amp"), Some('&'));
/// assert_eq!(resolve_entity("#x25BA"), Some('►'));
/// assert_eq!(resolve_entity("#60"), Some('<'));
/// assert_eq!(resolve_entity("nbsp"), None);
/// ```
pub fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_text_escaping_keeps_quotes() {
        assert_eq!(
            escape_text(r#""Extract all logic from this application's controllers""#),
            r#""Extract all logic from this application's controllers""#
        );
        assert_eq!(
            escape_text("Added onclick handler to entire <td> day cell"),
            "Added onclick handler to entire &lt;td&gt; day cell"
        );
    }

    #[test]
    fn test_attr_escaping() {
        assert_eq!(escape_attr("<\"&\">"), "&lt;&quot;&amp;&quot;&gt;");
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        assert_eq!(resolve_entity("#xZZ"), None);
        assert_eq!(resolve_entity("#"), None);
        assert_eq!(resolve_entity("#xD800"), None);
    }

    proptest! {
        #[test]
        fn prop_unescape_inverts_attr_escape(s in "\\PC{0,40}") {
            prop_assert_eq!(unescape_xml(&escape_attr(&s)), s);
        }
    }
}
