//! HTML character reference decoding.
//!
//! Symptom descriptions scraped from review sites arrive with escaped
//! characters such as `&amp;`, `&#039;` or `&quot;`. This filter turns them
//! back into the characters they stand for, following the HTML5 parsing
//! rules: numeric references and the Latin-1 named references are decoded
//! even without the closing `;`.

use html_escape::decode_html_entities;

use super::CharFilter;

/// Longest name considered for a named reference.
const MAX_NAME_CHARS: usize = 32;

/// A char filter that decodes named and numeric HTML character references.
///
/// Decoding is a single left-to-right pass, so `&amp;lt;` becomes `&lt;`
/// rather than `<`. Unknown names are left as they are.
#[derive(Clone, Debug, Default)]
pub struct HtmlEntityCharFilter;

impl HtmlEntityCharFilter {
    /// Create a new HTML entity char filter.
    pub fn new() -> Self {
        HtmlEntityCharFilter
    }
}

impl CharFilter for HtmlEntityCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(pos) = rest.find('&') {
            output.push_str(&rest[..pos]);
            let reference = &rest[pos + 1..];
            match decode_reference(reference) {
                Some((decoded, consumed)) => {
                    output.push_str(&decoded);
                    rest = &reference[consumed..];
                }
                None => {
                    output.push('&');
                    rest = reference;
                }
            }
        }
        output.push_str(rest);
        output
    }

    fn name(&self) -> &'static str {
        "html_entity"
    }
}

/// Decode the reference following an `&`. Returns the replacement and the
/// number of bytes of `reference` it covers.
fn decode_reference(reference: &str) -> Option<(String, usize)> {
    match reference.strip_prefix('#') {
        Some(numeric) => decode_numeric(numeric).map(|(ch, len)| (ch.to_string(), len + 1)),
        None => decode_named(reference),
    }
}

/// `#39`, `#x27` and `#X27`, with or without the trailing `;`.
fn decode_numeric(numeric: &str) -> Option<(char, usize)> {
    let (radix, prefix_len) = match numeric.as_bytes().first() {
        Some(b'x' | b'X') => (16, 1),
        _ => (10, 0),
    };
    let digits = &numeric[prefix_len..];
    let digits_len = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if digits_len == 0 {
        return None;
    }

    let ch = u32::from_str_radix(&digits[..digits_len], radix)
        .ok()
        .filter(|&code| code != 0)
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);

    let mut consumed = prefix_len + digits_len;
    if digits[digits_len..].starts_with(';') {
        consumed += 1;
    }
    Some((ch, consumed))
}

/// A named reference. Terminated names go through the full HTML5 table;
/// otherwise the longest legacy name prefixing the run is decoded and the
/// remainder is kept as text.
fn decode_named(reference: &str) -> Option<(String, usize)> {
    let mut name_len = 0;
    for c in reference.chars().take(MAX_NAME_CHARS) {
        if matches!(c, '\t' | '\n' | '\x0c' | ' ' | '<' | '&' | '#' | ';') {
            break;
        }
        name_len += c.len_utf8();
    }
    if name_len == 0 {
        return None;
    }
    let name = &reference[..name_len];

    if reference[name_len..].starts_with(';') {
        let escaped = format!("&{name};");
        let decoded = decode_html_entities(&escaped);
        if decoded != escaped {
            return Some((decoded.into_owned(), name_len + 1));
        }
    }

    (2..=name_len).rev().find_map(|end| {
        name.get(..end)
            .and_then(legacy_entity)
            .map(|ch| (ch.to_string(), end))
    })
}

/// Named references that HTML5 accepts without the trailing `;`.
fn legacy_entity(name: &str) -> Option<char> {
    let ch = match name {
        "AElig" => '\u{c6}',
        "AMP" => '\u{26}',
        "Aacute" => '\u{c1}',
        "Acirc" => '\u{c2}',
        "Agrave" => '\u{c0}',
        "Aring" => '\u{c5}',
        "Atilde" => '\u{c3}',
        "Auml" => '\u{c4}',
        "COPY" => '\u{a9}',
        "Ccedil" => '\u{c7}',
        "ETH" => '\u{d0}',
        "Eacute" => '\u{c9}',
        "Ecirc" => '\u{ca}',
        "Egrave" => '\u{c8}',
        "Euml" => '\u{cb}',
        "GT" => '\u{3e}',
        "Iacute" => '\u{cd}',
        "Icirc" => '\u{ce}',
        "Igrave" => '\u{cc}',
        "Iuml" => '\u{cf}',
        "LT" => '\u{3c}',
        "Ntilde" => '\u{d1}',
        "Oacute" => '\u{d3}',
        "Ocirc" => '\u{d4}',
        "Ograve" => '\u{d2}',
        "Oslash" => '\u{d8}',
        "Otilde" => '\u{d5}',
        "Ouml" => '\u{d6}',
        "QUOT" => '\u{22}',
        "REG" => '\u{ae}',
        "THORN" => '\u{de}',
        "Uacute" => '\u{da}',
        "Ucirc" => '\u{db}',
        "Ugrave" => '\u{d9}',
        "Uuml" => '\u{dc}',
        "Yacute" => '\u{dd}',
        "aacute" => '\u{e1}',
        "acirc" => '\u{e2}',
        "acute" => '\u{b4}',
        "aelig" => '\u{e6}',
        "agrave" => '\u{e0}',
        "amp" => '\u{26}',
        "aring" => '\u{e5}',
        "atilde" => '\u{e3}',
        "auml" => '\u{e4}',
        "brvbar" => '\u{a6}',
        "ccedil" => '\u{e7}',
        "cedil" => '\u{b8}',
        "cent" => '\u{a2}',
        "copy" => '\u{a9}',
        "curren" => '\u{a4}',
        "deg" => '\u{b0}',
        "divide" => '\u{f7}',
        "eacute" => '\u{e9}',
        "ecirc" => '\u{ea}',
        "egrave" => '\u{e8}',
        "eth" => '\u{f0}',
        "euml" => '\u{eb}',
        "frac12" => '\u{bd}',
        "frac14" => '\u{bc}',
        "frac34" => '\u{be}',
        "gt" => '\u{3e}',
        "iacute" => '\u{ed}',
        "icirc" => '\u{ee}',
        "iexcl" => '\u{a1}',
        "igrave" => '\u{ec}',
        "iquest" => '\u{bf}',
        "iuml" => '\u{ef}',
        "laquo" => '\u{ab}',
        "lt" => '\u{3c}',
        "macr" => '\u{af}',
        "micro" => '\u{b5}',
        "middot" => '\u{b7}',
        "nbsp" => '\u{a0}',
        "not" => '\u{ac}',
        "ntilde" => '\u{f1}',
        "oacute" => '\u{f3}',
        "ocirc" => '\u{f4}',
        "ograve" => '\u{f2}',
        "ordf" => '\u{aa}',
        "ordm" => '\u{ba}',
        "oslash" => '\u{f8}',
        "otilde" => '\u{f5}',
        "ouml" => '\u{f6}',
        "para" => '\u{b6}',
        "plusmn" => '\u{b1}',
        "pound" => '\u{a3}',
        "quot" => '\u{22}',
        "raquo" => '\u{bb}',
        "reg" => '\u{ae}',
        "sect" => '\u{a7}',
        "shy" => '\u{ad}',
        "sup1" => '\u{b9}',
        "sup2" => '\u{b2}',
        "sup3" => '\u{b3}',
        "szlig" => '\u{df}',
        "thorn" => '\u{fe}',
        "times" => '\u{d7}',
        "uacute" => '\u{fa}',
        "ucirc" => '\u{fb}',
        "ugrave" => '\u{f9}',
        "uml" => '\u{a8}',
        "uuml" => '\u{fc}',
        "yacute" => '\u{fd}',
        "yen" => '\u{a5}',
        "yuml" => '\u{ff}',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        let filter = HtmlEntityCharFilter::new();
        assert_eq!(filter.filter("salt &amp; sugar"), "salt & sugar");
        assert_eq!(filter.filter("&quot;tired&quot;"), "\"tired\"");
        assert_eq!(filter.filter("caf&eacute;"), "caf\u{e9}");
    }

    #[test]
    fn test_numeric_entities() {
        let filter = HtmlEntityCharFilter::new();
        assert_eq!(filter.filter("I&#039;m dizzy"), "I'm dizzy");
        assert_eq!(filter.filter("I&#x27;m dizzy"), "I'm dizzy");
        assert_eq!(filter.filter("I&#39m dizzy"), "I'm dizzy");
        assert_eq!(filter.filter("&#0;"), "\u{fffd}");
    }

    #[test]
    fn test_legacy_entities_without_semicolon() {
        let filter = HtmlEntityCharFilter::new();
        assert_eq!(filter.filter("salt &amp sugar"), "salt & sugar");
        assert_eq!(filter.filter("pressure &gt 140"), "pressure > 140");
        assert_eq!(filter.filter("&notit"), "\u{ac}it");
        assert_eq!(filter.filter("&COPY 2024"), "\u{a9} 2024");
    }

    #[test]
    fn test_single_pass() {
        let filter = HtmlEntityCharFilter::new();
        assert_eq!(filter.filter("&amp;lt;"), "&lt;");
        assert_eq!(filter.filter("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_unknown_references_are_kept() {
        let filter = HtmlEntityCharFilter::new();
        assert_eq!(filter.filter("AT&T"), "AT&T");
        assert_eq!(filter.filter("&bogus; & &#x;"), "&bogus; & &#x;");
        assert_eq!(filter.filter("trailing &"), "trailing &");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let filter = HtmlEntityCharFilter::new();
        assert_eq!(filter.filter("no entities here"), "no entities here");
        assert_eq!(filter.name(), "html_entity");
    }
}
