//! Modules d'export (KML, GeoJSON)

pub mod geojson;
pub mod kml;

/// Échappe une chaîne pour JSON
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}

/// Échappe une chaîne pour un nœud texte XML
pub(crate) fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("hello"), "hello");
        assert_eq!(escape_json("lot \"A\""), "lot \\\"A\\\"");
        assert_eq!(escape_json("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_json("\u{1}"), "\\u0001");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Lot <7> & co"), "Lot &lt;7&gt; &amp; co");
        assert_eq!(escape_xml("قطعة"), "قطعة");
    }
}
