//! Markup helpers shared by the components.

use crate::domain::Glyph;

/// Escape text for use in HTML content and double-quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Build a ` class="..."` attribute from class fragments, skipping empty ones.
/// Returns an empty string when nothing remains.
pub fn class_attr(classes: &[&str]) -> String {
    let joined = classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", escape_html(&joined))
    }
}

/// Placeholder element the lucide runtime swaps for an SVG.
pub fn glyph(glyph: Glyph, classes: &[&str]) -> String {
    format!(
        "<i data-lucide=\"{}\"{} aria-hidden=\"true\"></i>",
        glyph.lucide_name(),
        class_attr(classes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_leaves_plain_text() {
        assert_eq!(escape_html("*.acme.com"), "*.acme.com");
    }

    #[test]
    fn test_class_attr_skips_empty() {
        assert_eq!(class_attr(&["", "  "]), "");
        assert_eq!(class_attr(&["h-3 w-3", "", "text-green-400"]), " class=\"h-3 w-3 text-green-400\"");
    }

    #[test]
    fn test_glyph_markup() {
        assert_eq!(
            glyph(Glyph::FileCheck, &["h-3 w-3"]),
            "<i data-lucide=\"file-check\" class=\"h-3 w-3\" aria-hidden=\"true\"></i>"
        );
        assert_eq!(
            glyph(Glyph::Bug, &[]),
            "<i data-lucide=\"bug\" aria-hidden=\"true\"></i>"
        );
    }
}
