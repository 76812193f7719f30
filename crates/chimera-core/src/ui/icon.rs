//! Category → icon mapping for the activity stream.

use crate::domain::{Glyph, LogCategory};

use super::theme::Tone;

/// Glyph and accent color drawn next to a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryIcon {
    pub glyph: Glyph,
    pub tone: Tone,
}

/// Icon used for any category outside the known six.
pub const FALLBACK_ICON: CategoryIcon = CategoryIcon {
    glyph: Glyph::CircleDot,
    tone: Tone::Gray,
};

/// Total over all categories; unknown tags get [`FALLBACK_ICON`].
pub fn category_icon(category: &LogCategory) -> CategoryIcon {
    let (glyph, tone) = match category {
        LogCategory::Submit => (Glyph::FileCheck, Tone::Green),
        LogCategory::Ai => (Glyph::Bot, Tone::Purple),
        LogCategory::Vuln => (Glyph::ShieldAlert, Tone::Red),
        LogCategory::Scan => (Glyph::CircleDot, Tone::Cyan),
        LogCategory::Recon => (Glyph::Target, Tone::Blue),
        LogCategory::Init => (Glyph::Power, Tone::Yellow),
        LogCategory::Unrecognized(_) => return FALLBACK_ICON,
    };
    CategoryIcon { glyph, tone }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_mapping() {
        let cases = [
            ("submit", Glyph::FileCheck, Tone::Green),
            ("ai", Glyph::Bot, Tone::Purple),
            ("vuln", Glyph::ShieldAlert, Tone::Red),
            ("scan", Glyph::CircleDot, Tone::Cyan),
            ("recon", Glyph::Target, Tone::Blue),
            ("init", Glyph::Power, Tone::Yellow),
        ];
        for (tag, glyph, tone) in cases {
            assert_eq!(
                category_icon(&LogCategory::parse(tag)),
                CategoryIcon { glyph, tone },
                "category {tag}"
            );
        }
    }

    #[test]
    fn test_unknown_category_uses_fallback() {
        for tag in ["", "INIT", "exploit", "submit "] {
            assert_eq!(category_icon(&LogCategory::parse(tag)), FALLBACK_ICON);
        }
    }

    #[test]
    fn test_scan_and_fallback_differ_only_by_tone() {
        let scan = category_icon(&LogCategory::Scan);
        assert_eq!(scan.glyph, FALLBACK_ICON.glyph);
        assert_ne!(scan.tone, FALLBACK_ICON.tone);
    }
}
