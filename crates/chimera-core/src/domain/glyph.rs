//! Glyph references into the lucide icon set.

use serde::{Deserialize, Serialize};

/// An icon the dashboard can reference. Drawing is left to the host's icon kit;
/// the renderer only emits the lucide name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Bot,
    Bug,
    CircleDot,
    DollarSign,
    FileCheck,
    FileText,
    LayoutDashboard,
    Power,
    Settings,
    ShieldAlert,
    Target,
    Terminal,
}

impl Glyph {
    /// Lucide icon name (`data-lucide` attribute value).
    pub fn lucide_name(&self) -> &'static str {
        match self {
            Glyph::Bot => "bot",
            Glyph::Bug => "bug",
            Glyph::CircleDot => "circle-dot",
            Glyph::DollarSign => "dollar-sign",
            Glyph::FileCheck => "file-check",
            Glyph::FileText => "file-text",
            Glyph::LayoutDashboard => "layout-dashboard",
            Glyph::Power => "power",
            Glyph::Settings => "settings",
            Glyph::ShieldAlert => "shield-alert",
            Glyph::Target => "target",
            Glyph::Terminal => "terminal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_name_matches_lucide_name() {
        for glyph in [Glyph::DollarSign, Glyph::LayoutDashboard, Glyph::ShieldAlert] {
            let raw = serde_json::to_value(glyph).unwrap();
            assert_eq!(raw, glyph.lucide_name());
        }
    }
}
