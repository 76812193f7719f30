//! Root composition: sidebar, header, stat grid, table and activity stream.

use crate::domain::DashboardSnapshot;
use crate::obs::{self, RenderSpan};

use super::activity_log::render_activity_log;
use super::chrome::{render_header, render_sidebar, PRODUCT_NAME};
use super::html::class_attr;
use super::stat_card::render_stat_card;
use super::targets_table::render_targets_table;
use super::theme::{Slot, Theme};

/// The dashboard screen. Holds no state beyond the snapshot it was given.
pub struct Dashboard<'t> {
    snapshot: DashboardSnapshot,
    theme: &'t dyn Theme,
}

impl<'t> Dashboard<'t> {
    pub fn new(snapshot: DashboardSnapshot, theme: &'t dyn Theme) -> Self {
        Self { snapshot, theme }
    }

    /// The idle screen with literal placeholder values.
    pub fn placeholder(theme: &'t dyn Theme) -> Self {
        Self::new(DashboardSnapshot::placeholder(), theme)
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    /// Render the page body without the document shell.
    pub fn render_fragment(&self) -> String {
        let _span = RenderSpan::enter("dashboard");
        obs::emit_render_started(
            self.snapshot.stats.len(),
            self.snapshot.targets.len(),
            self.snapshot.logs.len(),
        );

        let theme = self.theme;
        let mut html = String::new();
        html.push_str(&format!("<div{}>\n", class_attr(&[theme.class(Slot::Page)])));
        html.push_str(&render_sidebar(theme));
        html.push_str(&format!("<div{}>\n", class_attr(&[theme.class(Slot::Column)])));
        html.push_str(&render_header(theme));
        html.push_str(&format!("<main{}>\n", class_attr(&[theme.class(Slot::Main)])));

        html.push_str(&format!("<div{}>\n", class_attr(&[theme.class(Slot::StatGrid)])));
        for stat in &self.snapshot.stats {
            html.push_str(&render_stat_card(stat, theme));
        }
        html.push_str("</div>\n");

        html.push_str(&format!("<div{}>\n", class_attr(&[theme.class(Slot::PanelGrid)])));
        html.push_str(&format!("<div{}>\n", class_attr(&[theme.class(Slot::PanelWide)])));
        html.push_str(&render_targets_table(&self.snapshot.targets, theme));
        html.push_str("</div>\n");
        html.push_str(&format!("<div{}>\n", class_attr(&[theme.class(Slot::PanelNarrow)])));
        html.push_str(&render_activity_log(&self.snapshot.logs, theme));
        html.push_str("</div>\n");
        html.push_str("</div>\n");

        html.push_str("</main>\n</div>\n</div>\n");

        obs::emit_render_finished(html.len());
        html
    }

    /// Render a complete HTML5 document around [`render_fragment`](Self::render_fragment).
    pub fn render_document(&self) -> String {
        let head_assets = self.theme.head_assets();
        let body_assets = self.theme.body_assets();
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!("<title>{}</title>\n", PRODUCT_NAME));
        if !head_assets.is_empty() {
            html.push_str(head_assets);
            html.push('\n');
        }
        html.push_str("</head>\n<body>\n");
        html.push_str(&self.render_fragment());
        if !body_assets.is_empty() {
            html.push_str(body_assets);
            html.push('\n');
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{ChimeraTheme, PlainTheme};

    #[test]
    fn test_placeholder_renders_four_cards() {
        let html = Dashboard::placeholder(&PlainTheme).render_fragment();
        assert_eq!(html.matches("data-kind=\"stat-card\"").count(), 4);
        assert!(html.contains("POTENTIAL EARNINGS (24H)"));
        assert!(html.contains("ACTIVE HUNTS"));
    }

    #[test]
    fn test_stat_grid_precedes_panels() {
        let html = Dashboard::placeholder(&PlainTheme).render_fragment();
        let stats = html.find("VULNERABILITIES FOUND (24H)").unwrap();
        let table = html.find("REAL-TIME HUNTING OPERATIONS").unwrap();
        let log = html.find("LIVE ACTIVITY STREAM").unwrap();
        assert!(stats < table && table < log);
    }

    #[test]
    fn test_document_shell_and_assets() {
        let html = Dashboard::placeholder(&ChimeraTheme).render_document();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>CHIMERA-HUNTER</title>"));
        assert!(html.contains("cdn.tailwindcss.com"));
        assert!(html.contains("lucide.createIcons()"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_plain_document_has_no_scripts() {
        let html = Dashboard::placeholder(&PlainTheme).render_document();
        assert!(!html.contains("<script"));
    }
}
