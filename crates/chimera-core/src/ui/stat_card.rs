//! A single metric card of the stat grid.

use crate::domain::{ChangeType, StatDescriptor};

use super::html::{class_attr, escape_html, glyph};
use super::theme::{Slot, Theme};

/// Theme slot for the change caption.
pub fn change_slot(change_type: ChangeType) -> Slot {
    match change_type {
        ChangeType::Increase => Slot::ChangeIncrease,
        ChangeType::Decrease => Slot::ChangeDecrease,
    }
}

/// Render title, icon, prominent value and the colored change caption.
pub fn render_stat_card(stat: &StatDescriptor, theme: &dyn Theme) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<div{} data-kind=\"stat-card\">\n",
        class_attr(&[theme.class(Slot::Card)])
    ));
    html.push_str(&format!(
        "<div{}><h3{}>{}</h3>{}</div>\n",
        class_attr(&[theme.class(Slot::StatCardHeader)]),
        class_attr(&[theme.class(Slot::StatTitle)]),
        escape_html(&stat.title),
        glyph(stat.icon, &[theme.class(Slot::StatGlyph)])
    ));
    html.push_str(&format!(
        "<div{}><div{}>{}</div><p{} data-change=\"{}\">{}</p></div>\n",
        class_attr(&[theme.class(Slot::CardContent)]),
        class_attr(&[theme.class(Slot::StatValue)]),
        escape_html(&stat.value),
        class_attr(&[theme.class(change_slot(stat.change_type))]),
        stat.change_type,
        escape_html(&stat.change)
    ));
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Glyph;
    use crate::ui::theme::{ChimeraTheme, PlainTheme};

    fn stat(change_type: ChangeType) -> StatDescriptor {
        StatDescriptor::new("ACTIVE HUNTS", "0", Glyph::Target, "Awaiting command", change_type)
    }

    #[test]
    fn test_increase_renders_green() {
        let html = render_stat_card(&stat(ChangeType::Increase), &ChimeraTheme);
        assert!(html.contains(
            "<p class=\"text-xs text-green-400\" data-change=\"increase\">Awaiting command</p>"
        ));
        assert!(!html.contains("text-red-400"));
    }

    #[test]
    fn test_decrease_renders_red() {
        let html = render_stat_card(&stat(ChangeType::Decrease), &ChimeraTheme);
        assert!(html.contains(
            "<p class=\"text-xs text-red-400\" data-change=\"decrease\">Awaiting command</p>"
        ));
        assert!(!html.contains("text-green-400"));
    }

    #[test]
    fn test_shows_title_icon_and_value() {
        let html = render_stat_card(
            &StatDescriptor::new(
                "POTENTIAL EARNINGS (24H)",
                "$0",
                Glyph::DollarSign,
                "System Idle",
                ChangeType::Increase,
            ),
            &PlainTheme,
        );
        assert!(html.contains("<h3>POTENTIAL EARNINGS (24H)</h3>"));
        assert!(html.contains("data-lucide=\"dollar-sign\""));
        assert!(html.contains("<div>$0</div>"));
    }
}
