//! Static chrome: the icon sidebar and the page header.
//!
//! Neither takes data. Links point at `#` and the EXECUTE HUNT button has no
//! handler; both are decoration until a hunt runner exists.

use crate::domain::Glyph;

use super::html::{class_attr, glyph};
use super::theme::{Slot, Theme};

pub const PRODUCT_NAME: &str = "CHIMERA-HUNTER";

pub const MISSION: &str = "MISSION: AUTOMATE REAL-MONEY BUG BOUNTIES";

pub const STATUS_LABEL: &str = "SYSTEM ONLINE";

pub const EXECUTE_LABEL: &str = "EXECUTE HUNT";

/// A sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub glyph: Glyph,
    pub label: &'static str,
    pub active: bool,
}

pub const PRIMARY_NAV: [NavItem; 4] = [
    NavItem {
        glyph: Glyph::LayoutDashboard,
        label: "Dashboard",
        active: true,
    },
    NavItem {
        glyph: Glyph::Target,
        label: "Targets",
        active: false,
    },
    NavItem {
        glyph: Glyph::ShieldAlert,
        label: "Findings",
        active: false,
    },
    NavItem {
        glyph: Glyph::FileText,
        label: "Reports",
        active: false,
    },
];

pub const FOOTER_NAV: [NavItem; 1] = [NavItem {
    glyph: Glyph::Settings,
    label: "Settings",
    active: false,
}];

fn render_nav_item(item: &NavItem, theme: &dyn Theme) -> String {
    let slot = if item.active {
        Slot::NavLinkActive
    } else {
        Slot::NavLink
    };
    let current = if item.active {
        " aria-current=\"page\""
    } else {
        ""
    };
    format!(
        "<a href=\"#\"{} title=\"{label}\"{}>{}<span{}>{label}</span></a>\n",
        class_attr(&[theme.class(slot)]),
        current,
        glyph(item.glyph, &[theme.class(Slot::NavGlyph)]),
        class_attr(&[theme.class(Slot::ScreenReaderOnly)]),
        label = item.label,
    )
}

/// Narrow icon rail: brand mark, primary nav, settings pinned to the bottom.
pub fn render_sidebar(theme: &dyn Theme) -> String {
    let mut html = String::new();
    html.push_str(&format!("<aside{}>\n", class_attr(&[theme.class(Slot::Sidebar)])));

    html.push_str(&format!("<nav{}>\n", class_attr(&[theme.class(Slot::SidebarNav)])));
    html.push_str(&format!(
        "<a href=\"#\"{} title=\"{name}\">{}<span{}>{name}</span></a>\n",
        class_attr(&[theme.class(Slot::BrandLink)]),
        glyph(Glyph::Bug, &[theme.class(Slot::BrandGlyph)]),
        class_attr(&[theme.class(Slot::ScreenReaderOnly)]),
        name = PRODUCT_NAME,
    ));
    for item in &PRIMARY_NAV {
        html.push_str(&render_nav_item(item, theme));
    }
    html.push_str("</nav>\n");

    html.push_str(&format!(
        "<nav{}>\n",
        class_attr(&[theme.class(Slot::SidebarFooterNav)])
    ));
    for item in &FOOTER_NAV {
        html.push_str(&render_nav_item(item, theme));
    }
    html.push_str("</nav>\n");

    html.push_str("</aside>\n");
    html
}

/// Title block, the always-on status pill and the EXECUTE HUNT button.
pub fn render_header(theme: &dyn Theme) -> String {
    let mut html = String::new();
    html.push_str(&format!("<header{}>\n", class_attr(&[theme.class(Slot::Header)])));
    html.push_str(&format!(
        "<div><h1{}>{}</h1><p{}>{}</p></div>\n",
        class_attr(&[theme.class(Slot::HeaderTitle)]),
        PRODUCT_NAME,
        class_attr(&[theme.class(Slot::HeaderMission)]),
        MISSION
    ));
    html.push_str(&format!(
        "<div{}>\n",
        class_attr(&[theme.class(Slot::HeaderActions)])
    ));
    html.push_str(&format!(
        "<div{} role=\"status\">{}<span>{}</span></div>\n",
        class_attr(&[theme.class(Slot::StatusPill)]),
        glyph(Glyph::Power, &[theme.class(Slot::StatusGlyph)]),
        STATUS_LABEL
    ));
    html.push_str(&format!(
        "<button type=\"button\"{}>{}{}</button>\n",
        class_attr(&[theme.class(Slot::ExecuteButton)]),
        glyph(Glyph::Bot, &[theme.class(Slot::ExecuteGlyph)]),
        EXECUTE_LABEL
    ));
    html.push_str("</div>\n</header>\n");
    html
}
