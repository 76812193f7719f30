//! Live activity stream.

use crate::domain::LogEntry;
use crate::obs;

use super::card::render_card;
use super::html::{class_attr, escape_html, glyph};
use super::icon::category_icon;
use super::listing::Listing;
use super::theme::{Slot, Theme};

pub const ACTIVITY_TITLE: &str = "LIVE ACTIVITY STREAM";

pub const NO_ACTIVITY_MESSAGE: &str = "Awaiting system activity...";

/// Render entries top-to-bottom in input order, or the centered placeholder
/// when there are none.
pub fn render_activity_log(entries: &[LogEntry], theme: &dyn Theme) -> String {
    let mut body = String::new();
    body.push_str(&format!("<div{}>\n", class_attr(&[theme.class(Slot::LogList)])));
    match Listing::of(entries) {
        Listing::Empty => body.push_str(&format!(
            "<div{} data-kind=\"log-empty\"><p>{}</p></div>\n",
            class_attr(&[theme.class(Slot::LogEmpty)]),
            NO_ACTIVITY_MESSAGE
        )),
        Listing::Populated(rows) => {
            for entry in rows {
                body.push_str(&render_entry(entry, theme));
            }
        }
    }
    body.push_str("</div>\n");

    render_card(ACTIVITY_TITLE, &body, theme)
}

fn render_entry(entry: &LogEntry, theme: &dyn Theme) -> String {
    if !entry.category.is_recognized() {
        obs::emit_category_fallback(entry.category.as_str());
    }
    let icon = category_icon(&entry.category);
    format!(
        "<div{} data-kind=\"log-entry\" data-category=\"{}\"><span{}>{}</span><span{}>{}</span><p{}>{}</p></div>\n",
        class_attr(&[theme.class(Slot::LogRow)]),
        escape_html(entry.category.as_str()),
        class_attr(&[theme.class(Slot::LogGlyphWrap)]),
        glyph(icon.glyph, &[theme.class(Slot::LogGlyph), theme.tone(icon.tone)]),
        class_attr(&[theme.class(Slot::LogTime)]),
        escape_html(&entry.time),
        class_attr(&[theme.class(Slot::LogMessage)]),
        escape_html(&entry.message)
    )
}
