//! Operations table: one row per hunting target.

use crate::domain::{Glyph, Target};

use super::card::render_card;
use super::html::{class_attr, escape_html, glyph};
use super::listing::Listing;
use super::theme::{Slot, Theme};

pub const TARGETS_TITLE: &str = "REAL-TIME HUNTING OPERATIONS";

/// Header labels; the last column holds the row action.
pub const TARGET_COLUMNS: [&str; 4] = ["Target Program", "Scope", "Current Status", "Action"];

pub const NO_TARGETS_MESSAGE: &str = "No active hunting operations. Execute a hunt to begin.";

/// Render the table card. The header is the same for every input; only the
/// body switches between target rows and the single placeholder row.
pub fn render_targets_table(targets: &[Target], theme: &dyn Theme) -> String {
    let mut body = String::new();
    body.push_str(&format!("<table{}>\n", class_attr(&[theme.class(Slot::Table)])));
    body.push_str(&render_head(theme));
    body.push_str("<tbody>\n");
    match Listing::of(targets) {
        Listing::Empty => body.push_str(&render_empty_row(theme)),
        Listing::Populated(rows) => {
            for target in rows {
                body.push_str(&render_target_row(target, theme));
            }
        }
    }
    body.push_str("</tbody>\n</table>\n");

    render_card(TARGETS_TITLE, &body, theme)
}

fn render_head(theme: &dyn Theme) -> String {
    let last = TARGET_COLUMNS.len() - 1;
    let cells: String = TARGET_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let slot = if i == last {
                Slot::TableHeadAction
            } else {
                Slot::TableHead
            };
            format!("<th{}>{}</th>", class_attr(&[theme.class(slot)]), label)
        })
        .collect();
    format!(
        "<thead>\n<tr{}>{}</tr>\n</thead>\n",
        class_attr(&[theme.class(Slot::TableHeadRow)]),
        cells
    )
}

fn render_target_row(target: &Target, theme: &dyn Theme) -> String {
    // The action button is inert: no handler, no form.
    format!(
        "<tr{} data-kind=\"target-row\"><td{}>{}</td><td{}>{}</td><td{}><span{}>{}</span></td><td{}><button type=\"button\"{} title=\"Open terminal\">{}</button></td></tr>\n",
        class_attr(&[theme.class(Slot::TableRow)]),
        class_attr(&[theme.class(Slot::CellName)]),
        escape_html(&target.name),
        class_attr(&[theme.class(Slot::CellScope)]),
        escape_html(&target.scope),
        class_attr(&[theme.class(Slot::CellStatus)]),
        class_attr(&[theme.class(Slot::StatusBadge)]),
        target.status,
        class_attr(&[theme.class(Slot::CellAction)]),
        class_attr(&[theme.class(Slot::ActionButton)]),
        glyph(Glyph::Terminal, &[theme.class(Slot::ActionGlyph)])
    )
}

fn render_empty_row(theme: &dyn Theme) -> String {
    format!(
        "<tr data-kind=\"empty-row\"><td colspan=\"{}\"{}>{}</td></tr>\n",
        TARGET_COLUMNS.len(),
        class_attr(&[theme.class(Slot::EmptyCell)]),
        NO_TARGETS_MESSAGE
    )
}
