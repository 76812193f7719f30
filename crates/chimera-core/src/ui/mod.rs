//! HTML rendering of the dashboard.
//!
//! Every `render_*` function is pure: output depends only on its arguments.

pub mod activity_log;
pub mod card;
pub mod chrome;
pub mod dashboard;
pub mod html;
pub mod icon;
pub mod listing;
pub mod stat_card;
pub mod targets_table;
pub mod theme;

pub use activity_log::{render_activity_log, ACTIVITY_TITLE, NO_ACTIVITY_MESSAGE};
pub use chrome::{render_header, render_sidebar};
pub use dashboard::Dashboard;
pub use icon::{category_icon, CategoryIcon, FALLBACK_ICON};
pub use listing::Listing;
pub use stat_card::render_stat_card;
pub use targets_table::{render_targets_table, NO_TARGETS_MESSAGE, TARGETS_TITLE, TARGET_COLUMNS};
pub use theme::{ChimeraTheme, PlainTheme, Slot, Theme, Tone};
