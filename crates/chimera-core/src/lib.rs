//! CHIMERA-HUNTER dashboard core.
//!
//! Typed view model plus a pure HTML renderer for the operations dashboard.

pub mod digest;
pub mod domain;
pub mod obs;
pub mod reporting;
pub mod telemetry;
pub mod ui;

pub use domain::{
    ChangeType, ChimeraError, DashboardSnapshot, Glyph, LogCategory, LogEntry, Result,
    StatDescriptor, Target, TargetStatus, ValidationError, STAT_GRID_WIDTH,
};

pub use digest::render_digest;
pub use obs::{emit_snapshot_validated, RenderSpan};
pub use reporting::{read_snapshot_json, write_html, write_snapshot_json};
pub use telemetry::init_tracing;
pub use ui::{
    category_icon, render_activity_log, render_header, render_sidebar, render_stat_card,
    render_targets_table, CategoryIcon, ChimeraTheme, Dashboard, Listing, PlainTheme, Slot,
    Theme, Tone, FALLBACK_ICON, NO_ACTIVITY_MESSAGE, NO_TARGETS_MESSAGE,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
