//! View-model types for the dashboard.
//!
//! - `Target`: a program in the operations table
//! - `LogEntry`: a line of the activity stream
//! - `StatDescriptor`: one card of the stat grid
//! - `DashboardSnapshot`: the three of them bundled for a render

pub mod error;
pub mod glyph;
pub mod log_entry;
pub mod snapshot;
pub mod stat;
pub mod target;

pub use error::{ChimeraError, Result, ValidationError};
pub use glyph::Glyph;
pub use log_entry::{LogCategory, LogEntry};
pub use snapshot::{DashboardSnapshot, STAT_GRID_WIDTH};
pub use stat::{ChangeType, StatDescriptor};
pub use target::{Target, TargetStatus};
