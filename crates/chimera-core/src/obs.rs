//! Structured observability hooks for dashboard renders.
//!
//! Events:
//! - `render.started` / `render.finished` at `debug!` around each render pass
//! - `render.category_fallback` at `debug!` when a log entry's category is unknown
//! - `snapshot.validated` at `info!` after a snapshot passes validation
//!
//! None of these feed back into the rendered output.

use tracing::{debug, info};

/// RAII guard that enters a render-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = RenderSpan::enter("dashboard");
/// // events below carry view = "dashboard"
/// ```
pub struct RenderSpan {
    _span: tracing::span::EnteredSpan,
}

impl RenderSpan {
    pub fn enter(view: &str) -> Self {
        let span = tracing::debug_span!("chimera.render", view = %view);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a render pass is starting with these input sizes.
pub fn emit_render_started(stats: usize, targets: usize, logs: usize) {
    debug!(
        event = "render.started",
        stats = stats,
        targets = targets,
        logs = logs,
    );
}

/// Emit event: a render pass produced `bytes` of markup.
pub fn emit_render_finished(bytes: usize) {
    debug!(event = "render.finished", bytes = bytes);
}

/// Emit event: an unknown log category was drawn with the fallback icon.
pub fn emit_category_fallback(category: &str) {
    debug!(event = "render.category_fallback", category = %category);
}

/// Emit event: a snapshot passed validation.
pub fn emit_snapshot_validated(source: &str, targets: usize, logs: usize) {
    info!(
        event = "snapshot.validated",
        source = %source,
        targets = targets,
        logs = logs,
    );
}
