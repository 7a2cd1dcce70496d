//! Logging facilities for Horizon Textra.
//!
//! Horizon Textra uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Your application code...
//! }
//! ```
//!
//! Every event emitted by the workspace uses one of the [`targets`] below, so
//! a filter such as `RUST_LOG=horizon_textra_font::atlas=debug` narrows output
//! to a single subsystem.

/// Span names used throughout Horizon Textra for tracing.
pub mod span_names {
    /// Font load span (one per file-format load).
    pub const FONT_LOAD: &str = "horizon_textra::font_load";
    /// Atlas attachment span.
    pub const ATLAS_ATTACH: &str = "horizon_textra::atlas_attach";
    /// Lifecycle shutdown span.
    pub const SHUTDOWN: &str = "horizon_textra::shutdown";
}

/// Target names for log filtering.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "horizon_textra_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_textra_core::signal";
    /// Application lifecycle target.
    pub const LIFECYCLE: &str = "horizon_textra_core::lifecycle";
    /// Texture and atlas page loading.
    pub const RENDER: &str = "horizon_textra_render";
    /// Font registry and format loaders.
    pub const FONT: &str = "horizon_textra_font";
    /// Emoji and icon atlas attachment.
    pub const ATLAS: &str = "horizon_textra_font::atlas";
    /// Widget adapters.
    pub const WIDGET: &str = "horizon_textra::widget";
    /// Markup scanning.
    pub const MARKUP: &str = "horizon_textra::markup";
}

/// A lightweight timing guard that logs elapsed time at `debug` level when
/// dropped.
///
/// ```ignore
/// let _timer = LoadTimer::new("Gentium-sdf");
/// // ... load the font ...
/// ```
#[derive(Debug)]
pub struct LoadTimer {
    label: String,
    start: std::time::Instant,
}

impl LoadTimer {
    /// Start timing an operation with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: std::time::Instant::now(),
        }
    }

    /// Elapsed time so far.
    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for LoadTimer {
    fn drop(&mut self) {
        tracing::debug!(
            target: targets::FONT,
            label = %self.label,
            elapsed_us = self.start.elapsed().as_micros() as u64,
            "load finished"
        );
    }
}
