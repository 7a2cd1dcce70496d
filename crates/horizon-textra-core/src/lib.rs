//! Core systems for Horizon Textra.
//!
//! This crate provides the small foundation shared by the font and widget
//! crates:
//!
//! - **Signal/Slot System**: Type-safe change notification for widgets
//! - **Lifecycle**: Pause/resume/dispose hooks for long-lived resource owners
//! - **Logging**: `tracing` targets and span names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_textra_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod lifecycle;
pub mod logging;
pub mod signal;

pub use error::{CoreError, Result, SignalError};
pub use lifecycle::{Lifecycle, LifecycleListener};
pub use logging::LoadTimer;
pub use signal::{ConnectionId, Signal};
