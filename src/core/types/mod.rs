//! Core type definitions
//!
//! Geometry with native layout, typed handles, window snapshots and the
//! error type shared by every binding.

mod error;
mod geometry;
mod handles;
mod window_info;

// Re-export all public types
pub use error::{BindingError, BindingResult};
pub use geometry::{Bounds, Point, Rect};
pub use handles::{MonitorHandle, WindowHandle};
pub use window_info::WindowInfo;

// Common type aliases
pub type ProcessId = u32;
