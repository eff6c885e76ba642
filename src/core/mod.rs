//! Core module containing the types shared across the bindings
//!
//! Geometry, handles, window snapshots and errors live here. Nothing in
//! this module calls into the OS.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    BindingError, BindingResult, Bounds, MonitorHandle, Point, ProcessId, Rect, WindowHandle,
    WindowInfo,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[cfg(all(windows, not(target_pointer_width = "64")))]
compile_error!("window-bindings requires a 64-bit Windows target");
