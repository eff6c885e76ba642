//! Window-bindings library: foreground window, process and cursor queries
//! for Windows

pub mod capability;
pub mod config;
pub mod core;
pub mod process;
pub mod window;
pub mod windows;

// Re-export main types from core module
pub use crate::core::types::{
    BindingError, BindingResult, Bounds, MonitorHandle, Point, ProcessId, Rect, WindowHandle,
    WindowInfo,
};

pub use capability::{Capabilities, OsVersion};

#[cfg(windows)]
pub use process::{get_process_handle, process_path, try_process_path};
#[cfg(windows)]
pub use window::{
    active_window, cursor_position, process_id, window_bounds, window_content_bounds,
    window_title, Snapshotter,
};

pub use crate::core::{AUTHORS, VERSION};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(AUTHORS, env!("CARGO_PKG_AUTHORS"));
    }

    #[test]
    fn test_geometry_reexport() {
        let rect = Rect::new(10, 20, 110, 70);
        let bounds = Bounds::from(rect);
        assert_eq!(bounds, Bounds::new(10, 20, 100, 50));
        assert_eq!(Point::default(), Point::new(0, 0));
    }

    #[test]
    fn test_handle_reexport() {
        assert!(WindowHandle::from_raw(0).is_none());
        let window = WindowHandle::from_raw(0x1234).unwrap();
        assert_eq!(WindowInfo::new(window).handle, window);
    }

    #[test]
    fn test_error_reexport() {
        let result: BindingResult<ProcessId> = Err(BindingError::ProcessNotFound(42));
        assert!(result.unwrap_err().to_string().contains("42"));
    }

    #[test]
    fn test_capability_reexport() {
        let caps = Capabilities::without_scaling(OsVersion::new(6, 1));
        assert!(!caps.has_shell_scaling());
    }
}
