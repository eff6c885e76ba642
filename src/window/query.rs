//! Window queries with sentinel results
//!
//! These are the boundary operations: a failed OS call never surfaces as
//! an error here but as `None`, an empty string, zeroed bounds or pid 0.
//! Callers must treat those as "unknown". The result-typed calls live in
//! `windows::bindings::user32`.

use crate::core::types::{Bounds, Point, ProcessId, Rect, WindowHandle};
use crate::windows::bindings::user32;
use tracing::debug;

/// Foreground window, `None` when no window is active
pub fn active_window() -> Option<WindowHandle> {
    user32::get_foreground_window()
}

/// Window title; empty for untitled or invalid windows
pub fn window_title(window: WindowHandle) -> String {
    user32::get_window_text(window).unwrap_or_else(|err| {
        debug!(%window, error = %err, "window title unavailable");
        String::new()
    })
}

/// Window rectangle in screen coordinates; zeroed if the query failed.
///
/// The window is not checked for liveness first.
pub fn window_bounds(window: WindowHandle) -> Bounds {
    let rect = user32::get_window_rect(window).unwrap_or_else(|err| {
        debug!(%window, error = %err, "window bounds unavailable");
        Rect::default()
    });
    Bounds::from_rect(&rect)
}

/// Client area with its origin translated to screen coordinates; zeroed
/// if either query failed.
pub fn window_content_bounds(window: WindowHandle) -> Bounds {
    let content = user32::get_client_rect(window).and_then(|client| {
        let origin = user32::client_to_screen(window, client.origin())?;
        Ok(Bounds::from_client(origin, &client))
    });

    content.unwrap_or_else(|err| {
        debug!(%window, error = %err, "window content bounds unavailable");
        Bounds::default()
    })
}

/// Id of the process owning `window`; 0 if the lookup failed
pub fn process_id(window: WindowHandle) -> ProcessId {
    match user32::get_window_thread_process_id(window) {
        Ok((_thread_id, pid)) => pid,
        Err(err) => {
            debug!(%window, error = %err, "window process id unavailable");
            0
        }
    }
}

/// Cursor position in screen coordinates. GetCursorPos only fails without
/// an interactive desktop; the origin is returned then.
pub fn cursor_position() -> Point {
    user32::get_cursor_pos().unwrap_or_else(|err| {
        debug!(error = %err, "cursor position unavailable");
        Point::default()
    })
}
