//! Top-level window enumeration

use super::control::is_window;
use crate::core::types::{BindingResult, WindowHandle};
use crate::windows::bindings::user32;

/// Every top-level window, front to back in Z order.
///
/// The list is a snapshot: entries may be destroyed before the caller
/// gets to them.
pub fn top_level_windows() -> BindingResult<Vec<WindowHandle>> {
    user32::enum_windows()
}

/// Top-level windows still alive at the time of the call
pub fn live_top_level_windows() -> BindingResult<Vec<WindowHandle>> {
    let mut windows = top_level_windows()?;
    windows.retain(|window| is_window(*window));
    Ok(windows)
}
