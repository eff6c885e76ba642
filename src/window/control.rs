//! Window control pass-throughs
//!
//! Thin typed wrappers over the user32 calls that change or inspect a
//! window's state. Failures are returned, never swallowed.

use super::options::{
    InsertAfter, LayeredAttributes, MonitorFallback, PositionFlags, ShowCommand, WindowLongIndex,
    WindowRelation,
};
use crate::core::types::{BindingResult, Bounds, MonitorHandle, Rect, WindowHandle};
use crate::windows::bindings::user32;
use tracing::debug;

/// Whether `window` still identifies a live window
pub fn is_window(window: WindowHandle) -> bool {
    user32::is_window(window)
}

/// Window related to `window` in the Z order or ownership chain
pub fn related_window(window: WindowHandle, relation: WindowRelation) -> Option<WindowHandle> {
    user32::get_window(window, relation.raw())
}

/// Returns whether the window was visible before the call
pub fn show_window(window: WindowHandle, command: ShowCommand) -> bool {
    debug!(%window, ?command, "show window");
    user32::show_window(window, command.raw())
}

/// Move, resize or re-order `window` in one call
pub fn set_window_pos(
    window: WindowHandle,
    insert_after: InsertAfter,
    bounds: Bounds,
    flags: PositionFlags,
) -> BindingResult<()> {
    debug!(%window, %bounds, flags = flags.value(), "set window position");
    user32::set_window_pos(
        window,
        insert_after.raw(),
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        flags.value(),
    )
}

pub fn move_window(window: WindowHandle, bounds: Bounds, repaint: bool) -> BindingResult<()> {
    debug!(%window, %bounds, "move window");
    user32::move_window(window, bounds.x, bounds.y, bounds.width, bounds.height, repaint)
}

/// Ask the OS to bring `window` to the foreground. The OS refuses when
/// the calling process is not allowed to steal focus.
pub fn set_foreground_window(window: WindowHandle) -> bool {
    let granted = user32::set_foreground_window(window);
    if !granted {
        debug!(%window, "foreground change refused");
    }
    granted
}

pub fn window_long_ptr(window: WindowHandle, index: WindowLongIndex) -> BindingResult<isize> {
    user32::get_window_long_ptr(window, index.raw())
}

/// Returns the previous value
pub fn set_window_long_ptr(
    window: WindowHandle,
    index: WindowLongIndex,
    value: isize,
) -> BindingResult<isize> {
    debug!(%window, ?index, value, "set window long");
    user32::set_window_long_ptr(window, index.raw(), value)
}

/// Transparency of a layered window. Fails when the window lacks
/// `WS_EX_LAYERED` or its attributes were set with UpdateLayeredWindow.
pub fn layered_attributes(window: WindowHandle) -> BindingResult<LayeredAttributes> {
    let (color_key, alpha, flags) = user32::get_layered_window_attributes(window)?;
    Ok(LayeredAttributes {
        color_key,
        alpha,
        flags,
    })
}

pub fn set_layered_attributes(
    window: WindowHandle,
    attributes: LayeredAttributes,
) -> BindingResult<()> {
    debug!(%window, ?attributes, "set layered attributes");
    user32::set_layered_window_attributes(
        window,
        attributes.color_key,
        attributes.alpha,
        attributes.flags,
    )
}

pub fn monitor_from_window(
    window: WindowHandle,
    fallback: MonitorFallback,
) -> Option<MonitorHandle> {
    user32::monitor_from_window(window, fallback.raw())
}

/// Window rectangle needed to hold `client` with the given style
pub fn adjust_window_rect(client: Rect, style: u32, has_menu: bool) -> BindingResult<Rect> {
    user32::adjust_window_rect(client, style, has_menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BindingError;

    fn bogus_window() -> WindowHandle {
        WindowHandle::from_raw(0x0DEA_D000).unwrap()
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_control_on_dead_window_fails() {
        let window = bogus_window();
        assert!(!is_window(window));
        assert!(related_window(window, WindowRelation::Owner).is_none());
        assert!(monitor_from_window(window, MonitorFallback::Null).is_none());

        let result = set_window_pos(
            window,
            InsertAfter::Top,
            Bounds::new(0, 0, 100, 100),
            PositionFlags::NO_Z_ORDER | PositionFlags::NO_ACTIVATE,
        );
        assert!(matches!(
            result,
            Err(BindingError::InvalidHandle(_)) | Err(BindingError::WindowsApi(_))
        ));
        assert!(move_window(window, Bounds::new(0, 0, 10, 10), false).is_err());
        assert!(window_long_ptr(window, WindowLongIndex::Style).is_err());
        assert!(layered_attributes(window).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_monitor_nearest_for_active_window() {
        if let Some(window) = super::super::query::active_window() {
            assert!(monitor_from_window(window, MonitorFallback::Nearest).is_some());
        }
    }
}
