//! User32.dll bindings for window, cursor and monitor queries
//!
//! Every function maps to exactly one user32 entry point. None of them
//! check window liveness first: a handle can die between any two calls,
//! so the OS result is the only truth.

use crate::core::types::{BindingResult, MonitorHandle, Point, Rect, WindowHandle};
use crate::windows::types::WideBuffer;
use crate::windows::utils::error_codes::{ErrorCode, WinError};
use winapi::shared::minwindef::{BOOL, BYTE, DWORD, FALSE, LPARAM, TRUE};
use winapi::shared::windef::{COLORREF, HWND};
use winapi::um::errhandlingapi::SetLastError;
use winapi::um::winuser;

/// Clears the thread's last error so a zero result can be told apart from
/// a legitimate zero value.
fn reset_last_error() {
    // SAFETY: SetLastError only writes thread-local state
    unsafe { SetLastError(0) }
}

fn check(ok: BOOL, call: &'static str) -> BindingResult<()> {
    if ok == FALSE {
        return Err(WinError::new(call).into());
    }
    Ok(())
}

/// GetForegroundWindow
pub fn get_foreground_window() -> Option<WindowHandle> {
    // SAFETY: no arguments
    WindowHandle::from_hwnd(unsafe { winuser::GetForegroundWindow() })
}

/// GetWindowTextLengthW, in UTF-16 units
pub fn get_window_text_length(window: WindowHandle) -> usize {
    // SAFETY: any HWND value is accepted; invalid ones yield 0
    let length = unsafe { winuser::GetWindowTextLengthW(window.hwnd()) };
    usize::try_from(length).unwrap_or(0)
}

/// GetWindowTextW into a buffer sized from GetWindowTextLengthW.
///
/// The buffer gets two spare units: the length can grow between the two
/// calls and the OS always writes a terminator.
pub fn get_window_text(window: WindowHandle) -> BindingResult<String> {
    let mut buffer = WideBuffer::with_capacity(get_window_text_length(window) + 2);

    reset_last_error();
    // SAFETY: the OS writes at most `capacity_i32()` units, terminator included
    let copied =
        unsafe { winuser::GetWindowTextW(window.hwnd(), buffer.as_mut_ptr(), buffer.capacity_i32()) };

    if copied <= 0 {
        let code = ErrorCode::last_error();
        if !code.is_success() {
            return Err(WinError::with_code(code, "GetWindowTextW").into());
        }
        buffer.set_used(0);
    } else {
        buffer.set_used(copied as usize);
    }

    Ok(buffer.to_string_lossy())
}

/// GetWindowThreadProcessId, returning `(thread_id, process_id)`
pub fn get_window_thread_process_id(window: WindowHandle) -> BindingResult<(u32, u32)> {
    let mut pid: DWORD = 0;
    // SAFETY: `pid` outlives the call
    let thread_id = unsafe { winuser::GetWindowThreadProcessId(window.hwnd(), &mut pid) };
    if thread_id == 0 {
        return Err(WinError::new("GetWindowThreadProcessId").into());
    }
    Ok((thread_id, pid))
}

/// GetWindowRect, in screen coordinates
pub fn get_window_rect(window: WindowHandle) -> BindingResult<Rect> {
    let mut rect = Rect::default();
    // SAFETY: Rect has the layout of RECT
    check(
        unsafe { winuser::GetWindowRect(window.hwnd(), rect.as_mut_raw()) },
        "GetWindowRect",
    )?;
    Ok(rect)
}

/// GetClientRect, in client coordinates (left and top are always 0)
pub fn get_client_rect(window: WindowHandle) -> BindingResult<Rect> {
    let mut rect = Rect::default();
    // SAFETY: Rect has the layout of RECT
    check(
        unsafe { winuser::GetClientRect(window.hwnd(), rect.as_mut_raw()) },
        "GetClientRect",
    )?;
    Ok(rect)
}

/// ClientToScreen
pub fn client_to_screen(window: WindowHandle, point: Point) -> BindingResult<Point> {
    let mut point = point;
    // SAFETY: Point has the layout of POINT
    check(
        unsafe { winuser::ClientToScreen(window.hwnd(), point.as_mut_raw()) },
        "ClientToScreen",
    )?;
    Ok(point)
}

/// GetCursorPos
pub fn get_cursor_pos() -> BindingResult<Point> {
    let mut point = Point::default();
    // SAFETY: Point has the layout of POINT
    check(unsafe { winuser::GetCursorPos(point.as_mut_raw()) }, "GetCursorPos")?;
    Ok(point)
}

/// IsWindow
pub fn is_window(window: WindowHandle) -> bool {
    // SAFETY: any HWND value is accepted
    unsafe { winuser::IsWindow(window.hwnd()) != FALSE }
}

/// GetWindow with a raw `GW_*` command
pub fn get_window(window: WindowHandle, command: u32) -> Option<WindowHandle> {
    // SAFETY: any HWND value is accepted; unknown commands yield null
    WindowHandle::from_hwnd(unsafe { winuser::GetWindow(window.hwnd(), command) })
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: `lparam` is the Vec passed by `enum_windows`, alive for the
    // whole enumeration
    let windows = &mut *(lparam as *mut Vec<WindowHandle>);
    if let Some(window) = WindowHandle::from_hwnd(hwnd) {
        windows.push(window);
    }
    TRUE
}

/// EnumWindows, collecting every top-level window in Z order
pub fn enum_windows() -> BindingResult<Vec<WindowHandle>> {
    let mut windows: Vec<WindowHandle> = Vec::new();
    // SAFETY: the callback only touches `windows`, which outlives the call
    let ok = unsafe {
        winuser::EnumWindows(
            Some(collect_window),
            &mut windows as *mut Vec<WindowHandle> as LPARAM,
        )
    };
    check(ok, "EnumWindows")?;
    tracing::trace!(count = windows.len(), "top-level windows enumerated");
    Ok(windows)
}

/// ShowWindow with a raw `SW_*` command. Returns whether the window was
/// previously visible.
pub fn show_window(window: WindowHandle, command: i32) -> bool {
    // SAFETY: any HWND value is accepted
    unsafe { winuser::ShowWindow(window.hwnd(), command) != FALSE }
}

/// SetWindowPos. `insert_after` is a window handle or one of the
/// `HWND_*` sentinels as a raw value.
pub fn set_window_pos(
    window: WindowHandle,
    insert_after: isize,
    x: i32,
    y: i32,
    cx: i32,
    cy: i32,
    flags: u32,
) -> BindingResult<()> {
    // SAFETY: plain values only
    check(
        unsafe {
            winuser::SetWindowPos(window.hwnd(), insert_after as HWND, x, y, cx, cy, flags)
        },
        "SetWindowPos",
    )
}

/// MoveWindow
pub fn move_window(
    window: WindowHandle,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    repaint: bool,
) -> BindingResult<()> {
    let repaint = if repaint { TRUE } else { FALSE };
    // SAFETY: plain values only
    check(
        unsafe { winuser::MoveWindow(window.hwnd(), x, y, width, height, repaint) },
        "MoveWindow",
    )
}

/// SetForegroundWindow. The OS may refuse without setting a last error.
pub fn set_foreground_window(window: WindowHandle) -> bool {
    // SAFETY: any HWND value is accepted
    unsafe { winuser::SetForegroundWindow(window.hwnd()) != FALSE }
}

/// GetWindowLongPtrW
pub fn get_window_long_ptr(window: WindowHandle, index: i32) -> BindingResult<isize> {
    reset_last_error();
    // SAFETY: invalid indices fail with a last error
    let value = unsafe { winuser::GetWindowLongPtrW(window.hwnd(), index) };
    if value == 0 {
        let code = ErrorCode::last_error();
        if !code.is_success() {
            return Err(WinError::with_code(code, "GetWindowLongPtrW").into());
        }
    }
    Ok(value)
}

/// SetWindowLongPtrW, returning the previous value
pub fn set_window_long_ptr(window: WindowHandle, index: i32, value: isize) -> BindingResult<isize> {
    reset_last_error();
    // SAFETY: invalid indices fail with a last error
    let previous = unsafe { winuser::SetWindowLongPtrW(window.hwnd(), index, value) };
    if previous == 0 {
        let code = ErrorCode::last_error();
        if !code.is_success() {
            return Err(WinError::with_code(code, "SetWindowLongPtrW").into());
        }
    }
    Ok(previous)
}

/// GetLayeredWindowAttributes, returning `(color_key, alpha, flags)`
pub fn get_layered_window_attributes(window: WindowHandle) -> BindingResult<(u32, u8, u32)> {
    let mut color_key: COLORREF = 0;
    let mut alpha: BYTE = 0;
    let mut flags: DWORD = 0;
    // SAFETY: all three out-pointers outlive the call
    check(
        unsafe {
            winuser::GetLayeredWindowAttributes(window.hwnd(), &mut color_key, &mut alpha, &mut flags)
        },
        "GetLayeredWindowAttributes",
    )?;
    Ok((color_key, alpha, flags))
}

/// SetLayeredWindowAttributes
pub fn set_layered_window_attributes(
    window: WindowHandle,
    color_key: u32,
    alpha: u8,
    flags: u32,
) -> BindingResult<()> {
    // SAFETY: plain values only
    check(
        unsafe { winuser::SetLayeredWindowAttributes(window.hwnd(), color_key, alpha, flags) },
        "SetLayeredWindowAttributes",
    )
}

/// MonitorFromWindow with a raw `MONITOR_DEFAULTTO*` flag
pub fn monitor_from_window(window: WindowHandle, flags: u32) -> Option<MonitorHandle> {
    // SAFETY: any HWND value is accepted
    MonitorHandle::from_hmonitor(unsafe { winuser::MonitorFromWindow(window.hwnd(), flags) })
}

/// AdjustWindowRect: grow a client rectangle to the window rectangle that
/// holds it for the given style
pub fn adjust_window_rect(client: Rect, style: u32, has_menu: bool) -> BindingResult<Rect> {
    let mut rect = client;
    let has_menu = if has_menu { TRUE } else { FALSE };
    // SAFETY: Rect has the layout of RECT
    check(
        unsafe { winuser::AdjustWindowRect(rect.as_mut_raw(), style, has_menu) },
        "AdjustWindowRect",
    )?;
    Ok(rect)
}
