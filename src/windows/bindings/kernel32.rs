//! Kernel32.dll bindings for process handles and image paths

use crate::core::types::{BindingError, BindingResult, ProcessId};
use crate::windows::types::{Handle, RawHandle, WideBuffer};
use crate::windows::utils::error_codes::{ErrorCode, WinError};
use winapi::shared::minwindef::{BOOL, DWORD, FALSE, PDWORD};
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::{GetCurrentProcess, OpenProcess};
use winapi::um::winbase::QueryFullProcessImageNameW;
use winapi::um::winnt::HANDLE;

#[link(name = "kernel32")]
extern "system" {
    fn GetProcessHandleCount(process: HANDLE, handle_count: PDWORD) -> BOOL;
}

/// Safe wrapper for OpenProcess.
///
/// A null handle is never returned: failure is classified from the last
/// error as access denied or process not found.
pub fn open_process(pid: ProcessId, desired_access: u32) -> BindingResult<Handle> {
    // SAFETY: OpenProcess takes plain values and returns an owned handle or null
    let raw = unsafe { OpenProcess(desired_access, FALSE, pid) };
    if raw.is_null() {
        return Err(match ErrorCode::last_error() {
            ErrorCode::AccessDenied => BindingError::access_denied(pid, "OpenProcess"),
            code => {
                tracing::trace!(pid, %code, "OpenProcess failed");
                BindingError::ProcessNotFound(pid)
            }
        });
    }
    tracing::trace!(pid, access = desired_access, "process opened");
    Ok(Handle::new(raw.cast()))
}

/// Release a raw handle with CloseHandle
///
/// # Safety
/// The handle must be owned by the caller and not used afterwards
pub unsafe fn close_raw_handle(handle: RawHandle) -> bool {
    if handle.is_null() {
        return true;
    }
    CloseHandle(handle.cast()) != FALSE
}

/// Safe wrapper for QueryFullProcessImageNameW.
///
/// Writes the Win32 path of the image into `buffer` and returns the number
/// of code units written, excluding the terminator.
pub fn query_full_process_image_name(
    process: &Handle,
    buffer: &mut WideBuffer,
) -> BindingResult<usize> {
    if process.is_null() {
        return Err(BindingError::InvalidHandle(
            "Process handle is null".to_string(),
        ));
    }

    let capacity = buffer.capacity();
    let mut size: DWORD = buffer.capacity_u32();

    // SAFETY: the handle is live for the duration of the borrow and `size`
    // never exceeds the buffer's capacity
    let ok = unsafe {
        QueryFullProcessImageNameW(process.raw().cast(), 0, buffer.as_mut_ptr(), &mut size)
    };

    if ok == FALSE {
        buffer.set_used(0);
        return Err(match ErrorCode::last_error() {
            ErrorCode::InsufficientBuffer => BindingError::buffer_too_small(capacity),
            code => WinError::with_code(code, "QueryFullProcessImageNameW").into(),
        });
    }

    Ok(buffer.set_used(size as usize))
}

/// Number of handles currently open in this process
pub fn process_handle_count() -> BindingResult<u32> {
    let mut count: DWORD = 0;
    // SAFETY: the pseudo handle from GetCurrentProcess needs no release
    let ok = unsafe { GetProcessHandleCount(GetCurrentProcess(), &mut count) };
    if ok == FALSE {
        return Err(BindingError::last_os_error());
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_invalid_process() {
        // PID 0 is the idle process and can never be opened
        let result = open_process(0, 0x1000);
        assert!(result.is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_close_null_handle() {
        unsafe {
            assert!(close_raw_handle(ptr::null_mut()));
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_query_null_handle() {
        let mut buffer = WideBuffer::with_capacity(260);
        let result = query_full_process_image_name(&Handle::null(), &mut buffer);
        assert!(matches!(result, Err(BindingError::InvalidHandle(_))));
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_query_current_process() {
        let process = open_process(std::process::id(), 0x1000).unwrap();
        let mut buffer = WideBuffer::with_capacity(33000);
        let written = query_full_process_image_name(&process, &mut buffer).unwrap();
        assert!(written > 0);
        assert!(buffer.to_string_lossy().to_lowercase().ends_with(".exe"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_query_with_tiny_buffer() {
        let process = open_process(std::process::id(), 0x1000).unwrap();
        let mut buffer = WideBuffer::with_capacity(4);
        let result = query_full_process_image_name(&process, &mut buffer);
        assert!(matches!(result, Err(BindingError::BufferTooSmall { capacity: 4 })));
        assert_eq!(buffer.to_string_lossy(), "");
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_process_handle_count() {
        assert!(process_handle_count().unwrap() > 0);
    }
}
