//! Owned OS handle with automatic, exactly-once release

use std::ffi::c_void;
use std::fmt;
use std::ptr;

/// Raw kernel object handle
pub type RawHandle = *mut c_void;

/// Function releasing a raw handle, returning whether the OS accepted it
pub type CloseFn = unsafe fn(RawHandle) -> bool;

/// Safe wrapper around a kernel HANDLE with RAII semantics.
///
/// The handle is released when the wrapper drops, on every exit path of
/// the scope that owns it. `take()` hands ownership out instead.
pub struct Handle {
    handle: RawHandle,
    close: CloseFn,
}

impl Handle {
    /// Wrap a handle returned by a kernel32 call
    #[cfg(windows)]
    pub fn new(handle: RawHandle) -> Self {
        // SAFETY: CloseHandle accepts any handle a kernel32 call returned
        unsafe { Self::with_closer(handle, crate::windows::bindings::kernel32::close_raw_handle) }
    }

    /// Wrap a handle released by `close` instead of `CloseHandle`
    ///
    /// # Safety
    /// `close` must accept `handle`: it is called with it exactly once,
    /// when the wrapper drops, unless the handle is null or taken.
    pub unsafe fn with_closer(handle: RawHandle, close: CloseFn) -> Self {
        Handle { handle, close }
    }

    /// Create a null handle
    pub fn null() -> Self {
        Handle {
            handle: ptr::null_mut(),
            close: ignore_close,
        }
    }

    /// Check if handle is null
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Get the raw handle. It stays owned by `self`.
    pub fn raw(&self) -> RawHandle {
        self.handle
    }

    /// Take ownership of the handle, preventing automatic cleanup
    pub fn take(mut self) -> RawHandle {
        let handle = self.handle;
        self.handle = ptr::null_mut();
        handle
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            let handle = std::mem::replace(&mut self.handle, ptr::null_mut());
            // SAFETY: `handle` is owned by this wrapper and released only here
            let released = unsafe { (self.close)(handle) };
            if !released {
                tracing::debug!(handle = ?handle, "handle release rejected by the OS");
            }
        }
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("raw", &self.handle)
            .field("null", &self.is_null())
            .finish()
    }
}

unsafe fn ignore_close(_handle: RawHandle) -> bool {
    true
}

// SAFETY: kernel handles are process-wide, not thread-affine
unsafe impl Send for Handle {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RELEASED: AtomicUsize = AtomicUsize::new(0);

    unsafe fn counting_close(_handle: RawHandle) -> bool {
        RELEASED.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn fake_handle(value: usize) -> Handle {
        // SAFETY: counting_close never dereferences the handle
        unsafe { Handle::with_closer(value as RawHandle, counting_close) }
    }

    fn query_that_fails(handle: &Handle) -> Result<u32, &'static str> {
        if handle.is_null() {
            return Ok(0);
        }
        Err("query failed")
    }

    // All counting tests live in one function so parallel test threads
    // never observe each other's releases.
    #[test]
    fn test_release_exactly_once() {
        let before = RELEASED.load(Ordering::SeqCst);
        {
            let _handle = fake_handle(0x100);
        }
        assert_eq!(RELEASED.load(Ordering::SeqCst), before + 1);

        // Early return through `?` still releases
        fn open_and_query() -> Result<u32, &'static str> {
            let handle = fake_handle(0x200);
            let value = query_that_fails(&handle)?;
            Ok(value)
        }
        for _ in 0..10 {
            assert!(open_and_query().is_err());
        }
        assert_eq!(RELEASED.load(Ordering::SeqCst), before + 11);

        // Taken handles are not released by the wrapper
        let raw = fake_handle(0x300).take();
        assert_eq!(raw as usize, 0x300);
        assert_eq!(RELEASED.load(Ordering::SeqCst), before + 11);

        // Null handles are never passed to the closer
        // SAFETY: counting_close never dereferences the handle
        drop(unsafe { Handle::with_closer(ptr::null_mut(), counting_close) });
        assert_eq!(RELEASED.load(Ordering::SeqCst), before + 11);
    }

    static LAST_CLOSED: AtomicUsize = AtomicUsize::new(0);

    unsafe fn recording_close(handle: RawHandle) -> bool {
        LAST_CLOSED.store(handle as usize, Ordering::SeqCst);
        false
    }

    #[test]
    fn test_closer_receives_wrapped_handle() {
        // SAFETY: recording_close only stores the address
        let handle = unsafe { Handle::with_closer(0x5A0 as RawHandle, recording_close) };
        assert_eq!(handle.raw() as usize, 0x5A0);
        drop(handle);
        // A rejected release is logged, not retried
        assert_eq!(LAST_CLOSED.load(Ordering::SeqCst), 0x5A0);
    }

    #[test]
    fn test_handle_null() {
        let handle = Handle::null();
        assert!(handle.is_null());
        assert_eq!(handle.raw(), ptr::null_mut());
    }

    #[test]
    fn test_handle_debug() {
        let debug = format!("{:?}", Handle::null());
        assert!(debug.contains("Handle"));
        assert!(debug.contains("null: true"));
    }
}
