//! Safe process handle wrapper with RAII semantics

use crate::core::types::ProcessId;
use crate::windows::types::Handle;
use std::fmt;

#[cfg(windows)]
use crate::core::types::BindingResult;
#[cfg(windows)]
use crate::windows::bindings::kernel32;
#[cfg(windows)]
use crate::windows::types::WideBuffer;

/// Access rights for process handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessAccess {
    value: u32,
}

impl ProcessAccess {
    /// Query information access
    pub const QUERY_INFORMATION: Self = Self { value: 0x0400 };
    /// Limited query access: image name, exit code, times. Granted for
    /// most processes that refuse full query rights.
    pub const QUERY_LIMITED_INFORMATION: Self = Self { value: 0x1000 };
    /// Wait on the process
    pub const SYNCHRONIZE: Self = Self { value: 0x0010_0000 };

    /// Combine access rights
    pub fn combine(rights: &[Self]) -> Self {
        let mut value = 0;
        for right in rights {
            value |= right.value;
        }
        Self { value }
    }

    /// Get raw value
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Owned handle to a process, released when dropped.
///
/// A `ProcessHandle` only exists for a successfully opened process, so it
/// can never be used after release or before a validity check.
pub struct ProcessHandle {
    handle: Handle,
    pid: ProcessId,
    access: ProcessAccess,
}

impl ProcessHandle {
    /// Assemble from an already owned handle
    #[cfg_attr(not(windows), allow(dead_code))]
    pub(crate) fn from_parts(handle: Handle, pid: ProcessId, access: ProcessAccess) -> Self {
        ProcessHandle {
            handle,
            pid,
            access,
        }
    }

    /// Open a process with specified access rights
    #[cfg(windows)]
    pub fn open(pid: ProcessId, access: ProcessAccess) -> BindingResult<Self> {
        let handle = kernel32::open_process(pid, access.value())?;
        Ok(Self::from_parts(handle, pid, access))
    }

    /// Open a process with limited query rights
    #[cfg(windows)]
    pub fn open_query_limited(pid: ProcessId) -> BindingResult<Self> {
        Self::open(pid, ProcessAccess::QUERY_LIMITED_INFORMATION)
    }

    /// Full Win32 path of the process image, decoded from `buffer`
    #[cfg(windows)]
    pub fn image_path(&self, buffer: &mut WideBuffer) -> BindingResult<String> {
        kernel32::query_full_process_image_name(&self.handle, buffer)?;
        Ok(buffer.to_string_lossy())
    }

    /// Get the process ID
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Get the access rights
    pub fn access(&self) -> ProcessAccess {
        self.access
    }

    /// Check if handle is valid
    pub fn is_valid(&self) -> bool {
        !self.handle.is_null()
    }

    /// Borrow the owned OS handle
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("valid", &self.is_valid())
            .field("access", &format!("0x{:X}", self.access.value()))
            .finish()
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProcessHandle(pid={}, valid={})",
            self.pid,
            self.is_valid()
        )
    }
}
