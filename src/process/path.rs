//! Process handle and executable path queries
//!
//! Every query opens its own handle and releases it before returning.
//! Nothing is cached: a pid can be reused by a new process at any time.

use super::handle::ProcessHandle;
use crate::config::DEFAULT_PATH_BUFFER_BYTES;
use crate::core::types::{BindingResult, ProcessId};
use crate::windows::types::WideBuffer;
use tracing::debug;

/// Open `pid` with limited query rights.
///
/// Returns an error instead of a null handle when the process does not
/// exist or access is denied.
pub fn get_process_handle(pid: ProcessId) -> BindingResult<ProcessHandle> {
    ProcessHandle::open_query_limited(pid)
}

/// Executable path of `pid` with a caller-chosen buffer budget in bytes
pub fn try_process_path_with_budget(pid: ProcessId, budget_bytes: usize) -> BindingResult<String> {
    let process = get_process_handle(pid)?;
    let mut buffer = WideBuffer::from_byte_budget(budget_bytes);
    process.image_path(&mut buffer)
}

/// Executable path of `pid`, with the failure reason
pub fn try_process_path(pid: ProcessId) -> BindingResult<String> {
    try_process_path_with_budget(pid, DEFAULT_PATH_BUFFER_BYTES)
}

/// Executable path of `pid` with a caller-chosen buffer budget; empty when
/// the process cannot be opened or the path does not fit.
pub fn process_path_with_budget(pid: ProcessId, budget_bytes: usize) -> String {
    try_process_path_with_budget(pid, budget_bytes).unwrap_or_else(|err| {
        debug!(pid, error = %err, "process path unavailable");
        String::new()
    })
}

/// Executable path of `pid`; empty when unavailable
pub fn process_path(pid: ProcessId) -> String {
    process_path_with_budget(pid, DEFAULT_PATH_BUFFER_BYTES)
}
