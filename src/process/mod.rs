//! Process identification
//!
//! Scoped process handles and executable path lookup.

pub mod handle;
#[cfg(windows)]
pub mod path;

pub use handle::{ProcessAccess, ProcessHandle};
#[cfg(windows)]
pub use path::{
    get_process_handle, process_path, process_path_with_budget, try_process_path,
    try_process_path_with_budget,
};
