//! Snapshot of everything the bindings can tell about one window

use super::{Bounds, ProcessId, WindowHandle};
use crate::windows::utils::string_conv::extract_filename;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Information about a window at the moment it was captured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub handle: WindowHandle,
    pub title: String,
    pub bounds: Bounds,
    pub content_bounds: Bounds,
    pub process_id: ProcessId,
    pub process_path: String,
    /// Monitor scale in percent, present only when the OS supports the query
    pub scale_factor: Option<u32>,
}

impl WindowInfo {
    /// Creates a WindowInfo with only the handle filled in
    pub fn new(handle: WindowHandle) -> Self {
        WindowInfo {
            handle,
            title: String::new(),
            bounds: Bounds::default(),
            content_bounds: Bounds::default(),
            process_id: 0,
            process_path: String::new(),
            scale_factor: None,
        }
    }

    /// Executable file name taken from the process path
    pub fn process_name(&self) -> &str {
        extract_filename(&self.process_path)
    }

    /// True when the owning process could not be identified
    pub fn is_orphaned(&self) -> bool {
        self.process_id == 0
    }

    /// True when `other` shows the same window with the same title
    pub fn same_focus(&self, other: &WindowInfo) -> bool {
        self.handle == other.handle && self.title == other.title
    }
}

impl fmt::Display for WindowInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} [{}] {}", self.handle, self.title, self.process_id, self.bounds)?;
        if let Some(scale) = self.scale_factor {
            write!(f, " @{}%", scale)?;
        }
        Ok(())
    }
}
