//! Composite window snapshots
//!
//! A [`Snapshotter`] runs every query for a window and assembles the
//! results into a [`WindowInfo`]. Each query keeps its sentinel
//! semantics, so a window that dies halfway still yields a snapshot.

use super::control::monitor_from_window;
use super::enumerate::top_level_windows;
use super::options::MonitorFallback;
use super::query;
use crate::capability::Capabilities;
use crate::config::Config;
use crate::core::types::{BindingResult, WindowHandle, WindowInfo};
use crate::process::process_path_with_budget;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Captures [`WindowInfo`] snapshots under a fixed capability set
#[derive(Debug, Clone, Copy)]
pub struct Snapshotter {
    capabilities: Capabilities,
    path_buffer_bytes: usize,
}

impl Snapshotter {
    pub fn new(capabilities: Capabilities, path_buffer_bytes: usize) -> Self {
        Snapshotter {
            capabilities,
            path_buffer_bytes,
        }
    }

    pub fn from_config(capabilities: Capabilities, config: &Config) -> Self {
        Self::new(capabilities, config.query.path_buffer_bytes)
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Snapshot one window
    #[instrument(level = "trace", skip(self))]
    pub fn capture(&self, window: WindowHandle) -> WindowInfo {
        let process_id = query::process_id(window);
        let process_path = if process_id == 0 {
            String::new()
        } else {
            process_path_with_budget(process_id, self.path_buffer_bytes)
        };

        WindowInfo {
            handle: window,
            title: query::window_title(window),
            bounds: query::window_bounds(window),
            content_bounds: query::window_content_bounds(window),
            process_id,
            process_path,
            scale_factor: self.scale_factor(window),
        }
    }

    /// Snapshot the foreground window, if any
    pub fn capture_active(&self) -> Option<WindowInfo> {
        query::active_window().map(|window| self.capture(window))
    }

    /// Snapshot every top-level window, in Z order. Captures run in
    /// parallel; the ordering of the result is preserved.
    pub fn capture_all(&self) -> BindingResult<Vec<WindowInfo>> {
        let windows = top_level_windows()?;
        let snapshots: Vec<WindowInfo> = windows
            .par_iter()
            .map(|window| self.capture(*window))
            .collect();
        debug!(count = snapshots.len(), "captured top-level windows");
        Ok(snapshots)
    }

    /// `None` when scaling is unsupported or the monitor query failed
    fn scale_factor(&self, window: WindowHandle) -> Option<u32> {
        self.capabilities.shell_scaling()?;
        let monitor = monitor_from_window(window, MonitorFallback::Nearest)?;
        match self.capabilities.scale_factor_for_monitor(monitor) {
            Ok(scale) => Some(scale),
            Err(err) => {
                debug!(%window, %monitor, error = %err, "scale factor unavailable");
                None
            }
        }
    }
}
