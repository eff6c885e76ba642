//! Window queries, control and snapshots
//!
//! `options` compiles everywhere; the rest calls into user32 and is only
//! built on Windows.

pub mod options;

#[cfg(windows)]
pub mod control;
#[cfg(windows)]
pub mod enumerate;
#[cfg(windows)]
pub mod query;
#[cfg(windows)]
pub mod snapshot;

pub use options::{
    InsertAfter, LayeredAttributes, MonitorFallback, PositionFlags, ShowCommand, WindowLongIndex,
    WindowRelation, WS_EX_LAYERED,
};

#[cfg(windows)]
pub use control::{
    adjust_window_rect, is_window, layered_attributes, monitor_from_window, move_window,
    related_window, set_foreground_window, set_layered_attributes, set_window_long_ptr,
    set_window_pos, show_window, window_long_ptr,
};
#[cfg(windows)]
pub use enumerate::{live_top_level_windows, top_level_windows};
#[cfg(windows)]
pub use query::{
    active_window, cursor_position, process_id, window_bounds, window_content_bounds,
    window_title,
};
#[cfg(windows)]
pub use snapshot::Snapshotter;
