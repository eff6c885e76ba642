//! Typed arguments for the user32 window calls
//!
//! Each type maps to the raw constant the OS expects. Values match
//! `winuser.h`.

use crate::core::types::WindowHandle;
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// `SW_*` commands for ShowWindow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowCommand {
    Hide,
    ShowNormal,
    ShowMinimized,
    ShowMaximized,
    ShowNoActivate,
    Show,
    Minimize,
    ShowMinNoActive,
    ShowNa,
    Restore,
    ShowDefault,
    ForceMinimize,
}

impl ShowCommand {
    pub const fn raw(self) -> i32 {
        match self {
            ShowCommand::Hide => 0,
            ShowCommand::ShowNormal => 1,
            ShowCommand::ShowMinimized => 2,
            ShowCommand::ShowMaximized => 3,
            ShowCommand::ShowNoActivate => 4,
            ShowCommand::Show => 5,
            ShowCommand::Minimize => 6,
            ShowCommand::ShowMinNoActive => 7,
            ShowCommand::ShowNa => 8,
            ShowCommand::Restore => 9,
            ShowCommand::ShowDefault => 10,
            ShowCommand::ForceMinimize => 11,
        }
    }
}

/// `GW_*` relations for GetWindow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowRelation {
    First,
    Last,
    Next,
    Previous,
    Owner,
    Child,
    EnabledPopup,
}

impl WindowRelation {
    pub const fn raw(self) -> u32 {
        match self {
            WindowRelation::First => 0,
            WindowRelation::Last => 1,
            WindowRelation::Next => 2,
            WindowRelation::Previous => 3,
            WindowRelation::Owner => 4,
            WindowRelation::Child => 5,
            WindowRelation::EnabledPopup => 6,
        }
    }
}

/// `MONITOR_DEFAULTTO*` fallbacks for MonitorFromWindow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitorFallback {
    /// No monitor when the window is off-screen
    Null,
    Primary,
    Nearest,
}

impl MonitorFallback {
    pub const fn raw(self) -> u32 {
        match self {
            MonitorFallback::Null => 0,
            MonitorFallback::Primary => 1,
            MonitorFallback::Nearest => 2,
        }
    }
}

/// Z-order placement for SetWindowPos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertAfter {
    Top,
    Bottom,
    TopMost,
    NoTopMost,
    Window(WindowHandle),
}

impl InsertAfter {
    /// Raw `hWndInsertAfter` value: a handle or an `HWND_*` sentinel
    pub const fn raw(self) -> isize {
        match self {
            InsertAfter::Top => 0,
            InsertAfter::Bottom => 1,
            InsertAfter::TopMost => -1,
            InsertAfter::NoTopMost => -2,
            InsertAfter::Window(window) => window.as_raw(),
        }
    }
}

/// `SWP_*` flags for SetWindowPos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionFlags {
    value: u32,
}

impl PositionFlags {
    pub const NONE: Self = Self { value: 0 };
    pub const NO_SIZE: Self = Self { value: 0x0001 };
    pub const NO_MOVE: Self = Self { value: 0x0002 };
    pub const NO_Z_ORDER: Self = Self { value: 0x0004 };
    pub const NO_REDRAW: Self = Self { value: 0x0008 };
    pub const NO_ACTIVATE: Self = Self { value: 0x0010 };
    pub const FRAME_CHANGED: Self = Self { value: 0x0020 };
    pub const SHOW_WINDOW: Self = Self { value: 0x0040 };
    pub const HIDE_WINDOW: Self = Self { value: 0x0080 };
    pub const NO_OWNER_Z_ORDER: Self = Self { value: 0x0200 };
    pub const ASYNC_WINDOW_POS: Self = Self { value: 0x4000 };

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn contains(&self, other: Self) -> bool {
        self.value & other.value == other.value
    }
}

impl BitOr for PositionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            value: self.value | rhs.value,
        }
    }
}

/// `GWL_*` / `GWLP_*` indices for Get/SetWindowLongPtrW
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowLongIndex {
    WndProc,
    HInstance,
    HwndParent,
    Id,
    Style,
    ExStyle,
    UserData,
}

impl WindowLongIndex {
    pub const fn raw(self) -> i32 {
        match self {
            WindowLongIndex::WndProc => -4,
            WindowLongIndex::HInstance => -6,
            WindowLongIndex::HwndParent => -8,
            WindowLongIndex::Id => -12,
            WindowLongIndex::Style => -16,
            WindowLongIndex::ExStyle => -20,
            WindowLongIndex::UserData => -21,
        }
    }
}

/// Extended style bit that makes SetLayeredWindowAttributes apply
pub const WS_EX_LAYERED: isize = 0x0008_0000;

/// Layered window transparency, as read or written by
/// Get/SetLayeredWindowAttributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayeredAttributes {
    /// `COLORREF` (0x00BBGGRR) treated as fully transparent
    pub color_key: u32,
    pub alpha: u8,
    /// `LWA_COLORKEY` and/or `LWA_ALPHA`
    pub flags: u32,
}

impl LayeredAttributes {
    pub const COLOR_KEY: u32 = 0x1;
    pub const ALPHA: u32 = 0x2;

    /// Uniform opacity, 0 transparent to 255 opaque
    pub const fn with_alpha(alpha: u8) -> Self {
        LayeredAttributes {
            color_key: 0,
            alpha,
            flags: Self::ALPHA,
        }
    }

    /// Make every pixel of `color_key` transparent
    pub const fn with_color_key(color_key: u32) -> Self {
        LayeredAttributes {
            color_key,
            alpha: 255,
            flags: Self::COLOR_KEY,
        }
    }

    pub const fn uses_alpha(&self) -> bool {
        self.flags & Self::ALPHA != 0
    }

    pub const fn uses_color_key(&self) -> bool {
        self.flags & Self::COLOR_KEY != 0
    }
}
