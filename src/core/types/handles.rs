//! Typed, opaque identifiers for OS window and monitor handles
//!
//! These are lookup keys only: they own nothing and may go stale at any
//! moment. Null is not representable, so "no window" is `Option::None`.

use super::error::BindingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroIsize;
use std::str::FromStr;

macro_rules! opaque_handle {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(NonZeroIsize);

        impl $name {
            /// Wrap a raw handle value, `None` for null
            pub const fn from_raw(raw: isize) -> Option<Self> {
                match NonZeroIsize::new(raw) {
                    Some(value) => Some($name(value)),
                    None => None,
                }
            }

            /// Raw handle value
            pub const fn as_raw(&self) -> isize {
                self.0.get()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(0x{:X})", $kind, self.0.get() as usize)
            }
        }

        impl FromStr for $name {
            type Err = BindingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let value = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                    // Hex is the unsigned bit pattern, as printed by Display
                    usize::from_str_radix(hex, 16).map(|bits| bits as isize)
                } else {
                    s.parse::<isize>()
                };

                value
                    .ok()
                    .and_then($name::from_raw)
                    .ok_or_else(|| BindingError::InvalidHandle(format!("{} {:?}", $kind, s)))
            }
        }
    };
}

opaque_handle!(
    /// Top-level window handle (`HWND`)
    WindowHandle,
    "HWND"
);

opaque_handle!(
    /// Display monitor handle (`HMONITOR`)
    MonitorHandle,
    "HMONITOR"
);

#[cfg(windows)]
mod native {
    use super::{MonitorHandle, WindowHandle};
    use winapi::shared::windef::{HMONITOR, HWND};

    impl WindowHandle {
        pub fn from_hwnd(hwnd: HWND) -> Option<Self> {
            Self::from_raw(hwnd as isize)
        }

        pub fn hwnd(&self) -> HWND {
            self.as_raw() as HWND
        }
    }

    impl MonitorHandle {
        pub fn from_hmonitor(monitor: HMONITOR) -> Option<Self> {
            Self::from_raw(monitor as isize)
        }

        pub fn hmonitor(&self) -> HMONITOR {
            self.as_raw() as HMONITOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_not_a_handle() {
        assert!(WindowHandle::from_raw(0).is_none());
        assert!(MonitorHandle::from_raw(0).is_none());
    }

    #[test]
    fn test_raw_round_trip() {
        let handle = WindowHandle::from_raw(0x1A2B3C).unwrap();
        assert_eq!(handle.as_raw(), 0x1A2B3C);
    }

    #[test]
    fn test_display() {
        let window = WindowHandle::from_raw(0x40C2E).unwrap();
        assert_eq!(window.to_string(), "HWND(0x40C2E)");

        let monitor = MonitorHandle::from_raw(0x10001).unwrap();
        assert_eq!(monitor.to_string(), "HMONITOR(0x10001)");
    }

    #[test]
    fn test_parsing() {
        assert_eq!(
            "0x40C2E".parse::<WindowHandle>().unwrap(),
            WindowHandle::from_raw(0x40C2E).unwrap()
        );
        assert_eq!(
            "265262".parse::<WindowHandle>().unwrap().as_raw(),
            265262
        );
        assert!("0".parse::<WindowHandle>().is_err());
        assert!("not a handle".parse::<MonitorHandle>().is_err());
    }

    #[test]
    fn test_sentinel_values_round_trip() {
        for raw in [-1isize, -2, isize::MIN, isize::MAX] {
            let handle = WindowHandle::from_raw(raw).unwrap();
            let text = handle.to_string();
            let hex = text
                .strip_prefix("HWND(")
                .and_then(|rest| rest.strip_suffix(')'))
                .unwrap();
            assert!(!hex.contains('-'));
            assert_eq!(hex.parse::<WindowHandle>().unwrap(), handle);
        }
        assert_eq!("-2".parse::<WindowHandle>().unwrap().as_raw(), -2);
    }

    #[test]
    fn test_option_is_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<Option<WindowHandle>>(),
            std::mem::size_of::<isize>()
        );
    }

    #[test]
    fn test_serialization() {
        let handle = WindowHandle::from_raw(4242).unwrap();
        assert_eq!(serde_json::to_string(&handle).unwrap(), "4242");
        let back: WindowHandle = serde_json::from_str("4242").unwrap();
        assert_eq!(back, handle);
    }
}
