//! Windows API bindings
//!
//! Low-level FFI wrappers around user32, kernel32, ntdll and SHCore.
//! Each function maps to one OS entry point and reports the OS failure
//! as a `BindingError`.

pub mod kernel32;
pub mod ntdll;
pub mod shcore;
pub mod user32;
