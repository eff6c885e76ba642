//! Windows API layer
//!
//! Marshaling types (bounded wide buffers, owned handles), string and
//! error-code utilities, and the raw bindings. All `unsafe` FFI calls are
//! contained in `bindings`, which only exists on Windows targets.

#[cfg(windows)]
pub mod bindings;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use types::{Handle, WideBuffer};
pub use utils::{ErrorCode, WinError};

/// True when the crate was built for a target that has the bindings
pub const fn is_supported_target() -> bool {
    cfg!(all(windows, target_pointer_width = "64"))
}
