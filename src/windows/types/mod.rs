//! Windows-specific type definitions and wrappers

pub mod handle;
pub mod wide_buffer;

// Re-export commonly used types
pub use handle::{Handle, RawHandle};
pub use wide_buffer::WideBuffer;
