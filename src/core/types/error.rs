//! Error types for window and process queries

use thiserror::Error;

/// Main error type for binding operations
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    #[error("Process not found: {0}")]
    ProcessNotFound(u32),

    #[error("Access denied to process {pid}: {reason}")]
    AccessDenied { pid: u32, reason: String },

    #[error("Buffer too small: {capacity} units")]
    BufferTooSmall { capacity: usize },

    #[error("Invalid OS version: {0}")]
    InvalidVersion(String),

    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApiError(#[from] ::windows::core::Error),

    #[error("Windows API: {0}")]
    WindowsApi(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias for binding operations
pub type BindingResult<T> = Result<T, BindingError>;

impl BindingError {
    /// Creates a Windows API error from the calling thread's last error code
    #[cfg(windows)]
    pub fn last_os_error() -> Self {
        BindingError::WindowsApiError(::windows::core::Error::from_win32())
    }

    /// Creates an access denied error for a process
    pub fn access_denied(pid: u32, reason: impl Into<String>) -> Self {
        BindingError::AccessDenied {
            pid,
            reason: reason.into(),
        }
    }

    /// Creates a buffer too small error
    pub fn buffer_too_small(capacity: usize) -> Self {
        BindingError::BufferTooSmall { capacity }
    }

    /// Creates a capability unavailable error
    pub fn capability_unavailable(name: impl Into<String>) -> Self {
        BindingError::CapabilityUnavailable(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BindingError::InvalidHandle("HWND 0x0".to_string());
        assert_eq!(err.to_string(), "Invalid handle: HWND 0x0");

        let err = BindingError::access_denied(1234, "protected process");
        assert_eq!(
            err.to_string(),
            "Access denied to process 1234: protected process"
        );
    }

    #[test]
    fn test_all_error_variants() {
        let errors: Vec<(BindingError, &str)> = vec![
            (BindingError::ProcessNotFound(42), "Process not found: 42"),
            (
                BindingError::BufferTooSmall { capacity: 33000 },
                "Buffer too small: 33000 units",
            ),
            (
                BindingError::InvalidVersion("ten".to_string()),
                "Invalid OS version: ten",
            ),
            (
                BindingError::CapabilityUnavailable("GetScaleFactorForMonitor".to_string()),
                "Capability unavailable: GetScaleFactorForMonitor",
            ),
            (
                BindingError::WindowsApi("GetWindowRect: Invalid handle".to_string()),
                "Windows API: GetWindowRect: Invalid handle",
            ),
            (
                BindingError::Unknown("something went wrong".to_string()),
                "Unknown error: something went wrong",
            ),
        ];

        for (error, expected) in errors {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_helper_methods() {
        match BindingError::access_denied(7, "denied") {
            BindingError::AccessDenied { pid, reason } => {
                assert_eq!(pid, 7);
                assert_eq!(reason, "denied");
            }
            other => panic!("Wrong error type: {other:?}"),
        }

        match BindingError::buffer_too_small(128) {
            BindingError::BufferTooSmall { capacity } => assert_eq!(capacity, 128),
            other => panic!("Wrong error type: {other:?}"),
        }

        assert!(matches!(
            BindingError::capability_unavailable("scaling"),
            BindingError::CapabilityUnavailable(name) if name == "scaling"
        ));
    }

    #[test]
    fn test_from_implementations() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "test");
        let err: BindingError = io_err.into();
        assert!(matches!(err, BindingError::IoError(_)));

        let json_err = serde_json::from_str::<String>("invalid json").unwrap_err();
        let err: BindingError = json_err.into();
        assert!(matches!(err, BindingError::JsonError(_)));
    }
}
