//! Windows error code handling utilities

use crate::core::types::BindingError;
use std::fmt;

/// Win32 error codes the bindings distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success,
    AccessDenied,
    InvalidHandle,
    InvalidParameter,
    InsufficientBuffer,
    InvalidWindowHandle,
    Unknown(u32),
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            0 => ErrorCode::Success,
            5 => ErrorCode::AccessDenied,
            6 => ErrorCode::InvalidHandle,
            87 => ErrorCode::InvalidParameter,
            122 => ErrorCode::InsufficientBuffer,
            1400 => ErrorCode::InvalidWindowHandle,
            _ => ErrorCode::Unknown(code),
        }
    }
}

impl ErrorCode {
    /// Get the calling thread's last Windows error
    #[cfg(windows)]
    pub fn last_error() -> Self {
        // SAFETY: GetLastError only reads thread-local state
        unsafe { ErrorCode::from(winapi::um::errhandlingapi::GetLastError()) }
    }

    /// Raw Win32 code
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::AccessDenied => 5,
            ErrorCode::InvalidHandle => 6,
            ErrorCode::InvalidParameter => 87,
            ErrorCode::InsufficientBuffer => 122,
            ErrorCode::InvalidWindowHandle => 1400,
            ErrorCode::Unknown(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Success => write!(f, "Success"),
            ErrorCode::AccessDenied => write!(f, "Access denied"),
            ErrorCode::InvalidHandle => write!(f, "Invalid handle"),
            ErrorCode::InvalidParameter => write!(f, "Invalid parameter"),
            ErrorCode::InsufficientBuffer => write!(f, "Insufficient buffer"),
            ErrorCode::InvalidWindowHandle => write!(f, "Invalid window handle"),
            ErrorCode::Unknown(code) => write!(f, "Unknown error: {}", code),
        }
    }
}

/// Windows error with the name of the failing call
#[derive(Debug)]
pub struct WinError {
    code: ErrorCode,
    context: String,
}

impl WinError {
    /// Capture the last error for `context`
    #[cfg(windows)]
    pub fn new(context: impl Into<String>) -> Self {
        WinError {
            code: ErrorCode::last_error(),
            context: context.into(),
        }
    }

    /// Create with specific error code
    pub fn with_code(code: ErrorCode, context: impl Into<String>) -> Self {
        WinError {
            code,
            context: context.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Convert to BindingError
    pub fn to_binding_error(self) -> BindingError {
        match self.code {
            ErrorCode::InvalidHandle | ErrorCode::InvalidWindowHandle => {
                BindingError::InvalidHandle(format!("{}: {}", self.context, self.code))
            }
            _ => BindingError::WindowsApi(format!("{}: {}", self.context, self.code)),
        }
    }
}

impl From<WinError> for BindingError {
    fn from(err: WinError) -> Self {
        err.to_binding_error()
    }
}
