//! OS version parsing and the shell-scaling version gate

use crate::core::types::{BindingError, BindingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest `(major, minor)` that exposes GetScaleFactorForMonitor
pub const SHELL_SCALING_MIN_VERSION: (u32, u32) = (8, 1);

/// Running OS version as `major.minor[.build]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OsVersion {
    major: u32,
    minor: u32,
    build: Option<u32>,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        OsVersion {
            major,
            minor,
            build: None,
        }
    }

    pub const fn with_build(major: u32, minor: u32, build: u32) -> Self {
        OsVersion {
            major,
            minor,
            build: Some(build),
        }
    }

    /// Version of the running system
    #[cfg(windows)]
    pub fn current() -> BindingResult<Self> {
        crate::windows::bindings::ntdll::rtl_get_version()
    }

    pub const fn major(&self) -> u32 {
        self.major
    }

    pub const fn minor(&self) -> u32 {
        self.minor
    }

    pub const fn build(&self) -> Option<u32> {
        self.build
    }

    /// Major strictly above the threshold, or equal major with minor at
    /// or above it. Any other combination disables scaling.
    pub const fn supports_shell_scaling(&self) -> bool {
        let (min_major, min_minor) = SHELL_SCALING_MIN_VERSION;
        self.major > min_major || (self.major == min_major && self.minor >= min_minor)
    }
}

impl FromStr for OsVersion {
    type Err = BindingError;

    /// Parses release strings such as `10.0.19045`, `8.1` or `10`.
    /// A missing minor component counts as 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BindingError::InvalidVersion(s.to_string());
        let mut parts = s.trim().split('.');

        let mut next = |required: bool| -> BindingResult<Option<u32>> {
            match parts.next() {
                Some(part) => part.trim().parse::<u32>().map(Some).map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(None),
            }
        };

        let major = next(true)?.ok_or_else(invalid)?;
        let minor = next(false)?.unwrap_or(0);
        let build = next(false)?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(OsVersion {
            major,
            minor,
            build,
        })
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
        }
        Ok(())
    }
}
