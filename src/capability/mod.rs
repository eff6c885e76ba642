//! Runtime capability probe
//!
//! The OS version is read once and turned into an immutable
//! [`Capabilities`] descriptor. The DPI-scaling entry point is only
//! reachable through that descriptor, and only when the version gate
//! passed and the entry point could be resolved.

mod version;

pub use version::{OsVersion, SHELL_SCALING_MIN_VERSION};

use crate::config::CapabilityConfig;
use crate::core::types::{BindingError, BindingResult, MonitorHandle};
use std::ffi::c_void;
use std::fmt;

/// Signature of SHCore's `GetScaleFactorForMonitor`
pub type ScaleFactorFn = unsafe extern "system" fn(monitor: *mut c_void, scale: *mut i32) -> i32;

/// Resolved `GetScaleFactorForMonitor` entry point
#[derive(Clone, Copy)]
pub struct ScaleFactorEntry {
    func: ScaleFactorFn,
}

impl ScaleFactorEntry {
    /// Wrap a resolved entry point
    ///
    /// # Safety
    /// `func` must implement the `GetScaleFactorForMonitor` contract: it
    /// accepts any monitor value and writes at most one `i32` through its
    /// second argument.
    pub unsafe fn new(func: ScaleFactorFn) -> Self {
        ScaleFactorEntry { func }
    }

    /// Scale factor of `monitor` in percent (100, 125, 150, ...)
    pub fn scale_factor(&self, monitor: MonitorHandle) -> BindingResult<u32> {
        let mut scale: i32 = 0;
        // SAFETY: `scale` outlives the call; the OS validates the handle
        // and `new`'s caller vouched for `func`
        let hr = unsafe { (self.func)(monitor.as_raw() as *mut c_void, &mut scale) };
        if hr < 0 {
            return Err(BindingError::WindowsApi(format!(
                "GetScaleFactorForMonitor failed for {} with HRESULT 0x{:08X}",
                monitor, hr as u32
            )));
        }
        match u32::try_from(scale) {
            Ok(percent) if percent > 0 => Ok(percent),
            _ => Err(BindingError::WindowsApi(format!(
                "GetScaleFactorForMonitor returned invalid scale {} for {}",
                scale, monitor
            ))),
        }
    }
}

impl fmt::Debug for ScaleFactorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleFactorEntry")
            .field("func", &(self.func as *const c_void))
            .finish()
    }
}

/// What the running OS supports, decided once at startup
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    os_version: OsVersion,
    shell_scaling: Option<ScaleFactorEntry>,
}

impl Capabilities {
    /// Apply the version gate. `load` is only called when the version
    /// qualifies; its result is the final answer.
    pub fn resolve<F>(os_version: OsVersion, load: F) -> Self
    where
        F: FnOnce() -> Option<ScaleFactorEntry>,
    {
        let shell_scaling = if os_version.supports_shell_scaling() {
            load()
        } else {
            None
        };

        tracing::info!(
            version = %os_version,
            shell_scaling = shell_scaling.is_some(),
            "capabilities resolved"
        );

        Capabilities {
            os_version,
            shell_scaling,
        }
    }

    /// Descriptor with scaling disabled regardless of version
    pub fn without_scaling(os_version: OsVersion) -> Self {
        Capabilities {
            os_version,
            shell_scaling: None,
        }
    }

    /// Probe the running system
    #[cfg(windows)]
    pub fn probe() -> BindingResult<Self> {
        Self::probe_with(&CapabilityConfig::default())
    }

    /// Probe the running system, honouring configured overrides
    #[cfg(windows)]
    pub fn probe_with(config: &CapabilityConfig) -> BindingResult<Self> {
        let os_version = match config.os_version.as_deref() {
            Some(forced) => forced.parse()?,
            None => OsVersion::current()?,
        };
        Ok(Self::from_config(
            config,
            os_version,
            crate::windows::bindings::shcore::load_scale_factor_entry,
        ))
    }

    /// Apply configuration to an already known version
    pub fn from_config<F>(config: &CapabilityConfig, os_version: OsVersion, load: F) -> Self
    where
        F: FnOnce() -> Option<ScaleFactorEntry>,
    {
        if !config.shell_scaling {
            tracing::info!(version = %os_version, "shell scaling disabled by configuration");
            return Self::without_scaling(os_version);
        }
        Self::resolve(os_version, load)
    }

    pub fn os_version(&self) -> OsVersion {
        self.os_version
    }

    pub fn has_shell_scaling(&self) -> bool {
        self.shell_scaling.is_some()
    }

    /// The scaling entry point, absent on unsupported systems
    pub fn shell_scaling(&self) -> Option<&ScaleFactorEntry> {
        self.shell_scaling.as_ref()
    }

    /// GetScaleFactorForMonitor, or `CapabilityUnavailable`
    pub fn scale_factor_for_monitor(&self, monitor: MonitorHandle) -> BindingResult<u32> {
        self.shell_scaling
            .as_ref()
            .ok_or_else(|| BindingError::capability_unavailable("GetScaleFactorForMonitor"))?
            .scale_factor(monitor)
    }
}
