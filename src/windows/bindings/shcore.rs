//! SHCore.dll bindings, resolved at runtime
//!
//! SHCore only exists on newer systems, so nothing here is linked
//! statically. The library is loaded on demand and the entry point is
//! looked up by name.

use crate::capability::{ScaleFactorEntry, ScaleFactorFn};
use crate::windows::utils::error_codes::ErrorCode;
use crate::windows::utils::string_conv::string_to_wide;
use winapi::um::libloaderapi::{GetProcAddress, LoadLibraryW};

const SHCORE_DLL: &str = "SHCore.dll";
const GET_SCALE_FACTOR_FOR_MONITOR: &[u8] = b"GetScaleFactorForMonitor\0";

/// Load SHCore.dll and resolve GetScaleFactorForMonitor.
///
/// The module is intentionally never freed: the returned entry point must
/// stay callable for as long as any `Capabilities` holds it.
pub fn load_scale_factor_entry() -> Option<ScaleFactorEntry> {
    let name = string_to_wide(SHCORE_DLL);

    // SAFETY: `name` is NUL-terminated and outlives the call
    let module = unsafe { LoadLibraryW(name.as_ptr()) };
    if module.is_null() {
        tracing::debug!(code = %ErrorCode::last_error(), "{} not available", SHCORE_DLL);
        return None;
    }

    // SAFETY: the symbol name is NUL-terminated
    let proc = unsafe { GetProcAddress(module, GET_SCALE_FACTOR_FOR_MONITOR.as_ptr().cast()) };
    if proc.is_null() {
        tracing::debug!(code = %ErrorCode::last_error(), "GetScaleFactorForMonitor not exported");
        return None;
    }

    // SAFETY: GetScaleFactorForMonitor has the signature
    // HRESULT (HMONITOR, DEVICE_SCALE_FACTOR*), which matches ScaleFactorFn,
    // and the module is never unloaded
    unsafe {
        let func = std::mem::transmute::<_, ScaleFactorFn>(proc);
        Some(ScaleFactorEntry::new(func))
    }
}
