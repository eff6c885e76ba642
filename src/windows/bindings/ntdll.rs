//! NTDLL.dll bindings for the OS version query
//!
//! `GetVersionExW` reports whatever the application manifest claims to
//! support; `RtlGetVersion` reports the real kernel version.

use crate::capability::OsVersion;
use crate::core::types::{BindingError, BindingResult};
use std::mem;
use winapi::shared::ntdef::NTSTATUS;
use winapi::um::winnt::OSVERSIONINFOW;

#[link(name = "ntdll")]
extern "system" {
    fn RtlGetVersion(version_information: *mut OSVERSIONINFOW) -> NTSTATUS;
}

/// Check if NTSTATUS indicates success
pub fn nt_success(status: NTSTATUS) -> bool {
    status >= 0
}

/// Safe wrapper for RtlGetVersion
pub fn rtl_get_version() -> BindingResult<OsVersion> {
    // SAFETY: OSVERSIONINFOW is plain data; zeroed is a valid initial state
    let mut info: OSVERSIONINFOW = unsafe { mem::zeroed() };
    info.dwOSVersionInfoSize = mem::size_of::<OSVERSIONINFOW>() as u32;

    // SAFETY: `info` is sized and outlives the call
    let status = unsafe { RtlGetVersion(&mut info) };
    if !nt_success(status) {
        return Err(BindingError::WindowsApi(format!(
            "RtlGetVersion failed with NTSTATUS 0x{:08X}",
            status as u32
        )));
    }

    Ok(OsVersion::with_build(
        info.dwMajorVersion,
        info.dwMinorVersion,
        info.dwBuildNumber,
    ))
}
