//! Version gate and capability descriptor

use std::ffi::c_void;
use window_bindings::capability::{ScaleFactorEntry, SHELL_SCALING_MIN_VERSION};
use window_bindings::config::CapabilityConfig;
use window_bindings::{BindingError, Capabilities, MonitorHandle, OsVersion};

unsafe extern "system" fn scale_125(_monitor: *mut c_void, scale: *mut i32) -> i32 {
    *scale = 125;
    0
}

fn resolve(release: &str) -> Capabilities {
    let version: OsVersion = release.parse().unwrap();
    Capabilities::resolve(version, || Some(unsafe { ScaleFactorEntry::new(scale_125) }))
}

#[test]
fn test_gate_threshold() {
    assert_eq!(SHELL_SCALING_MIN_VERSION, (8, 1));
    assert!(!resolve("8.0").has_shell_scaling());
    assert!(resolve("8.1").has_shell_scaling());
    assert!(resolve("10.0").has_shell_scaling());
    assert!(!resolve("7.9").has_shell_scaling());
}

#[test]
fn test_major_only_release() {
    assert!(!resolve("8").has_shell_scaling());
    assert!(resolve("11").has_shell_scaling());
}

#[test]
fn test_malformed_release_rejected() {
    for release in ["", "ten", "10.x", "10.0.1.2", "-1.0"] {
        assert!(
            matches!(release.parse::<OsVersion>(), Err(BindingError::InvalidVersion(_))),
            "{release:?} should not parse"
        );
    }
}

#[test]
fn test_scale_factor_only_through_descriptor() {
    let monitor = MonitorHandle::from_raw(0x0001_0001).unwrap();

    let supported = resolve("10.0.22631");
    assert_eq!(supported.scale_factor_for_monitor(monitor).unwrap(), 125);

    let unsupported = resolve("6.1");
    assert!(matches!(
        unsupported.scale_factor_for_monitor(monitor),
        Err(BindingError::CapabilityUnavailable(_))
    ));
}

#[test]
fn test_configuration_disables_scaling() {
    let config = CapabilityConfig {
        shell_scaling: false,
        os_version: None,
    };
    let caps = Capabilities::from_config(&config, OsVersion::new(10, 0), || {
        Some(unsafe { ScaleFactorEntry::new(scale_125) })
    });
    assert!(!caps.has_shell_scaling());
}

#[test]
#[cfg(windows)]
#[cfg_attr(miri, ignore = "FFI not supported in Miri")]
fn test_probe_running_system() {
    let caps = Capabilities::probe().unwrap();
    assert!(caps.os_version().major() >= 6);
    if !caps.os_version().supports_shell_scaling() {
        assert!(!caps.has_shell_scaling());
    }
}

#[test]
#[cfg(windows)]
#[cfg_attr(miri, ignore = "FFI not supported in Miri")]
fn test_probe_honours_version_override() {
    let config = CapabilityConfig {
        shell_scaling: true,
        os_version: Some("8.0".to_string()),
    };
    let caps = Capabilities::probe_with(&config).unwrap();
    assert_eq!(caps.os_version(), OsVersion::new(8, 0));
    assert!(!caps.has_shell_scaling());
}
