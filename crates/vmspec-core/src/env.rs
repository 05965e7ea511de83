//! Environment lookup used by the value resolver
//!
//! Resolution never reads `std::env` directly. It goes through an
//! [`EnvSource`] so callers (and tests) can supply a fixed snapshot.

use std::collections::HashMap;

/// Environment variable names bound to each resolvable launch option
pub mod keys {
    pub const CPUS: &str = "VMSPEC_CPUS";
    pub const MEM: &str = "VMSPEC_MEM";
    pub const ACCEL: &str = "VMSPEC_ACCEL";
    pub const NETWORKING: &str = "VMSPEC_NETWORKING";
    pub const STATE: &str = "VMSPEC_STATE";
    pub const DETACHED: &str = "VMSPEC_DETACHED";
    pub const UEFI: &str = "VMSPEC_UEFI";
    pub const VSOCK_PORTS: &str = "VMSPEC_VSOCK_PORTS";

    /// Every key above, in the order they are documented
    pub const ALL: &[&str] = &[
        CPUS,
        MEM,
        ACCEL,
        NETWORKING,
        STATE,
        DETACHED,
        UEFI,
        VSOCK_PORTS,
    ];
}

/// A read-only key/value lookup standing in for the process environment.
///
/// `Some` means the variable is set, even if its value is the empty string.
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values still count as set
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
