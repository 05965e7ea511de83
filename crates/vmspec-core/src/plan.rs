//! Launch plan assembly
//!
//! Combines the scalar option resolution and disk descriptor parsing into
//! the record handed to the image builder.

use crate::Result;
use crate::disk::Disks;
use crate::env::{EnvSource, keys};
use crate::resolver::ValueResolver;
use crate::size::parse_int_array;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CPUS: i64 = 1;
pub const DEFAULT_MEM_MB: i64 = 1024;
pub const DEFAULT_ACCEL: &str = "kvm";
pub const DEFAULT_NETWORKING: &str = "user";

/// Raw flag values as given on the command line.
///
/// Options the user did not pass carry their zero value (`0`, `""`) or
/// `None`, so they never override the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchFlags {
    pub name: String,
    pub cpus: i64,
    pub mem: i64,
    pub accel: String,
    pub networking: String,
    pub state: String,
    pub detached: Option<bool>,
    pub uefi: Option<bool>,
    pub vsock_ports: String,
    pub disks: Vec<String>,
}

/// Fully resolved launch parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub name: String,
    pub cpus: i64,
    /// Memory in megabytes
    pub mem: i64,
    pub accel: String,
    pub networking: String,
    pub state_dir: String,
    pub detached: bool,
    pub uefi: bool,
    pub vsock_ports: Vec<i64>,
    pub disks: Disks,
}

impl LaunchPlan {
    /// Resolve every option in `flags` against the resolver's environment.
    ///
    /// Disk descriptors are parsed in order; the first malformed descriptor
    /// or port list aborts the whole plan.
    pub fn resolve<E: EnvSource>(
        resolver: &ValueResolver<E>,
        flags: &LaunchFlags,
    ) -> Result<Self> {
        let default_state = format!("{}-state", flags.name);

        let vsock_ports = resolver.resolve_string(keys::VSOCK_PORTS, &flags.vsock_ports, "");
        let vsock_ports = parse_int_array(&vsock_ports, ",")?;

        let mut disks = Disks::new();
        for spec in &flags.disks {
            disks.push_spec(spec)?;
        }

        let plan = Self {
            name: flags.name.clone(),
            cpus: resolver.resolve_int(keys::CPUS, flags.cpus, DEFAULT_CPUS),
            mem: resolver.resolve_int(keys::MEM, flags.mem, DEFAULT_MEM_MB),
            accel: resolver.resolve_string(keys::ACCEL, &flags.accel, DEFAULT_ACCEL),
            networking: resolver.resolve_string(
                keys::NETWORKING,
                &flags.networking,
                DEFAULT_NETWORKING,
            ),
            state_dir: resolver.resolve_string(keys::STATE, &flags.state, &default_state),
            detached: resolver.resolve_bool_flag(keys::DETACHED, flags.detached),
            uefi: resolver.resolve_bool_flag(keys::UEFI, flags.uefi),
            vsock_ports,
            disks,
        };

        tracing::debug!(?plan, "Resolved launch plan");
        Ok(plan)
    }
}
