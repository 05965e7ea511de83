//! CLI argument parsing using clap derive

use clap::Parser;
use vmspec_core::LaunchFlags;

/// Resolve VM launch options from flags, environment and defaults
///
/// Each scalar option can also be set through its VMSPEC_* environment
/// variable. A flag overrides the environment unless it carries the
/// default value.
///
/// Examples:
///   vmspec alpine --mem 2048
///   vmspec alpine --disk size=4G --disk file=data.img,format=raw
///   VMSPEC_CPUS=4 vmspec alpine --json
#[derive(Parser, Debug)]
#[command(name = "vmspec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the resolved plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Name of the image to launch
    pub name: String,

    /// Number of CPUs [env: VMSPEC_CPUS] [default: 1]
    #[arg(long, value_name = "N")]
    pub cpus: Option<i64>,

    /// Amount of memory in MB [env: VMSPEC_MEM] [default: 1024]
    #[arg(long, value_name = "MB")]
    pub mem: Option<i64>,

    /// Hardware acceleration [env: VMSPEC_ACCEL] [default: kvm]
    #[arg(long, value_name = "NAME")]
    pub accel: Option<String>,

    /// Networking mode [env: VMSPEC_NETWORKING] [default: user]
    #[arg(long, value_name = "MODE")]
    pub networking: Option<String>,

    /// State directory [env: VMSPEC_STATE] [default: <NAME>-state]
    #[arg(long, value_name = "DIR")]
    pub state: Option<String>,

    /// Run in the background [env: VMSPEC_DETACHED]
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub detached: Option<bool>,

    /// Boot with UEFI firmware [env: VMSPEC_UEFI]
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub uefi: Option<bool>,

    /// Comma-separated vsock ports to forward [env: VMSPEC_VSOCK_PORTS]
    #[arg(long, value_name = "LIST")]
    pub vsock_ports: Option<String>,

    /// Disk descriptor, repeatable: [file=]PATH,size=N[M|G],format=FMT
    #[arg(long = "disk", value_name = "SPEC")]
    pub disks: Vec<String>,
}

impl Cli {
    /// Raw flag values for option resolution
    pub fn launch_flags(&self) -> LaunchFlags {
        LaunchFlags {
            name: self.name.clone(),
            cpus: self.cpus.unwrap_or_default(),
            mem: self.mem.unwrap_or_default(),
            accel: self.accel.clone().unwrap_or_default(),
            networking: self.networking.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            detached: self.detached,
            uefi: self.uefi,
            vsock_ports: self.vsock_ports.clone().unwrap_or_default(),
            disks: self.disks.clone(),
        }
    }
}
