//! Option resolution and disk descriptor parsing for vmspec
//!
//! This crate turns the competing sources of a VM launch option into a single
//! value, and turns compact `--disk` descriptors into structured records:
//!
//! - **Value resolution**: environment variable, then flag, then default
//! - **Size literals**: `N`, `NM` or `NG`, always reported in megabytes
//! - **Integer lists**: delimited lists parsed all-or-nothing
//! - **Disk descriptors**: `PATH,size=N,format=FMT` accumulated in order
//!
//! # Example
//!
//! ```
//! use vmspec_core::{Disks, ValueResolver};
//! use std::collections::HashMap;
//!
//! let mut env = HashMap::new();
//! env.insert("VMSPEC_MEM".to_string(), "2048".to_string());
//!
//! let resolver = ValueResolver::with_env(env);
//! assert_eq!(resolver.resolve_int("VMSPEC_MEM", 0, 1024), 2048);
//!
//! let mut disks = Disks::new();
//! disks.push_spec("file=/tmp/a.img,size=512M,format=qcow2").unwrap();
//! assert_eq!(disks[0].size, 512);
//! ```

pub mod disk;
pub mod env;
pub mod error;
pub mod plan;
pub mod resolver;
pub mod size;

pub use disk::{DiskConfig, DiskKey, Disks};
pub use env::{EnvSource, ProcessEnv};
pub use error::{Error, Result};
pub use plan::{LaunchFlags, LaunchPlan};
pub use resolver::{ValueResolver, parse_env_bool};
pub use size::{parse_int_array, parse_size_mb};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_error_names_the_key() {
        let error = Error::UnknownKey {
            key: "bogus".to_string(),
        };

        let display = format!("{}", error);
        assert!(
            display.contains("bogus"),
            "Error display should contain the key, got: {}",
            display
        );
        assert!(!error.is_parse_error());
    }
}
