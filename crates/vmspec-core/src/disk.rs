//! Disk descriptors
//!
//! A descriptor is one `--disk` token: comma-separated parts, each either a
//! bare path or a `key=value` pair.
//!
//! ```text
//! PATH | file=PATH | size=N[M|G] | format=FMT
//! ```
//!
//! Repeated descriptors accumulate into [`Disks`] in declaration order,
//! which downstream consumers use to assign device ordinals.

use crate::size::parse_size_mb;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// One disk to be created or attached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskConfig {
    /// Backing file. Empty when the descriptor named none.
    pub path: String,

    /// Size in megabytes, `0` when not given
    pub size: u64,

    /// Image format tag such as `qcow2`. Empty lets the builder choose.
    pub format: String,
}

impl DiskConfig {
    /// Parse a single descriptor into a fresh record
    pub fn parse(spec: &str) -> Result<Self> {
        let mut disk = Self::default();
        for part in spec.split(',') {
            match part.split_once('=') {
                None => disk.path = part.to_string(),
                Some((key, value)) => key.parse::<DiskKey>()?.apply(&mut disk, value)?,
            }
        }
        Ok(disk)
    }
}

impl FromStr for DiskConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DiskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.path, self.size, self.format)
    }
}

/// Keys accepted in a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskKey {
    File,
    Size,
    Format,
}

impl DiskKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Size => "size",
            Self::Format => "format",
        }
    }

    /// Apply `value` to the matching field of `disk`
    pub fn apply(self, disk: &mut DiskConfig, value: &str) -> Result<()> {
        match self {
            Self::File => disk.path = value.to_string(),
            Self::Size => disk.size = parse_size_mb(value)?,
            Self::Format => disk.format = value.to_string(),
        }
        Ok(())
    }
}

impl FromStr for DiskKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(Self::File),
            "size" => Ok(Self::Size),
            "format" => Ok(Self::Format),
            _ => Err(Error::UnknownKey { key: s.to_string() }),
        }
    }
}

/// Ordered, append-only list of disks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Disks(Vec<DiskConfig>);

impl Disks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `spec` and append the result, returning its position.
    ///
    /// On error nothing is appended and the existing entries are untouched.
    pub fn push_spec(&mut self, spec: &str) -> Result<usize> {
        let disk = DiskConfig::parse(spec)?;
        let index = self.0.len();
        tracing::debug!(index, %disk, "Adding disk");
        self.0.push(disk);
        Ok(index)
    }

    pub fn into_inner(self) -> Vec<DiskConfig> {
        self.0
    }
}

impl Deref for Disks {
    type Target = [DiskConfig];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<DiskConfig>> for Disks {
    fn from(disks: Vec<DiskConfig>) -> Self {
        Self(disks)
    }
}

impl IntoIterator for Disks {
    type Item = DiskConfig;
    type IntoIter = std::vec::IntoIter<DiskConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Disks {
    type Item = &'a DiskConfig;
    type IntoIter = std::slice::Iter<'a, DiskConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Disks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, disk) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", disk)?;
        }
        f.write_str("]")
    }
}
