//! Semantic versions and bump classes

use crate::{ReleaseError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Granularity of a version increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BumpClass {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpClass {
    /// Every accepted class, in the order shown to users
    pub const ALL: [BumpClass; 3] = [BumpClass::Major, BumpClass::Minor, BumpClass::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpClass::Major => "major",
            BumpClass::Minor => "minor",
            BumpClass::Patch => "patch",
        }
    }

    /// Comma-separated list of valid class names
    pub fn valid_names() -> String {
        Self::ALL.iter().map(BumpClass::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for BumpClass {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpClass::Major),
            "minor" => Ok(BumpClass::Minor),
            "patch" => Ok(BumpClass::Patch),
            other => Err(ReleaseError::InvalidBumpClass(other.to_string())),
        }
    }
}

impl fmt::Display for BumpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Next version for a bump class. Fails if the bumped component is
    /// already `u64::MAX`.
    pub fn bump(self, class: BumpClass) -> Result<Version> {
        let next = match class {
            BumpClass::Major => self.major.checked_add(1).map(|major| Version::new(major, 0, 0)),
            BumpClass::Minor => self
                .minor
                .checked_add(1)
                .map(|minor| Version::new(self.major, minor, 0)),
            BumpClass::Patch => self
                .patch
                .checked_add(1)
                .map(|patch| Version::new(self.major, self.minor, patch)),
        };
        next.ok_or_else(|| ReleaseError::VersionOverflow {
            version: self.to_string(),
            class: class.as_str(),
        })
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    /// Accepts exactly three dot-separated decimal integers; no signs,
    /// whitespace, or pre-release/build suffixes.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ReleaseError::InvalidVersionFormat(s.to_string());

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }

        Ok(Version::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
