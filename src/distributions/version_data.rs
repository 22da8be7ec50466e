// Version models shared by all distribution providers

use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

/// A version exactly as a vendor publishes it: 1-5 numeric components
/// (major, minor, patch, update, build -- vendor-defined past index 2).
///
/// `Ord` is lexicographic over the components, so a longer sequence with an
/// equal prefix ranks higher. That property is what makes this type usable
/// as the tie-break key when two records coerce to the same canonical
/// version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct RawVersion(pub Vec<u32>);

impl RawVersion {
    fn component(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Coerce to the canonical form used for ordering comparisons.
    ///
    /// Components [0..3] become major/minor/patch (missing ones default to
    /// zero), a 4th component becomes the build, and a 5th is dropped --
    /// vendor metadata beyond build granularity carries no ordering weight.
    /// Lossy on purpose: two raw versions differing only past index 3 coerce
    /// to the same canonical version.
    pub fn coerce(&self) -> CanonicalVersion {
        CanonicalVersion {
            major: self.component(0),
            minor: self.component(1),
            patch: self.component(2),
            build: self.0.get(3).copied(),
        }
    }
}

impl fmt::Display for RawVersion {
    /// Keeps the vendor's published precision: `[12, 0]` prints as "12.0",
    /// not "12.0.0". A 4th component prints as `+build`; a 5th never prints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dotted = self
            .0
            .iter()
            .take(3)
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        match self.0.get(3) {
            Some(build) => write!(f, "{}+{}", dotted, build),
            None => write!(f, "{}", dotted),
        }
    }
}

/// The 3+1-component normalized version every comparison runs on.
///
/// An absent build compares as 0 but is tracked separately so display code
/// can tell "9.0.0" from "9.0.0+0".
#[derive(Debug, Clone)]
pub struct CanonicalVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: Option<u32>,
}

impl CanonicalVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build: None,
        }
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    fn key(&self) -> (u32, u32, u32, u32) {
        (self.major, self.minor, self.patch, self.build.unwrap_or(0))
    }
}

impl PartialEq for CanonicalVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CanonicalVersion {}

impl PartialOrd for CanonicalVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for CanonicalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
