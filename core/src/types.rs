//! Shared types for the beacon extender.

use std::fmt;

/// Expansion algorithm a hash primitive requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpandAlgorithm {
    /// Chained digests from a fixed-output hash.
    FixedHash,
    /// Single absorb and squeeze from an extensible-output function.
    Xof,
}

impl ExpandAlgorithm {
    /// Marker inserted into suite DSTs ahead of the hash name.
    pub fn dst_marker(self) -> &'static str {
        match self {
            ExpandAlgorithm::FixedHash => "",
            ExpandAlgorithm::Xof => "-with-xof",
        }
    }
}

impl fmt::Display for ExpandAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandAlgorithm::FixedHash => f.write_str("fixed-hash"),
            ExpandAlgorithm::Xof => f.write_str("xof"),
        }
    }
}
