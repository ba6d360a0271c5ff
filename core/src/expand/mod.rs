//! Beacon expansion: stretch a short beacon into `len_in_bytes` uniform bytes.
//!
//! Fixed-output hashes go through [`expand_fixed`], which chains digests
//! block by block. Extensible-output functions go through [`expand_xof`],
//! which squeezes the whole output from a single absorb.

mod fixed;
mod xof;
pub use fixed::*;
pub use xof::*;
