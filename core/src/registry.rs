//! Named hash descriptors and dispatch to the matching expander.
//!
//! Descriptors are built once into [`HASH_REGISTRY`] and are read-only
//! afterwards, so lookups need no synchronization. Each expansion call
//! constructs a fresh hash instance.

use digest::{Digest, ExtendableOutput, Update};
use log::{debug, warn};
use once_cell::sync::Lazy;
use sha2::Sha256;
use sha3::{Keccak256, Sha3_256, Shake128, Shake256};

use crate::dst::suite_dst;
use crate::error::ExtenderError;
use crate::expand::{expand_fixed, expand_xof};
use crate::types::ExpandAlgorithm;

/// Expander closed over a concrete primitive.
pub type ExpandFn = fn(&[u8], &[u8], usize) -> Result<Vec<u8>, ExtenderError>;

/// Concrete primitive shape behind a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    FixedHash { digest_size: usize },
    Xof,
}

#[derive(Clone, Copy)]
pub struct HashDescriptor {
    name: &'static str,
    primitive: Primitive,
    expand: ExpandFn,
}

impl HashDescriptor {
    /// Descriptor for a fixed-output hash, expanded with [`expand_fixed`].
    pub fn fixed<H: Digest>(name: &'static str) -> Self {
        Self {
            name,
            primitive: Primitive::FixedHash {
                digest_size: <H as Digest>::output_size(),
            },
            expand: expand_fixed::<H>,
        }
    }

    /// Descriptor for an extensible-output function, expanded with [`expand_xof`].
    pub fn xof<X: Default + Update + ExtendableOutput>(name: &'static str) -> Self {
        Self {
            name,
            primitive: Primitive::Xof,
            expand: expand_xof::<X>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn algorithm(&self) -> ExpandAlgorithm {
        match self.primitive {
            Primitive::FixedHash { .. } => ExpandAlgorithm::FixedHash,
            Primitive::Xof => ExpandAlgorithm::Xof,
        }
    }

    /// Digest size in bytes; `None` for variable-length XOFs.
    pub fn digest_size(&self) -> Option<usize> {
        match self.primitive {
            Primitive::FixedHash { digest_size } => Some(digest_size),
            Primitive::Xof => None,
        }
    }

    pub fn expander(&self) -> ExpandFn {
        self.expand
    }

    pub fn expand(
        &self,
        beacon: &[u8],
        dst: &[u8],
        len_in_bytes: usize,
    ) -> Result<Vec<u8>, ExtenderError> {
        (self.expand)(beacon, dst, len_in_bytes)
    }

    /// DST for this hash under a suite `prefix`, e.g. `BeaconExtenderKAT-v01-Keccak-256`.
    pub fn suite_dst(&self, prefix: &str) -> Vec<u8> {
        suite_dst(prefix, self.algorithm(), self.name)
    }
}

impl std::fmt::Debug for HashDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashDescriptor")
            .field("name", &self.name)
            .field("primitive", &self.primitive)
            .finish()
    }
}

/// Process-wide registry of supported hashes.
pub static HASH_REGISTRY: Lazy<HashRegistry> = Lazy::new(HashRegistry::with_defaults);

#[derive(Clone, Debug)]
pub struct HashRegistry {
    descriptors: Vec<HashDescriptor>,
}

impl HashRegistry {
    pub fn new(descriptors: Vec<HashDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn with_defaults() -> Self {
        Self::new(vec![
            HashDescriptor::fixed::<Keccak256>("Keccak-256"),
            HashDescriptor::fixed::<Sha256>("SHA-256"),
            HashDescriptor::fixed::<Sha3_256>("SHA3-256"),
            HashDescriptor::xof::<Shake128>("SHAKE128"),
            HashDescriptor::xof::<Shake256>("SHAKE256"),
        ])
    }

    /// Case-insensitive lookup by name.
    pub fn lookup(&self, name: &str) -> Result<&HashDescriptor, ExtenderError> {
        match self.descriptors.iter().find(|d| d.name.eq_ignore_ascii_case(name)) {
            Some(d) => {
                debug!("hash lookup {:?} -> {} ({})", name, d.name, d.algorithm());
                Ok(d)
            }
            None => {
                warn!("hash lookup {:?}: not registered", name);
                Err(ExtenderError::UnsupportedHash(name.to_string()))
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HashDescriptor> {
        self.descriptors.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.name).collect()
    }
}

/// Look up `name` in [`HASH_REGISTRY`].
pub fn lookup(name: &str) -> Result<&'static HashDescriptor, ExtenderError> {
    HASH_REGISTRY.lookup(name)
}
