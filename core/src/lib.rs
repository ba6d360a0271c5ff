//! Beacon extender: deterministic expansion of a short randomness beacon
//! into an arbitrary-length uniform byte string, in the style of the
//! hash-to-curve `expand_message` constructions.

pub mod dst;
pub mod encoding;
pub mod error;
pub mod expand;
pub mod kat;
pub mod registry;
pub mod types;

pub use dst::{suite_dst, DstPrime, MAX_DST_LEN};
pub use error::{ExtenderError, InvalidInput};
pub use expand::{expand_fixed, expand_xof, xof_reader, MAX_BLOCKS};
pub use registry::{lookup, HashDescriptor, HashRegistry, Primitive, HASH_REGISTRY};
pub use types::ExpandAlgorithm;
