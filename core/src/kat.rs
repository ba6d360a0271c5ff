//! Reference known-answer inputs and vector generation.

use std::fmt;

use hex_literal::hex;

use crate::error::ExtenderError;
use crate::registry::HashDescriptor;

/// DST prefix of the reference suite.
pub const KAT_DST_PREFIX: &str = "BeaconExtenderKAT-v01";

/// Hashes whose vectors are pinned in the reference set.
pub const KAT_HASHES: [&str; 2] = ["Keccak-256", "SHAKE128"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KatInput {
    pub beacon: [u8; 32],
    pub len_in_bytes: usize,
}

pub const KAT_INPUTS: [KatInput; 6] = [
    KatInput {
        beacon: hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        len_in_bytes: 32,
    },
    KatInput {
        beacon: hex!("0a0b0c0d0e0f000102030405060708090A0B0C0D0E0F00010203040506070809"),
        len_in_bytes: 1,
    },
    KatInput {
        beacon: hex!("0A0a000A0a010A0a020A0a030A0a040A0a050A0a060A0a070A0a080A0a090A0b"),
        len_in_bytes: 4,
    },
    KatInput {
        beacon: hex!("c5511916c97b90660eee5bd2e678899cd6946cdd5404d235a127067bfbd4758f"),
        len_in_bytes: 32,
    },
    KatInput {
        beacon: hex!("8876517e60e0a79c4c3ef2877df1f19a6a76aff3550c19a9e9e088a41f813b14"),
        len_in_bytes: 64,
    },
    KatInput {
        beacon: hex!("b2308b0969926631e0d74053ff20b8d167eed55b21803f4d85475b838aee8a54"),
        len_in_bytes: 68,
    },
];

/// One expanded reference input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KatVector {
    pub dst: Vec<u8>,
    pub beacon: Vec<u8>,
    pub len_in_bytes: usize,
    pub uniform_bytes: Vec<u8>,
}

impl fmt::Display for KatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "randomness_beacon = {}", hex::encode(&self.beacon))?;
        writeln!(f, "len_in_bytes      = {}", self.len_in_bytes)?;
        writeln!(f, "uniform_bytes     = {}", hex::encode(&self.uniform_bytes))
    }
}

/// Expand every [`KAT_INPUTS`] entry under `hash`'s suite DST.
pub fn vectors(hash: &HashDescriptor) -> Result<Vec<KatVector>, ExtenderError> {
    let dst = hash.suite_dst(KAT_DST_PREFIX);
    KAT_INPUTS
        .iter()
        .map(|input| {
            let uniform_bytes = hash.expand(&input.beacon, &dst, input.len_in_bytes)?;
            Ok(KatVector {
                dst: dst.clone(),
                beacon: input.beacon.to_vec(),
                len_in_bytes: input.len_in_bytes,
                uniform_bytes,
            })
        })
        .collect()
}
