use digest::{Digest, Output};
use log::trace;

use crate::dst::DstPrime;
use crate::encoding::i2osp;
use crate::error::{ExtenderError, InvalidInput};

/// Largest block count addressable by the 2-byte block counter.
pub const MAX_BLOCKS: usize = u16::MAX as usize;

/// Expand `beacon` into `len_in_bytes` uniform bytes with fixed-output hash `H`.
///
/// b_0 = H(beacon || I2OSP(0, 2) || DST′) is a keying block and is never
/// emitted. b_1 = H(b_0 || I2OSP(1, 2) || DST′), and for i in 2..=ell
/// b_i = H((b_0 XOR b_{i-1}) || I2OSP(i, 2) || DST′). The output is the
/// first `len_in_bytes` bytes of b_1 || ... || b_ell.
pub fn expand_fixed<H: Digest>(
    beacon: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<Vec<u8>, ExtenderError> {
    let dst_prime = DstPrime::new(dst)?;
    let b_in_bytes = <H as Digest>::output_size();
    let ell = len_in_bytes.div_ceil(b_in_bytes);
    if ell > MAX_BLOCKS {
        return Err(InvalidInput::TooManyBlocks(ell).into());
    }
    trace!(
        "expand_fixed: b_in_bytes={} ell={} len_in_bytes={}",
        b_in_bytes,
        ell,
        len_in_bytes
    );

    let b_0 = H::new()
        .chain_update(beacon)
        .chain_update(i2osp::<2>(0)?)
        .chain_update(&dst_prime)
        .finalize();

    let mut b_i = H::new()
        .chain_update(&b_0)
        .chain_update(i2osp::<2>(1)?)
        .chain_update(&dst_prime)
        .finalize();

    let mut uniform_bytes = Vec::with_capacity(ell.max(1) * b_in_bytes);
    uniform_bytes.extend_from_slice(&b_i);

    for i in 2..=ell {
        b_i = H::new()
            .chain_update(xor_blocks::<H>(&b_0, &b_i))
            .chain_update(i2osp::<2>(i)?)
            .chain_update(&dst_prime)
            .finalize();
        uniform_bytes.extend_from_slice(&b_i);
    }

    uniform_bytes.truncate(len_in_bytes);
    Ok(uniform_bytes)
}

/// Byte-wise XOR of two digests of the same hash; lengths match by type.
fn xor_blocks<H: Digest>(a: &Output<H>, b: &Output<H>) -> Output<H> {
    let mut out = a.clone();
    for (o, x) in out.iter_mut().zip(b.iter()) {
        *o ^= x;
    }
    out
}
