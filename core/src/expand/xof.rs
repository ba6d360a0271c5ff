use digest::{ExtendableOutput, Update, XofReader};
use log::trace;

use crate::dst::DstPrime;
use crate::error::ExtenderError;

/// Absorb `beacon || DST′` into a fresh `X` and return its output reader.
///
/// Reading `n` bytes from the reader yields `expand_xof::<X>(beacon, dst, n)`;
/// longer reads extend shorter ones.
pub fn xof_reader<X>(beacon: &[u8], dst: &[u8]) -> Result<X::Reader, ExtenderError>
where
    X: Default + Update + ExtendableOutput,
{
    let dst_prime = DstPrime::new(dst)?;
    let mut xof = X::default();
    xof.update(beacon);
    xof.update(dst_prime.as_bytes());
    Ok(xof.finalize_xof())
}

/// Expand `beacon` into `len_in_bytes` uniform bytes with extensible-output function `X`.
pub fn expand_xof<X>(beacon: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>, ExtenderError>
where
    X: Default + Update + ExtendableOutput,
{
    let mut reader = xof_reader::<X>(beacon, dst)?;
    trace!("expand_xof: len_in_bytes={}", len_in_bytes);

    let mut uniform_bytes = vec![0u8; len_in_bytes];
    reader.read(&mut uniform_bytes);
    Ok(uniform_bytes)
}
