use crate::error::{ExtenderError, InvalidInput};

/// I2OSP: big-endian encoding of `value` into exactly `N` bytes.
///
/// Fails instead of truncating when `value` needs more than `N` bytes.
pub fn i2osp<const N: usize>(value: usize) -> Result<[u8; N], ExtenderError> {
    let be = (value as u64).to_be_bytes();
    let split = be.len().saturating_sub(N);
    if N < be.len() && be[..split].iter().any(|&b| b != 0) {
        return Err(InvalidInput::IntegerTooWide { value, width: N }.into());
    }

    let mut out = [0u8; N];
    let pad = N.saturating_sub(be.len());
    out[pad..].copy_from_slice(&be[split..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_big_endian() {
        assert_eq!(i2osp::<2>(0).unwrap(), [0x00, 0x00]);
        assert_eq!(i2osp::<2>(1).unwrap(), [0x00, 0x01]);
        assert_eq!(i2osp::<2>(0x0102).unwrap(), [0x01, 0x02]);
        assert_eq!(i2osp::<1>(255).unwrap(), [0xff]);
    }

    #[test]
    fn rejects_values_that_do_not_fit() {
        assert_eq!(
            i2osp::<1>(256),
            Err(InvalidInput::IntegerTooWide { value: 256, width: 1 }.into())
        );
        assert_eq!(
            i2osp::<2>(65536),
            Err(InvalidInput::IntegerTooWide { value: 65536, width: 2 }.into())
        );
        assert!(i2osp::<2>(65535).is_ok());
    }

    #[test]
    fn widths_beyond_u64_are_zero_padded() {
        let out = i2osp::<10>(0x0a0b).unwrap();
        assert_eq!(out, [0, 0, 0, 0, 0, 0, 0, 0, 0x0a, 0x0b]);
    }
}
