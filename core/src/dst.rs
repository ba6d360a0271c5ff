use crate::encoding::i2osp;
use crate::error::{ExtenderError, InvalidInput};
use crate::types::ExpandAlgorithm;

/// Longest DST accepted by either expander.
pub const MAX_DST_LEN: usize = 255;

/// DST′ = DST || I2OSP(len(DST), 1).
///
/// Built once per expansion call and appended to every hash input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DstPrime(Vec<u8>);

impl DstPrime {
    pub fn new(dst: &[u8]) -> Result<Self, ExtenderError> {
        if dst.len() > MAX_DST_LEN {
            return Err(InvalidInput::DstTooLong(dst.len()).into());
        }
        let mut out = Vec::with_capacity(dst.len() + 1);
        out.extend_from_slice(dst);
        out.extend_from_slice(&i2osp::<1>(dst.len())?);
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for DstPrime {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Suite DST naming: `prefix || ["-with-xof"] || "-" || hash_name`.
pub fn suite_dst(prefix: &str, algorithm: ExpandAlgorithm, hash_name: &str) -> Vec<u8> {
    format!("{}{}-{}", prefix, algorithm.dst_marker(), hash_name).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_single_length_byte() {
        let p = DstPrime::new(b"abc").unwrap();
        assert_eq!(p.as_bytes(), b"abc\x03");

        let empty = DstPrime::new(b"").unwrap();
        assert_eq!(empty.as_bytes(), &[0u8]);
    }

    #[test]
    fn length_limit_is_inclusive() {
        let p = DstPrime::new(&[0x41; 255]).unwrap();
        assert_eq!(p.as_bytes().len(), 256);
        assert_eq!(p.as_bytes()[255], 0xff);

        assert_eq!(
            DstPrime::new(&[0x41; 256]),
            Err(ExtenderError::InvalidInput(InvalidInput::DstTooLong(256)))
        );
    }

    #[test]
    fn suite_names() {
        assert_eq!(
            suite_dst("BeaconExtenderKAT-v01", ExpandAlgorithm::FixedHash, "Keccak-256"),
            b"BeaconExtenderKAT-v01-Keccak-256".to_vec()
        );
        assert_eq!(
            suite_dst("BeaconExtenderKAT-v01", ExpandAlgorithm::Xof, "SHAKE128"),
            b"BeaconExtenderKAT-v01-with-xof-SHAKE128".to_vec()
        );
    }
}
