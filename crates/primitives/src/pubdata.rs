use alloy_primitives::{keccak256, FixedBytes};

/// The 20-byte commitment stored in the ledger for an encoded payload.
pub type PubdataHash = FixedBytes<20>;

/// Computes the [`PubdataHash`] of an encoded payload: the low 160 bits of the
/// keccak256 digest.
pub fn pubdata_hash(payload: &[u8]) -> PubdataHash {
    let digest = keccak256(payload);
    PubdataHash::from_slice(&digest[12..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_take_low_160_bits() {
        let payload = b"payload";
        let digest = keccak256(payload);
        assert_eq!(pubdata_hash(payload).as_slice(), &digest[12..]);
    }

    #[test]
    fn test_should_be_deterministic() {
        assert_eq!(pubdata_hash(b"abc"), pubdata_hash(b"abc"));
        assert_ne!(pubdata_hash(b"abc"), pubdata_hash(b"abd"));
    }
}
