use crate::alphabets::dna;
use crate::error::{OrfstatError, OrfstatResult};

/// A validated nucleotide sequence, stored uppercase.
///
/// Construction rejects bytes outside the IUPAC alphabet and folds the
/// accepted bytes to uppercase, so downstream scanners can match codons
/// and k-mers byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(mut bytes: Vec<u8>) -> OrfstatResult<Self> {
        let alphabet = dna::iupac_alphabet();
        for (pos, &b) in bytes.iter().enumerate() {
            if !alphabet.contains(b) {
                return Err(OrfstatError::InvalidChar { ch: b as char, pos });
            }
        }
        bytes.make_ascii_uppercase();
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_iupac() {
        let s = DnaSeq::new(b"ACGTN".to_vec()).unwrap();
        assert_eq!(s.as_bytes(), b"ACGTN");
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn new_uppercases() {
        let s = DnaSeq::new(b"acgtRyn".to_vec()).unwrap();
        assert_eq!(s.as_bytes(), b"ACGTRYN");
    }

    #[test]
    fn new_rejects_invalid_byte_with_position() {
        let err = DnaSeq::new(b"ACG#T".to_vec()).unwrap_err();
        match err {
            OrfstatError::InvalidChar { ch, pos } => {
                assert_eq!(ch, '#');
                assert_eq!(pos, 3);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn empty_sequence_is_valid() {
        let s = DnaSeq::new(Vec::new()).unwrap();
        assert!(s.is_empty());
    }
}
