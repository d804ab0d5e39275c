#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! checksum implements the hash-derived tail that gets appended to entropy
//! before the combined bits are split into word indices. The checksum is what
//! lets a transcription error in a mnemonic be detected when the entropy is
//! recovered.

use sha2::{Digest, Sha256};

use crate::entropy::Entropy;

/// Checksum is a bit string of length ENT/32 (4 to 8 bits depending on the
/// entropy length), stored right-aligned in a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    value: u8,
    len: usize,
}

impl Checksum {
    /// from_parts reassembles a checksum from its raw value and bit length,
    /// as extracted from the tail of a mnemonic's bit string.
    pub(crate) fn from_parts(value: u8, len: usize) -> Self {
        Checksum { value, len }
    }

    /// len returns the number of bits in the checksum.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// value returns the checksum bits, right-aligned in a byte.
    pub fn value(&self) -> u8 {
        self.value
    }
}

/// checksum computes the checksum of the given entropy: the high-order ENT/32
/// bits of the first byte of SHA-256(entropy). The result is a pure function
/// of the entropy; invalid entropy lengths are unrepresentable because
/// Entropy validates its length on construction.
pub fn checksum(entropy: &Entropy) -> Checksum {
    let digest = Sha256::digest(entropy.as_bytes());
    let len = entropy.bit_len() / 32;
    Checksum {
        value: digest[0] >> (8 - len),
        len,
    }
}
