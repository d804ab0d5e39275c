#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! entropy implements generation and validation of the raw random material a
//! mnemonic encodes. Generation always goes through an injected source
//! implementing the rand_core traits, so tests can substitute a fixed source;
//! SystemEntropy is the secure default backed by userspace entropy.

use rand_core::{CryptoRng, RngCore};
use userspace_rng::random256;

use crate::error::{MnemonicError, Result};

/// ENT_VALUES lists the allowed entropy bit lengths.
pub const ENT_VALUES: [usize; 5] = [128, 160, 192, 224, 256];

/// Entropy is a byte sequence whose bit length is one of ENT_VALUES. It is
/// immutable once constructed, which makes every downstream computation a
/// pure function of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /// from_bytes validates that the byte length corresponds to an allowed
    /// bit length and wraps the bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if !ENT_VALUES.contains(&(bytes.len() * 8)) {
            return Err(MnemonicError::InvalidEntropyLength(bytes.len() * 8));
        }
        Ok(Entropy(bytes))
    }

    /// from_hex parses the boundary representation of entropy: a hex string
    /// of exactly bits/4 characters for one of the allowed bit lengths.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| MnemonicError::InvalidEntropyHex(format!("'{}': {}", hex_str, e)))?;
        Entropy::from_bytes(bytes)
    }

    /// generate draws bits/8 cryptographically secure random bytes from the
    /// injected source. A failing source is fatal and propagates; the library
    /// never retries and never falls back to a weaker source.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, bits: usize) -> Result<Self> {
        if !ENT_VALUES.contains(&bits) {
            return Err(MnemonicError::InvalidEntropyLength(bits));
        }
        let mut bytes = vec![0u8; bits / 8];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| MnemonicError::EntropySourceFailure(e.to_string()))?;
        Ok(Entropy(bytes))
    }

    /// as_bytes returns the entropy bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// bit_len returns the entropy length in bits.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// to_hex returns the boundary representation: lowercase hex, bits/4
    /// characters long.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// random_entropy generates entropy of the given bit length using the system
/// entropy source.
pub fn random_entropy(bits: usize) -> Result<Entropy> {
    Entropy::generate(&mut SystemEntropy, bits)
}

/// SystemEntropy adapts the userspace-rng secure generator to the rand_core
/// traits so it can stand in wherever an injected entropy source is expected.
#[derive(Default)]
pub struct SystemEntropy;

impl CryptoRng for SystemEntropy {}

impl RngCore for SystemEntropy {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // random256 yields 32 bytes per call; larger requests are filled in
        // consecutive independent blocks.
        for chunk in dest.chunks_mut(32) {
            let block = random256();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_generate_lengths() {
        for bits in ENT_VALUES {
            let entropy = random_entropy(bits).unwrap();
            assert_eq!(entropy.bit_len(), bits);
            assert_eq!(entropy.as_bytes().len(), bits / 8);
            assert_eq!(entropy.to_hex().len(), bits / 4);
        }
    }

    #[test]
    fn check_generate_rejects_bad_lengths() {
        for bits in [0, 64, 96, 129, 200, 300, 512] {
            let err = random_entropy(bits).unwrap_err();
            assert_eq!(err, MnemonicError::InvalidEntropyLength(bits));
        }
    }

    #[test]
    fn check_from_hex() {
        let entropy = Entropy::from_hex("00000000000000000000000000000000").unwrap();
        assert_eq!(entropy.bit_len(), 128);
        assert_eq!(entropy.as_bytes(), [0u8; 16]);
        assert_eq!(entropy.to_hex(), "00000000000000000000000000000000");

        // Not hex at all.
        assert!(matches!(
            Entropy::from_hex("zz000000000000000000000000000000"),
            Err(MnemonicError::InvalidEntropyHex(_))
        ));

        // Valid hex of a disallowed length.
        assert_eq!(
            Entropy::from_hex("0000").unwrap_err(),
            MnemonicError::InvalidEntropyLength(16)
        );
    }

    #[test]
    fn check_system_entropy_spread() {
        // Two independent draws colliding would indicate a broken source.
        let a = random_entropy(256).unwrap();
        let b = random_entropy(256).unwrap();
        assert_ne!(a, b);
    }
}
