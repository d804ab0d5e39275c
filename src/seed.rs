#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! seed implements the key-stretching step that turns a mnemonic phrase and
//! an optional passphrase into the final 64-byte seed consumed by downstream
//! key derivation. The mnemonic and the salt string "mnemonic" + passphrase
//! are both NFKD-normalized before stretching, so visually identical inputs
//! in different Unicode encodings derive the same seed.

use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;
use crate::wordlist::WordList;

/// SEED_LEN is the byte length of a derived seed.
pub const SEED_LEN: usize = 64;

/// PBKDF2_ROUNDS is the fixed iteration count of the key-stretching function.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed is the 64-byte secret derived from a mnemonic and passphrase. The
/// bytes are overwritten with zeros when the value is dropped. Seed carries
/// no Debug implementation so the secret cannot leak through formatting.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// as_bytes returns the raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// to_hex returns the boundary representation of the seed: 128 lowercase
    /// hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// derive_seed stretches a mnemonic and passphrase into a seed: both the
/// mnemonic and the string "mnemonic" + passphrase are NFKD-normalized, then
/// fed through PBKDF2-HMAC-SHA512 with 2048 iterations and a 64-byte output.
/// The result is a pure function of its inputs.
///
/// The mnemonic is not validated against a word list here; the derivation
/// itself does not require one. Use derive_seed_checked to reject mnemonics
/// containing words outside a known word list.
pub fn derive_seed(mnemonic: &str, passphrase: &str) -> Seed {
    let password: String = mnemonic.nfkd().collect();
    let salt: String = format!("mnemonic{}", passphrase).nfkd().collect();

    let mut out = [0u8; SEED_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut out);
    Seed(out)
}

/// derive_seed_checked verifies that every whitespace-separated word of the
/// mnemonic appears in the given word list, failing with UnknownWord
/// otherwise, and then derives the seed exactly as derive_seed does.
pub fn derive_seed_checked(mnemonic: &str, passphrase: &str, words: &WordList) -> Result<Seed> {
    for word in mnemonic.split_whitespace() {
        words.index_of(word)?;
    }
    Ok(derive_seed(mnemonic, passphrase))
}
