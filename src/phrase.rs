#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! phrase implements functions for moving between entropy and a mnemonic
//! phrase. The forward direction packs entropy and its checksum into 11-bit
//! indices and maps them through a word list; the reverse direction parses
//! the words back into indices, splits the bits into entropy and checksum,
//! and verifies the checksum against the recovered entropy.

use rand_core::{CryptoRng, RngCore};

use crate::checksum::{checksum, Checksum};
use crate::entropy::Entropy;
use crate::error::{MnemonicError, Result};
use crate::indices::{ent_bits_for_word_count, pack, unpack};
use crate::wordlist::WordList;

/// compose maps each index through the word list and joins the words with
/// single spaces. Indices are range-checked even though pack can never emit
/// an out-of-range value, since a sequence may also arrive from untrusted
/// input.
pub fn compose(indices: &[u16], words: &WordList) -> Result<String> {
    let mut parts = Vec::with_capacity(indices.len());
    for &index in indices {
        parts.push(words.at_index(usize::from(index))?);
    }
    Ok(parts.join(" "))
}

/// parse splits a mnemonic into words and maps each word back to its index.
/// The word count is validated before any lookup is attempted; a word missing
/// from the list fails with UnknownWord naming the offending word.
pub fn parse(mnemonic: &str, words: &WordList) -> Result<Vec<u16>> {
    let parts: Vec<&str> = mnemonic.split_whitespace().collect();
    ent_bits_for_word_count(parts.len())?;
    parts.iter().map(|word| words.index_of(word)).collect()
}

/// mnemonic_from_entropy converts entropy into its mnemonic phrase.
pub fn mnemonic_from_entropy(entropy: &Entropy, words: &WordList) -> Result<String> {
    compose(&pack(entropy), words)
}

/// generate_mnemonic draws fresh entropy of the given bit length from the
/// injected source and converts it into a mnemonic phrase.
pub fn generate_mnemonic<R: RngCore + CryptoRng>(
    rng: &mut R,
    bits: usize,
    words: &WordList,
) -> Result<String> {
    mnemonic_from_entropy(&Entropy::generate(rng, bits)?, words)
}

/// reverse_mnemonic recovers the entropy a mnemonic encodes and verifies that
/// the checksum bits embedded in the mnemonic match the checksum recomputed
/// from the recovered entropy. A mnemonic with a corrupted checksum tail
/// fails with ChecksumMismatch.
pub fn reverse_mnemonic(mnemonic: &str, words: &WordList) -> Result<Entropy> {
    let (entropy, embedded) = split_mnemonic(mnemonic, words)?;
    if checksum(&entropy) != embedded {
        return Err(MnemonicError::ChecksumMismatch);
    }
    Ok(entropy)
}

/// reverse_mnemonic_lenient recovers the entropy a mnemonic encodes without
/// verifying the embedded checksum bits. Use this only when compatibility
/// with inputs whose checksum tail is known to be corrupted is required;
/// reverse_mnemonic is the correct choice everywhere else.
pub fn reverse_mnemonic_lenient(mnemonic: &str, words: &WordList) -> Result<Entropy> {
    let (entropy, _) = split_mnemonic(mnemonic, words)?;
    Ok(entropy)
}

// split_mnemonic performs the shared parse and unpack steps of reverse
// derivation, yielding the recovered entropy and the embedded checksum bits.
fn split_mnemonic(mnemonic: &str, words: &WordList) -> Result<(Entropy, Checksum)> {
    unpack(&parse(mnemonic, words)?)
}
