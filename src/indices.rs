#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! indices implements the bit-level codec between entropy plus checksum and
//! the 11-bit word indices of a mnemonic. Packing concatenates the entropy
//! bits (big-endian, byte-major) with the checksum bits and slices the result
//! into consecutive 11-bit groups; unpacking is the exact inverse, splitting
//! the reassembled bit string back into entropy bytes and checksum bits.

use crate::checksum::{checksum, Checksum};
use crate::entropy::{Entropy, ENT_VALUES};
use crate::error::{MnemonicError, Result};
use crate::wordlist::WORDLIST_SIZE;

/// INDEX_BITS is the bit width of a single word index.
pub const INDEX_BITS: usize = 11;

/// ent_bits_for_word_count maps a mnemonic word count to the entropy bit
/// length it encodes, per the fixed table {12→128, 15→160, 18→192, 21→224,
/// 24→256}. Any other word count is invalid.
pub fn ent_bits_for_word_count(words: usize) -> Result<usize> {
    for ent in ENT_VALUES {
        if (ent + ent / 32) / INDEX_BITS == words {
            return Ok(ent);
        }
    }
    Err(MnemonicError::InvalidMnemonicLength(words))
}

/// pack converts entropy into the index sequence of its mnemonic. The
/// combined entropy and checksum length is always a multiple of 11, so the
/// accumulator is guaranteed to drain completely.
pub fn pack(entropy: &Entropy) -> Vec<u16> {
    let cs = checksum(entropy);
    let total_bits = entropy.bit_len() + cs.len();
    let mut out = Vec::with_capacity(total_bits / INDEX_BITS);

    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    for &byte in entropy.as_bytes() {
        acc = (acc << 8) | u32::from(byte);
        acc_bits += 8;
        while acc_bits >= INDEX_BITS {
            out.push(((acc >> (acc_bits - INDEX_BITS)) & 0x7ff) as u16);
            acc_bits -= INDEX_BITS;
        }
    }

    // Append the checksum bits; they complete the final index.
    acc = (acc << cs.len()) | u32::from(cs.value());
    acc_bits += cs.len();
    while acc_bits >= INDEX_BITS {
        out.push(((acc >> (acc_bits - INDEX_BITS)) & 0x7ff) as u16);
        acc_bits -= INDEX_BITS;
    }
    debug_assert_eq!(acc_bits, 0);

    out
}

/// unpack converts an index sequence back into the entropy bytes and the
/// checksum bits it encodes. The total bit count is inferred from the number
/// of indices; a count outside {12, 15, 18, 21, 24} fails with
/// InvalidMnemonicLength, and any index at or above 2048 fails with
/// IndexOutOfRange since indices may arrive from untrusted input.
pub fn unpack(indices: &[u16]) -> Result<(Entropy, Checksum)> {
    let ent_bits = ent_bits_for_word_count(indices.len())?;
    let cs_bits = ent_bits / 32;

    let mut bytes = Vec::with_capacity(ent_bits / 8);
    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    for &index in indices {
        if usize::from(index) >= WORDLIST_SIZE {
            return Err(MnemonicError::IndexOutOfRange(usize::from(index)));
        }
        acc = (acc << INDEX_BITS) | u32::from(index);
        acc_bits += INDEX_BITS;
        while acc_bits >= 8 && bytes.len() < ent_bits / 8 {
            bytes.push(((acc >> (acc_bits - 8)) & 0xff) as u8);
            acc_bits -= 8;
        }
    }

    // Exactly the checksum bits remain in the accumulator.
    debug_assert_eq!(acc_bits, cs_bits);
    let cs_value = (acc & ((1 << cs_bits) - 1)) as u8;

    let entropy = Entropy::from_bytes(bytes)?;
    Ok((entropy, Checksum::from_parts(cs_value, cs_bits)))
}
