#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! error defines the failure taxonomy for the crate. Every validation failure
//! is raised at the boundary of the offending operation and carries the
//! offending value, so callers never see a generic failure. Nothing in this
//! crate retries: a deterministic validation failure cannot succeed on a
//! second attempt, and retrying entropy generation would mask a broken
//! entropy source.

use thiserror::Error;

/// Result is the crate-wide result alias.
pub type Result<T> = core::result::Result<T, MnemonicError>;

/// MnemonicError enumerates every failure this library can raise.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    /// The entropy bit length is not one of 128, 160, 192, 224 or 256.
    #[error("entropy length has to be one of 128, 160, 192, 224 or 256 bits; got {0} bits")]
    InvalidEntropyLength(usize),

    /// An entropy string at the boundary is not valid hexadecimal.
    #[error("entropy is not a valid hex string: {0}")]
    InvalidEntropyHex(String),

    /// A word list did not contain exactly 2048 words.
    #[error("wordlist has to have 2048 words; got {0} words")]
    InvalidWordlistLength(usize),

    /// A word list contained the same word twice.
    #[error("wordlist contains duplicate word '{0}'")]
    DuplicateWord(String),

    /// A word list entry contains a space character, which is reserved for
    /// separating mnemonic words.
    #[error("wordlist entry '{0}' contains a space character")]
    InvalidWordlistEntry(String),

    /// A word index fell outside the range 0..=2047.
    #[error("word index {0} is out of range 0..=2047")]
    IndexOutOfRange(usize),

    /// A mnemonic word is not present in the word list.
    #[error("word '{0}' is not in the wordlist")]
    UnknownWord(String),

    /// A mnemonic did not contain 12, 15, 18, 21 or 24 words.
    #[error("mnemonic has to have 12, 15, 18, 21 or 24 words; got {0} words")]
    InvalidMnemonicLength(usize),

    /// The checksum bits embedded in a mnemonic do not match the checksum
    /// recomputed from the entropy it encodes.
    #[error("mnemonic checksum does not match the entropy it encodes")]
    ChecksumMismatch,

    /// The injected entropy source failed. This is fatal; the library never
    /// falls back to a weaker source.
    #[error("entropy source failure: {0}")]
    EntropySourceFailure(String),
}
