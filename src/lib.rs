#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! seed39 is a crate with helper functions for working with BIP-39 style
//! mnemonic phrases: generating cryptographic entropy, rendering it as a
//! sequence of dictionary words with an embedded checksum, recovering the
//! entropy from such a phrase with checksum verification, and stretching a
//! phrase plus an optional passphrase into a 64-byte seed.
//!
//! All operations are synchronous and pure given their inputs, apart from a
//! single bounded read of the injected entropy source during generation. A
//! WordList, once constructed, is read-only and safe to share across
//! concurrent readers.

pub mod checksum;
pub mod entropy;
pub mod error;
pub mod indices;
pub mod phrase;
pub mod seed;
pub mod wordlist;

pub use checksum::{checksum, Checksum};
pub use entropy::{random_entropy, Entropy, SystemEntropy, ENT_VALUES};
pub use error::{MnemonicError, Result};
pub use phrase::{
    compose, generate_mnemonic, mnemonic_from_entropy, parse, reverse_mnemonic,
    reverse_mnemonic_lenient,
};
pub use seed::{derive_seed, derive_seed_checked, Seed, PBKDF2_ROUNDS, SEED_LEN};
pub use wordlist::{WordList, WORDLIST_SIZE};
