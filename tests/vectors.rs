#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! End-to-end verification against the standard reference test vectors:
//! triples of [entropy_hex, mnemonic, seed_hex] keyed by locale, with every
//! seed derived using the passphrase "TREZOR".

use std::collections::HashMap;

use seed39::{derive_seed, mnemonic_from_entropy, reverse_mnemonic, Entropy, WordList};

const ENGLISH_VECTORS: &str = include_str!("vectors/english.json");

type VectorFile = HashMap<String, Vec<(String, String, String)>>;

// english_vectors loads the [entropy_hex, mnemonic, seed_hex] triples for the
// english locale.
fn english_vectors() -> Vec<(String, String, String)> {
    let mut file: VectorFile =
        serde_json::from_str(ENGLISH_VECTORS).expect("vector file is valid JSON");
    let vectors = file
        .remove("english")
        .expect("vector file has an english section");
    assert!(!vectors.is_empty());
    vectors
}

#[test]
fn check_vectors_forward() {
    let words = WordList::english();
    for (entropy_hex, mnemonic, _) in english_vectors() {
        let entropy = Entropy::from_hex(&entropy_hex).unwrap();
        assert_eq!(
            mnemonic_from_entropy(&entropy, words).unwrap(),
            mnemonic,
            "forward derivation mismatch for entropy {}",
            entropy_hex
        );
    }
}

#[test]
fn check_vectors_reverse() {
    let words = WordList::english();
    for (entropy_hex, mnemonic, _) in english_vectors() {
        let recovered = reverse_mnemonic(&mnemonic, words).unwrap();
        assert_eq!(
            recovered.to_hex(),
            entropy_hex,
            "reverse derivation mismatch for mnemonic '{}'",
            mnemonic
        );
    }
}

#[test]
fn check_vectors_seed() {
    for (_, mnemonic, seed_hex) in english_vectors() {
        let seed = derive_seed(&mnemonic, "TREZOR");
        assert_eq!(
            seed.to_hex(),
            seed_hex,
            "seed derivation mismatch for mnemonic '{}'",
            mnemonic
        );
    }
}

#[test]
fn check_vectors_full_pipeline() {
    // Entropy through mnemonic through recovered entropy through the same
    // mnemonic again, ending at the expected seed.
    let words = WordList::english();
    for (entropy_hex, _, seed_hex) in english_vectors() {
        let entropy = Entropy::from_hex(&entropy_hex).unwrap();
        let mnemonic = mnemonic_from_entropy(&entropy, words).unwrap();
        let recovered = reverse_mnemonic(&mnemonic, words).unwrap();
        assert_eq!(recovered, entropy);
        let again = mnemonic_from_entropy(&recovered, words).unwrap();
        assert_eq!(derive_seed(&again, "TREZOR").to_hex(), seed_hex);
    }
}
