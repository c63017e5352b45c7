//! BIP39 known test vectors through the mnemonic encoder.
//!
//! Vectors sourced from:
//! - BIP39: <https://github.com/trezor/python-mnemonic/blob/master/vectors.json>

use timeslug_crypto::mnemonic::{entropy_to_words, mnemonic_slug, word_indices};
use timeslug_crypto::wordlist::Dictionary;
use timeslug_types::{Entropy, TimeslugError};

type TestResult = std::result::Result<(), TimeslugError>;

fn entropy(hex: &str) -> std::result::Result<Entropy, TimeslugError> {
    hex.parse()
}

// ===================================================================
// 256-bit vectors
// ===================================================================

#[test]
fn vector_0x80() -> TestResult {
    let e = entropy("8080808080808080808080808080808080808080808080808080808080808080")?;
    let words = entropy_to_words(&e, Dictionary::english())?;
    let expected = "letter advice cage absurd amount doctor acoustic avoid \
                    letter advice cage absurd amount doctor acoustic avoid \
                    letter advice cage absurd amount doctor acoustic bless";
    assert_eq!(words.join(" "), expected);
    Ok(())
}

#[test]
fn vector_hamster() -> TestResult {
    let e = entropy("68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c")?;
    let words = entropy_to_words(&e, Dictionary::english())?;
    let expected = "hamster diagram private dutch cause delay private meat \
                    slide toddler razor book happy fancy gospel tennis \
                    maple dilemma loan word shrug inflict delay length";
    assert_eq!(words.join(" "), expected);
    Ok(())
}

#[test]
fn slug_is_prefix_of_vector() -> TestResult {
    let e = entropy("68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c")?;
    let dict = Dictionary::english();
    assert_eq!(mnemonic_slug(&e, 3, dict)?, "hamsterdiagramprivate");
    assert_eq!(mnemonic_slug(&e, 0, dict)?, "hamster");
    Ok(())
}

#[test]
fn indices_round_trip_through_dictionary() -> TestResult {
    let e = entropy("8080808080808080808080808080808080808080808080808080808080808080")?;
    let dict = Dictionary::english();
    let words = entropy_to_words(&e, dict)?;
    for (idx, word) in word_indices(&e).iter().zip(&words) {
        assert_eq!(dict.index_of(word), Some(*idx));
    }
    Ok(())
}
