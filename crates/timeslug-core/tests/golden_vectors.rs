//! Fixed outputs that must never change across releases.

use timeslug_core::{derive, Deriver};
use timeslug_crypto::entropy::{EntropySource, SecretSeed};
use timeslug_types::{SlugMode, TimeslugError};

type TestResult = std::result::Result<(), TimeslugError>;

const SEED: &str = "seedphrase";

#[test]
fn obfuscated_golden() -> TestResult {
    let seed = SecretSeed::from(SEED);
    let cases = [
        ("2026-02-03", "trybeambold8", "5d3bf0d55db67ea2"),
        ("2026-02-04", "brightbeamvivar", "f9fb66a05050f52f"),
        ("2026-02-05", "trycorefastfum", "8bb68bd056e4a6ff"),
    ];
    for (period, slug, hash) in cases {
        let derived = derive(&seed, period, 16, SlugMode::Obfuscated)?;
        assert_eq!(derived.value, slug, "slug for {period}");
        assert_eq!(derived.hash, hash, "hash for {period}");
        assert!(derived.is_clean());
    }
    Ok(())
}

#[test]
fn mnemonic_golden() -> TestResult {
    let seed = SecretSeed::from(SEED);
    let cases = [
        (1, "exotic", "5001"),
        (3, "exoticangryanswer", "50011c26d0"),
        (5, "exoticangryanswerpatternmain", "50011c26d0a864"),
    ];
    for (length, slug, hash) in cases {
        let derived = derive(&seed, "2026-02-03", length, SlugMode::Mnemonic)?;
        assert_eq!(derived.value, slug, "slug for length {length}");
        assert_eq!(derived.hash, hash, "hash for length {length}");
    }
    Ok(())
}

#[test]
fn mnemonic_full_length_uses_whole_entropy() -> TestResult {
    let seed = SecretSeed::from(SEED);
    let derived = derive(&seed, "2026-02-03", 24, SlugMode::Mnemonic)?;
    let primary = EntropySource::new(&seed).primary("2026-02-03")?;

    assert_eq!(derived.hash, primary.to_string());
    assert_eq!(
        derived.hash,
        "50011c26d0a864eccc58675738b7cc38103a488392122486799687585e31f912"
    );

    let words = [
        "exotic", "angry", "answer", "pattern", "main", "island", "cousin", "artefact", "fire",
        "shield", "vessel", "ice", "admit", "cattle", "atom", "drastic", "cause", "critic",
        "grant", "attitude", "magnet", "body", "tone", "gallery",
    ];
    assert_eq!(derived.value, words.concat());
    Ok(())
}

#[test]
fn mode_names_are_case_insensitive() -> TestResult {
    let seed = SecretSeed::from("seed");
    let deriver = Deriver::english();
    let lower = deriver.derive(&seed, "2026-01-01", 3, "bip39".parse()?)?;
    let upper = deriver.derive(&seed, "2026-01-01", 3, "BIP39".parse()?)?;
    let alias = deriver.derive(&seed, "2026-01-01", 3, "mnemonic".parse()?)?;
    assert_eq!(lower, upper);
    assert_eq!(lower, alias);
    Ok(())
}
