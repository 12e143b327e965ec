use cipherhunt_core::{
    AffineCipher, AtbashCipher, CaesarCipher, Cipher, DictionaryHeuristic, GraphemeHeuristic,
    Heuristic, LetterFrequencyHeuristic, NoProgress, SearchOptions, TOP_K, VigenereCipher,
    search, search_all,
};

const PLAINTEXT: &str = "the quick brown fox jumps over thirteen lazy dogs.";

#[test]
fn caesar_ciphertext_is_cracked_with_the_right_key_on_top() {
    let ciphertext = CaesarCipher::new(7).encrypt(PLAINTEXT);
    let results = search(&ciphertext, "fox.txt", &SearchOptions::default()).expect("search runs");

    assert!(results.len() <= TOP_K);
    let best = &results[0];
    assert_eq!(best.cipher_name(), "Caesar");
    assert_eq!(best.key_descriptor(), "shift=7");
    assert_eq!(best.decrypted_text(), PLAINTEXT);
    assert_eq!(best.source(), "fox.txt");
}

#[test]
fn vigenere_ciphertext_is_cracked_within_the_bounded_key_space() {
    // "tea" is length 3 over the six most frequent letters, so it is
    // inside the restricted key space.
    let ciphertext = VigenereCipher::new("tea").encrypt(PLAINTEXT);
    let results = search(&ciphertext, "tea.txt", &SearchOptions::default()).expect("search runs");

    let best = &results[0];
    assert_eq!(best.cipher_name(), "Vigenère");
    assert_eq!(best.key_descriptor(), "key=tea");
    assert_eq!(best.decrypted_text(), PLAINTEXT);
}

#[test]
fn affine_ciphertext_is_cracked() {
    let cipher = AffineCipher::new(7, 40).expect("7 is coprime with 68");
    let ciphertext = cipher.encrypt(PLAINTEXT);
    let results = search(&ciphertext, "affine.txt", &SearchOptions::default())
        .expect("search runs");

    let best = &results[0];
    assert_eq!(best.cipher_name(), "Affine");
    assert_eq!(best.key_descriptor(), "(7, 40)");
    assert_eq!(best.decrypted_text(), PLAINTEXT);
}

#[test]
fn scores_are_non_increasing_and_bounded() {
    let ciphertext = CaesarCipher::new(25).encrypt(PLAINTEXT);
    let results = search_all(
        &ciphertext,
        "bounds.txt",
        &SearchOptions::default(),
        &NoProgress,
    )
    .expect("search runs");

    for candidate in &results {
        assert!(candidate.combined_score() >= 0.0);
        assert!(candidate.combined_score() <= 1.0);
    }
    for pair in results.windows(2) {
        assert!(pair[0].combined_score() >= pair[1].combined_score());
    }
}

#[test]
fn top_k_never_exceeds_five_across_a_synthetic_input_set() {
    let inputs = [
        ("caesar.txt", CaesarCipher::new(13).encrypt(PLAINTEXT)),
        ("vigenere.txt", VigenereCipher::new("et").encrypt(PLAINTEXT)),
        ("atbash.txt", AtbashCipher::new().encrypt(PLAINTEXT)),
        ("plain.txt", PLAINTEXT.to_string()),
    ];
    let options = SearchOptions::new(2).expect("valid worker count");
    for (source, ciphertext) in &inputs {
        let results = search(ciphertext, source, &options).expect("search runs");
        assert!(results.len() <= 5, "{source} returned {}", results.len());
        assert!(!results.is_empty());
    }
}

#[test]
fn heuristics_prefer_the_true_decryption_over_wrong_keys() {
    let heuristics: [&dyn Heuristic; 3] = [
        &LetterFrequencyHeuristic,
        &DictionaryHeuristic,
        &GraphemeHeuristic::new(),
    ];
    let wrong = CaesarCipher::new(31).decrypt(PLAINTEXT);
    for heuristic in heuristics {
        let right = heuristic.analyze(PLAINTEXT);
        let scrambled = heuristic.analyze(&wrong);
        assert!(
            right.score() >= scrambled.score(),
            "{} preferred the scrambled text",
            heuristic.name()
        );
        assert!(!right.summary().is_empty());
    }
}

#[test]
fn candidates_serialize_for_reporting() {
    let ciphertext = CaesarCipher::new(3).encrypt(PLAINTEXT);
    let results = search(&ciphertext, "json.txt", &SearchOptions::default()).expect("search runs");
    let json = serde_json::to_string(&results).expect("candidates serialize");
    assert!(json.contains("\"cipher\""));
    assert!(json.contains("\"combined_score\""));
}
