//! Known-answer and property tests against the public codec API.

use ffx::{Ffx, FfxError, HashAlgorithm, IntegerCodec, StringCodec, DECIMAL};

const KEY: &str = "secret-key";

#[test]
fn string_codec_reference_pair() {
    let codec = StringCodec::new(KEY, "abc", 6).unwrap();
    assert_eq!(codec.encrypt("aaabbb").unwrap(), "acbacc");
    assert_eq!(codec.decrypt("acbacc").unwrap(), "aaabbb");
}

#[test]
fn integer_codec_reference_pair() {
    let codec = IntegerCodec::new(KEY, 4).unwrap();
    assert_eq!(codec.encrypt(1234).unwrap(), 6103);
    assert_eq!(codec.decrypt(6103).unwrap(), 1234);
}

#[test]
fn odd_length_split() {
    let codec = StringCodec::new(KEY, "abc", 5).unwrap();
    assert_eq!(codec.encrypt("abcab").unwrap(), "accbb");
    assert_eq!(codec.decrypt("accbb").unwrap(), "abcab");
}

#[test]
fn odd_rounds_odd_length_round_trip() {
    let ffx = Ffx::new(KEY).with_rounds(7).unwrap();
    let codec = StringCodec::from_cipher(ffx, DECIMAL, 5).unwrap();
    assert_eq!(codec.encrypt("12345").unwrap(), "26161");
    assert_eq!(codec.decrypt("26161").unwrap(), "12345");
}

#[test]
fn hex_alphabet() {
    let codec = StringCodec::new(KEY, "0123456789abcdef", 8).unwrap();
    assert_eq!(codec.encrypt("deadbeef").unwrap(), "907fea81");
}

#[test]
fn card_number_default_rounds() {
    let codec = StringCodec::new(KEY, DECIMAL, 16).unwrap();
    assert_eq!(codec.encrypt("4111111111111111").unwrap(), "8058062613692591");
    assert_eq!(codec.decrypt("8058062613692591").unwrap(), "4111111111111111");
}

#[test]
fn card_number_sha256() {
    let ffx = Ffx::new(KEY).with_hash(HashAlgorithm::Sha256);
    let codec = StringCodec::from_cipher(ffx, DECIMAL, 16).unwrap();
    assert_eq!(codec.encrypt("4111111111111111").unwrap(), "3355506666681254");
}

#[test]
fn long_input_rehashes() {
    // Each half is 60 digits; one SHA-1 digest yields only 48 decimal digits.
    let plaintext = DECIMAL.repeat(12);
    let codec = StringCodec::new(KEY, DECIMAL, plaintext.len()).unwrap();
    let ciphertext = codec.encrypt(&plaintext).unwrap();
    assert_eq!(
        ciphertext,
        "843982353297079689972027551807466947595083483400957352372457236166\
         189717662876511433530405549244411791931352063007609309"
    );
    assert_eq!(codec.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn non_ascii_alphabet() {
    let codec = StringCodec::new(KEY, "αβγδ", 6).unwrap();
    assert_eq!(codec.encrypt("αβγδαβ").unwrap(), "αδαγαδ");
    assert_eq!(codec.decrypt("αδαγαδ").unwrap(), "αβγδαβ");
}

#[test]
fn binary_alphabet() {
    let codec = StringCodec::new("k", "01", 10).unwrap();
    assert_eq!(codec.encrypt("0000000011").unwrap(), "0011000011");
}

#[test]
fn key_sensitivity() {
    let a = IntegerCodec::new(KEY, 4).unwrap();
    let b = IntegerCodec::new("other-key", 4).unwrap();
    assert_eq!(b.encrypt(1234).unwrap(), 3111);
    assert_ne!(a.encrypt(1234).unwrap(), b.encrypt(1234).unwrap());
}

#[test]
fn deterministic_across_instances() {
    let a = StringCodec::new(KEY, "abcdefghijklmnopqrstuvwxyz", 9).unwrap();
    let b = StringCodec::new(KEY, "abcdefghijklmnopqrstuvwxyz", 9).unwrap();
    assert_eq!(
        a.encrypt("fixedcode").unwrap(),
        b.encrypt("fixedcode").unwrap()
    );
}

#[test]
fn shape_is_preserved() {
    let alphabet = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    let codec = StringCodec::new(KEY, alphabet, 7).unwrap();
    for value in ["AAAAAAA", "ZZ99ZZ9", "K7P2QX3"] {
        let ct = codec.encrypt(value).unwrap();
        assert_eq!(ct.chars().count(), 7);
        assert!(ct.chars().all(|c| alphabet.contains(c)), "{ct}");
        assert_eq!(codec.decrypt(&ct).unwrap(), value);
        assert_eq!(codec.encrypt(&codec.decrypt(value).unwrap()).unwrap(), value);
    }
}

#[test]
fn integer_codec_is_a_permutation_of_its_range() {
    let codec = IntegerCodec::new(KEY, 2).unwrap();
    let mut seen = [false; 100];
    for v in 0..100u64 {
        let ct = codec.encrypt(v).unwrap();
        assert!(ct < 100);
        assert!(!seen[ct as usize], "{ct} produced twice");
        seen[ct as usize] = true;
        assert_eq!(codec.decrypt(ct).unwrap(), v);
    }
}

#[test]
fn rejection_kinds_are_distinguishable() {
    let codec = StringCodec::new(KEY, "abc", 6).unwrap();
    assert!(matches!(
        codec.encrypt("aaab"),
        Err(FfxError::LengthMismatch {
            expected: 6,
            actual: 4
        })
    ));
    assert_eq!(
        codec.decrypt("aaabbd").unwrap_err(),
        FfxError::NonAlphabetCharacter('d')
    );
}

#[test]
fn codecs_are_shareable_across_threads() {
    let codec = std::sync::Arc::new(IntegerCodec::new(KEY, 4).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let codec = codec.clone();
            std::thread::spawn(move || codec.encrypt(1234).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 6103);
    }
}
