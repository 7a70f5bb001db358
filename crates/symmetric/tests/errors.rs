//! Failure behavior of the cipher pipeline

use wcrypt_algorithms::WordArray;
use wcrypt_symmetric::{
    password, serializable, Aes128, Aes256, CipherConfig, CipherProcessor, Error, PasswordConfig,
    SerializableConfig, SymmetricCipher,
};

fn key() -> WordArray {
    WordArray::from_bytes(&[0x13u8; 16])
}

fn cfg() -> SerializableConfig {
    SerializableConfig {
        cipher: CipherConfig {
            iv: Some(WordArray::from_bytes(&[0x31u8; 16])),
            ..CipherConfig::default()
        },
        ..SerializableConfig::default()
    }
}

#[test]
fn wrong_password_fails_with_padding_error() {
    let cfg = PasswordConfig::default();
    let message = WordArray::from(&b"the content being protected"[..]);
    let sealed = password::encrypt::<Aes256>(&message, b"right password", &cfg).unwrap();
    let text = sealed.encode().unwrap();

    // A wrong key garbles the final block, so unpadding fails for all but
    // roughly 1 in 256 candidate keys. No candidate may ever yield the
    // plaintext.
    let mut failures = 0;
    let candidates: [&[u8]; 8] = [
        b"wrong password",
        b"Right password",
        b"right password ",
        b"",
        b"hunter2",
        b"right-password",
        b"RIGHT PASSWORD",
        b"password",
    ];
    for wrong in candidates {
        match password::decrypt_str::<Aes256>(&text, wrong, &cfg) {
            Err(Error::Padding { .. }) => failures += 1,
            Err(other) => panic!("unexpected error kind: {:?}", other),
            Ok(garbled) => assert_ne!(garbled, message),
        }
    }
    assert!(failures >= 7, "only {} of 8 wrong passwords failed", failures);
}

#[test]
fn tampered_final_byte_fails_unpadding() {
    let message = WordArray::from(&b"do not touch this ciphertext"[..]);
    let sealed = serializable::encrypt::<Aes128>(&message, &key(), &cfg()).unwrap();
    let ciphertext = sealed.ciphertext.clone().unwrap();
    let bytes = ciphertext.to_bytes();

    // Flip the last byte through every other value; unpadding must reject
    // nearly all of them (a fraction can alias onto a valid pad length).
    let mut failures = 0;
    let last = *bytes.last().unwrap();
    for candidate in 0..=255u8 {
        if candidate == last {
            continue;
        }
        let mut tampered_bytes = bytes.clone();
        *tampered_bytes.last_mut().unwrap() = candidate;
        let mut tampered = sealed.clone();
        tampered.ciphertext = Some(WordArray::from_bytes(&tampered_bytes));

        match serializable::decrypt::<Aes128>(&tampered, &key(), &cfg()) {
            Err(Error::Padding { .. }) => failures += 1,
            Err(other) => panic!("unexpected error kind: {:?}", other),
            Ok(garbled) => assert_ne!(garbled, message),
        }
    }
    assert!(failures >= 250, "only {} of 255 flips failed", failures);
}

#[test]
fn truncated_ciphertext_is_a_format_error() {
    let message = WordArray::from(&b"sixteen bytes !!"[..]);
    let sealed = serializable::encrypt::<Aes128>(&message, &key(), &cfg()).unwrap();
    let bytes = sealed.ciphertext.clone().unwrap().to_bytes();

    let mut truncated = sealed.clone();
    truncated.ciphertext = Some(WordArray::from_bytes(&bytes[..bytes.len() - 5]));
    assert!(matches!(
        serializable::decrypt::<Aes128>(&truncated, &key(), &cfg()),
        Err(Error::Format { .. })
    ));
}

#[test]
fn empty_ciphertext_is_a_format_error() {
    let mut sealed =
        serializable::encrypt::<Aes128>(&WordArray::from(&b"x"[..]), &key(), &cfg()).unwrap();
    sealed.ciphertext = Some(WordArray::new());
    assert!(matches!(
        serializable::decrypt::<Aes128>(&sealed, &key(), &cfg()),
        Err(Error::Format { .. })
    ));
}

#[test]
fn missing_ciphertext_is_a_format_error() {
    let mut sealed =
        serializable::encrypt::<Aes128>(&WordArray::from(&b"x"[..]), &key(), &cfg()).unwrap();
    sealed.ciphertext = None;
    assert!(matches!(
        serializable::decrypt::<Aes128>(&sealed, &key(), &cfg()),
        Err(Error::Format { .. })
    ));
}

#[test]
fn wrong_key_size_is_a_config_error() {
    let short = WordArray::from_bytes(&[0u8; 10]);
    assert!(matches!(
        serializable::encrypt::<Aes128>(&WordArray::new(), &short, &cfg()),
        Err(Error::Config { .. })
    ));
}

#[test]
fn missing_iv_is_a_config_error() {
    let no_iv = SerializableConfig::default();
    assert!(matches!(
        serializable::encrypt::<Aes128>(&WordArray::new(), &key(), &no_iv),
        Err(Error::Config { .. })
    ));
}

#[test]
fn wrong_iv_size_is_a_config_error() {
    let mut bad = cfg();
    bad.cipher.iv = Some(WordArray::from_bytes(&[0u8; 8]));
    assert!(matches!(
        serializable::encrypt::<Aes128>(&WordArray::new(), &key(), &bad),
        Err(Error::Config { .. })
    ));
}

#[test]
fn processor_reuse_is_a_usage_error() {
    let mut processor = Aes128::encryptor(&key(), &cfg().cipher).unwrap();
    processor.finalize(Some(&WordArray::from(&b"one"[..]))).unwrap();
    assert!(matches!(
        processor.process(&WordArray::from(&b"two"[..])),
        Err(Error::Usage { .. })
    ));
}

#[test]
fn garbage_base64_is_a_format_error() {
    let cfg = PasswordConfig::default();
    assert!(matches!(
        password::decrypt_str::<Aes256>("@@@not-base64@@@", b"pw", &cfg),
        Err(Error::Format { .. })
    ));
}
