//! OpenSSL wire-format compatibility
//!
//! The password pipeline must interoperate with `openssl enc` password
//! mode: `EVP_BytesToKey` over MD5, an 8-byte salt behind the `Salted__`
//! magic, base64 wrapping. The cross-tool test assembles that wire format
//! from the primitive layer alone and feeds it to the high-level decrypt.

use wcrypt_algorithms::encoding::{Base64, Encoder};
use wcrypt_algorithms::kdf::EvpKdf;
use wcrypt_algorithms::{BlockCipher, BlockMode, Md5, Padding, WordArray};
use wcrypt_symmetric::{password, Aes256, CipherFormat, PasswordConfig};

const PASSWORD: &[u8] = b"Secret Passphrase";
const MESSAGE: &[u8] = b"The quick brown fox jumps over the lazy dog";

#[test]
fn password_encrypt_emits_the_salted_layout() {
    let cfg = PasswordConfig::default();
    let sealed =
        password::encrypt::<Aes256>(&WordArray::from_bytes(MESSAGE), PASSWORD, &cfg).unwrap();
    let text = sealed.encode().unwrap();

    let raw = Base64::parse(&text).unwrap().to_bytes();
    assert_eq!(&raw[..8], b"Salted__");
    let ciphertext_len = raw.len() - 16;
    assert!(ciphertext_len > 0);
    assert_eq!(ciphertext_len % 16, 0);
    // 43 bytes of input pad to 48.
    assert_eq!(ciphertext_len, 48);
}

#[test]
fn password_round_trip() {
    let cfg = PasswordConfig::default();
    let message = WordArray::from_bytes(MESSAGE);
    let sealed = password::encrypt::<Aes256>(&message, PASSWORD, &cfg).unwrap();
    let text = sealed.encode().unwrap();

    let opened = password::decrypt_str::<Aes256>(&text, PASSWORD, &cfg).unwrap();
    assert_eq!(opened, message);
}

#[test]
fn password_round_trip_through_params() {
    let cfg = PasswordConfig::default();
    let message = WordArray::from_bytes(MESSAGE);
    let sealed = password::encrypt::<Aes256>(&message, PASSWORD, &cfg).unwrap();
    // Decrypt straight from the record, without serializing.
    let opened = password::decrypt::<Aes256>(&sealed, PASSWORD, &cfg).unwrap();
    assert_eq!(opened, message);
}

#[test]
fn fresh_salt_per_encryption() {
    let cfg = PasswordConfig::default();
    let message = WordArray::from_bytes(MESSAGE);
    let a = password::encrypt::<Aes256>(&message, PASSWORD, &cfg).unwrap();
    let b = password::encrypt::<Aes256>(&message, PASSWORD, &cfg).unwrap();
    assert_ne!(a.salt, b.salt);
    assert_ne!(a.ciphertext, b.ciphertext);
}

// Builds what `openssl enc -aes-256-cbc -pass pass:foo -a -salt` produces
// for the input "abc\n" out of the primitive layer, independently of the
// processor pipeline, and decrypts it through the password path.
#[test]
fn decrypts_an_externally_assembled_openssl_payload() {
    let salt = [0x01u8, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];

    // EVP_BytesToKey(MD5, 1 iteration): 32 key bytes then 16 IV bytes.
    let kdf = EvpKdf::<Md5>::new();
    let derived = kdf.derive(b"foo", &salt, 48).unwrap();
    let key = WordArray::from_bytes(&derived[..32]);
    let iv = WordArray::from_bytes(&derived[32..]);

    // PKCS#7-pad "abc\n" and CBC-encrypt it block by block.
    let mut data = WordArray::from_bytes(b"abc\n");
    Padding::Pkcs7.pad(&mut data, 4).unwrap();
    let cipher = wcrypt_algorithms::Aes256::new(key.words()).unwrap();
    let mut state = BlockMode::Cbc.encryptor(Some(iv.words()), 4).unwrap();
    let n_words = data.words().len();
    for offset in (0..n_words).step_by(4) {
        state.process_block(&cipher, data.words_mut(), offset).unwrap();
    }

    // Salted__ || salt || ciphertext, base64-wrapped.
    let mut raw = WordArray::from_bytes(b"Salted__");
    raw.concat(&WordArray::from_bytes(&salt));
    raw.concat(&data);
    let text = Base64::stringify(&raw);

    let cfg = PasswordConfig::default();
    let opened = password::decrypt_str::<Aes256>(&text, b"foo", &cfg).unwrap();
    assert_eq!(opened.to_bytes(), b"abc\n");
}

// `openssl enc -nosalt` output carries no header; the password path then
// derives with an empty salt.
#[test]
fn decrypts_a_nosalt_payload() {
    let kdf = EvpKdf::<Md5>::new();
    let derived = kdf.derive(b"foo", b"", 48).unwrap();
    let key = WordArray::from_bytes(&derived[..32]);
    let iv = WordArray::from_bytes(&derived[32..]);

    let mut data = WordArray::from_bytes(b"abc\n");
    Padding::Pkcs7.pad(&mut data, 4).unwrap();
    let cipher = wcrypt_algorithms::Aes256::new(key.words()).unwrap();
    let mut state = BlockMode::Cbc.encryptor(Some(iv.words()), 4).unwrap();
    let n_words = data.words().len();
    for offset in (0..n_words).step_by(4) {
        state.process_block(&cipher, data.words_mut(), offset).unwrap();
    }

    let text = Base64::stringify(&data);
    let cfg = PasswordConfig::default();
    let opened = password::decrypt_str::<Aes256>(&text, b"foo", &cfg).unwrap();
    assert_eq!(opened.to_bytes(), b"abc\n");
}

#[test]
fn hex_format_passes_through_the_pipeline() {
    use wcrypt_symmetric::{serializable, Aes128, CipherConfig, SerializableConfig};

    let key = WordArray::from_bytes(&[0x11; 16]);
    let cfg = SerializableConfig {
        cipher: CipherConfig {
            iv: Some(WordArray::from_bytes(&[0x22; 16])),
            ..CipherConfig::default()
        },
        format: CipherFormat::Hex,
    };
    let message = WordArray::from(&b"hex formatted"[..]);
    let sealed = serializable::encrypt::<Aes128>(&message, &key, &cfg).unwrap();
    let text = sealed.encode().unwrap();
    assert!(text.chars().all(|c| c.is_ascii_hexdigit()));

    let opened = serializable::decrypt_str::<Aes128>(&text, &key, &cfg).unwrap();
    assert_eq!(opened, message);
}

#[test]
fn format_parse_stringify_round_trip() {
    let cfg = PasswordConfig::default();
    let sealed =
        password::encrypt::<Aes256>(&WordArray::from_bytes(MESSAGE), PASSWORD, &cfg).unwrap();
    let text = sealed.encode().unwrap();

    let parsed = CipherFormat::OpenSsl.parse(&text).unwrap();
    assert_eq!(parsed.ciphertext, sealed.ciphertext);
    assert_eq!(parsed.salt, sealed.salt);
    assert_eq!(parsed.encode().unwrap(), text);
}
