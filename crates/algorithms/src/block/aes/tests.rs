use super::*;

fn words(hex_str: &str) -> Vec<u32> {
    hex::decode(hex_str)
        .unwrap()
        .chunks(4)
        .map(|c| BigEndian::read_u32(c))
        .collect()
}

// FIPS 197 Appendix C known answers

#[test]
fn test_aes128_fips197_vector() {
    let key = words("000102030405060708090a0b0c0d0e0f");
    let cipher = Aes128::new(&key).unwrap();

    let mut block = words("00112233445566778899aabbccddeeff");
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(block, words("69c4e0d86a7b0430d8cdb78070b4c55a"));

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, words("00112233445566778899aabbccddeeff"));
}

#[test]
fn test_aes192_fips197_vector() {
    let key = words("000102030405060708090a0b0c0d0e0f1011121314151617");
    let cipher = Aes192::new(&key).unwrap();

    let mut block = words("00112233445566778899aabbccddeeff");
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(block, words("dda97ca4864cdfe06eaf70a0ec0d7191"));

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, words("00112233445566778899aabbccddeeff"));
}

#[test]
fn test_aes256_fips197_vector() {
    let key = words("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
    let cipher = Aes256::new(&key).unwrap();

    let mut block = words("00112233445566778899aabbccddeeff");
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(block, words("8ea2b7ca516745bfeafc49904b496089"));

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, words("00112233445566778899aabbccddeeff"));
}

#[test]
fn test_key_length_is_validated() {
    assert!(Aes128::new(&[0u32; 3]).is_err());
    assert!(Aes128::new(&[0u32; 8]).is_err());
    assert!(Aes192::new(&[0u32; 4]).is_err());
    assert!(Aes256::new(&[0u32; 4]).is_err());
}

#[test]
fn test_block_length_is_validated() {
    let cipher = Aes128::new(&[0u32; 4]).unwrap();
    let mut short = [0u32; 3];
    assert!(cipher.encrypt_block(&mut short).is_err());
    let mut long = [0u32; 5];
    assert!(cipher.decrypt_block(&mut long).is_err());
}

#[test]
fn test_sbox_matches_fips_samples() {
    // Spot checks against the published table.
    assert_eq!(SBOX[0x00], 0x63);
    assert_eq!(SBOX[0x01], 0x7c);
    assert_eq!(SBOX[0x53], 0xed);
    assert_eq!(SBOX[0xff], 0x16);
    assert_eq!(INV_SBOX[0x63], 0x00);
    assert_eq!(INV_SBOX[0xed], 0x53);
}

#[test]
fn test_inv_sbox_inverts_sbox() {
    for x in 0..=255u8 {
        assert_eq!(INV_SBOX[SBOX[x as usize] as usize], x);
    }
}
