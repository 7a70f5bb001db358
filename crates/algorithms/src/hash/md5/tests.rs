use super::*;

#[test]
fn test_md5_empty_string() {
    let expected = "d41d8cd98f00b204e9800998ecf8427e";
    let result = hex::encode(Md5::digest(b"").unwrap());
    assert_eq!(result, expected);
}

#[test]
fn test_md5_single_byte() {
    let expected = "0cc175b9c0f1b6a831c399e269772661";
    let result = hex::encode(Md5::digest(b"a").unwrap());
    assert_eq!(result, expected);
}

#[test]
fn test_md5_abc() {
    let expected = "900150983cd24fb0d6963f7d28e17f72";
    let result = hex::encode(Md5::digest(b"abc").unwrap());
    assert_eq!(result, expected);
}

#[test]
fn test_md5_message_digest() {
    let expected = "f96b697d7cb7938d525a2f31aaf161d0";
    let result = hex::encode(Md5::digest(b"message digest").unwrap());
    assert_eq!(result, expected);
}

#[test]
fn test_md5_alphabet() {
    let expected = "c3fcd3d76192e4007dfb496cca67e13b";
    let result = hex::encode(Md5::digest(b"abcdefghijklmnopqrstuvwxyz").unwrap());
    assert_eq!(result, expected);
}

#[test]
fn test_md5_quick_brown_fox() {
    let expected = "9e107d9d372bb6826bd81d3542a419d6";
    let result = hex::encode(
        Md5::digest(b"The quick brown fox jumps over the lazy dog").unwrap(),
    );
    assert_eq!(result, expected);
}

#[test]
fn test_md5_incremental_matches_one_shot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let mut hasher = Md5::new();
    for chunk in data.chunks(7) {
        hasher.update(chunk).unwrap();
    }
    assert_eq!(hasher.finalize().unwrap(), Md5::digest(data).unwrap());
}

#[test]
fn test_md5_block_boundary() {
    // 55, 56, 64 and 65 bytes straddle the padding boundary cases.
    for len in [55usize, 56, 63, 64, 65, 119, 120, 128] {
        let data = vec![0x61u8; len];
        let mut hasher = Md5::new();
        hasher.update(&data[..len / 2]).unwrap();
        hasher.update(&data[len / 2..]).unwrap();
        assert_eq!(
            hasher.finalize().unwrap(),
            Md5::digest(&data).unwrap(),
            "length {}",
            len
        );
    }
}
