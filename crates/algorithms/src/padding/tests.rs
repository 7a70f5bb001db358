use super::*;

fn data(bytes: &[u8]) -> WordArray {
    WordArray::from_bytes(bytes)
}

#[test]
fn test_pkcs7_pads_partial_block() {
    let mut wa = data(b"hello");
    Padding::Pkcs7.pad(&mut wa, 2).unwrap();
    assert_eq!(wa.to_bytes(), b"hello\x03\x03\x03");
}

#[test]
fn test_pkcs7_aligned_input_gains_full_block() {
    let mut wa = data(b"12345678");
    Padding::Pkcs7.pad(&mut wa, 2).unwrap();
    assert_eq!(wa.sig_bytes(), 16);
    assert_eq!(&wa.to_bytes()[8..], [8u8; 8]);
}

#[test]
fn test_pkcs7_empty_input_is_one_block_of_padding() {
    let mut wa = WordArray::new();
    Padding::Pkcs7.pad(&mut wa, 4).unwrap();
    assert_eq!(wa.to_bytes(), [16u8; 16]);
}

#[test]
fn test_pkcs7_round_trip() {
    for len in 0..=17 {
        let original: Vec<u8> = (0..len as u8).collect();
        let mut wa = data(&original);
        Padding::Pkcs7.pad(&mut wa, 4).unwrap();
        assert_eq!(wa.sig_bytes() % 16, 0);
        assert!(wa.sig_bytes() > original.len());
        Padding::Pkcs7.unpad(&mut wa, 4).unwrap();
        assert_eq!(wa.to_bytes(), original);
    }
}

#[test]
fn test_pkcs7_rejects_zero_length_byte() {
    let mut wa = data(&[1, 2, 3, 0]);
    assert!(Padding::Pkcs7.unpad(&mut wa, 1).is_err());
}

#[test]
fn test_pkcs7_rejects_oversized_length_byte() {
    let mut wa = data(&[1, 2, 3, 9]);
    assert!(Padding::Pkcs7.unpad(&mut wa, 1).is_err());
}

#[test]
fn test_pkcs7_rejects_inconsistent_tail() {
    let mut wa = data(&[1, 2, 0x02, 0x03]);
    assert!(Padding::Pkcs7.unpad(&mut wa, 1).is_err());
}

#[test]
fn test_pkcs7_rejects_empty_data() {
    let mut wa = WordArray::new();
    assert!(Padding::Pkcs7.unpad(&mut wa, 4).is_err());
}

#[test]
fn test_ansix923_round_trip() {
    let mut wa = data(b"abc");
    Padding::AnsiX923.pad(&mut wa, 2).unwrap();
    assert_eq!(wa.to_bytes(), b"abc\x00\x00\x00\x00\x05");
    Padding::AnsiX923.unpad(&mut wa, 2).unwrap();
    assert_eq!(wa.to_bytes(), b"abc");
}

#[test]
fn test_ansix923_rejects_nonzero_fill() {
    let mut wa = data(&[1, 2, 0xaa, 0x02]);
    // Pad length says two bytes, but the fill byte is not zero.
    assert!(Padding::AnsiX923.unpad(&mut wa, 1).is_err());
}

#[test]
fn test_iso10126_round_trip_ignores_fill() {
    let mut wa = data(b"abcde");
    Padding::Iso10126.pad(&mut wa, 2).unwrap();
    assert_eq!(wa.sig_bytes(), 8);
    Padding::Iso10126.unpad(&mut wa, 2).unwrap();
    assert_eq!(wa.to_bytes(), b"abcde");
}

#[test]
fn test_iso97971_round_trip() {
    let mut wa = data(b"ab");
    Padding::Iso97971.pad(&mut wa, 1).unwrap();
    assert_eq!(wa.to_bytes(), b"ab\x80\x00");
    Padding::Iso97971.unpad(&mut wa, 1).unwrap();
    assert_eq!(wa.to_bytes(), b"ab");
}

#[test]
fn test_iso97971_aligned_input_gains_full_block() {
    let mut wa = data(b"abcd");
    Padding::Iso97971.pad(&mut wa, 1).unwrap();
    assert_eq!(wa.to_bytes(), b"abcd\x80\x00\x00\x00");
}

#[test]
fn test_iso97971_rejects_missing_marker() {
    let mut wa = data(b"abcd");
    assert!(Padding::Iso97971.unpad(&mut wa, 1).is_err());
}

#[test]
fn test_zero_padding_round_trip() {
    let mut wa = data(b"ab");
    Padding::ZeroPadding.pad(&mut wa, 1).unwrap();
    assert_eq!(wa.to_bytes(), b"ab\x00\x00");
    Padding::ZeroPadding.unpad(&mut wa, 1).unwrap();
    assert_eq!(wa.to_bytes(), b"ab");
}

#[test]
fn test_zero_padding_aligned_input_unchanged() {
    let mut wa = data(b"abcd");
    Padding::ZeroPadding.pad(&mut wa, 1).unwrap();
    assert_eq!(wa.sig_bytes(), 4);
}

#[test]
fn test_no_padding_requires_alignment() {
    let mut wa = data(b"abc");
    assert!(Padding::NoPadding.pad(&mut wa, 1).is_err());
    let mut wa = data(b"abcd");
    Padding::NoPadding.pad(&mut wa, 1).unwrap();
    assert_eq!(wa.sig_bytes(), 4);
    Padding::NoPadding.unpad(&mut wa, 1).unwrap();
    assert_eq!(wa.sig_bytes(), 4);
}

#[test]
fn test_block_size_must_fit_in_a_byte() {
    let mut wa = WordArray::new();
    assert!(Padding::Pkcs7.pad(&mut wa, 64).is_err());
}
