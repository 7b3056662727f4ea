extern crate max6951;

use max6951::{code_b, ipow10, pack_configuration, register, CodeBDigits};

#[test]
fn ipow10_powers() {
    assert_eq!(ipow10(0), 1);
    assert_eq!(ipow10(1), 10);
    assert_eq!(ipow10(3), 1000);
    assert_eq!(ipow10(9), 1_000_000_000);
}

#[test]
fn configuration_reserved_bit_always_clear() {
    for bits in 0..32u32 {
        let data = pack_configuration(
            bits & 1 != 0,
            bits & 2 != 0,
            bits & 4 != 0,
            bits & 8 != 0,
            bits & 16 != 0,
        );
        assert_eq!(data & register::configuration::RESERVED, 0);
    }
}

#[test]
fn configuration_field_positions() {
    assert_eq!(pack_configuration(false, false, false, false, false), 0x00);
    assert_eq!(pack_configuration(true, false, false, false, false), 0x01);
    assert_eq!(pack_configuration(false, true, false, false, false), 0x20);
    assert_eq!(pack_configuration(false, false, true, false, false), 0x04);
    assert_eq!(pack_configuration(false, false, false, true, false), 0x08);
    assert_eq!(pack_configuration(false, false, false, false, true), 0x10);
    assert_eq!(pack_configuration(true, true, true, true, true), 0x3D);
}

#[test]
fn decompose_positive() {
    let digits: Vec<u8> = CodeBDigits::fit(1234, 4).unwrap().collect();
    assert_eq!(digits, vec![1, 2, 3, 4]);
}

#[test]
fn decompose_negative() {
    let digits: Vec<u8> = CodeBDigits::fit(-7, 2).unwrap().collect();
    assert_eq!(digits, vec![code_b::HYPHEN, 7]);
}

#[test]
fn decompose_zero() {
    let digits: Vec<u8> = CodeBDigits::fit(0, 1).unwrap().collect();
    assert_eq!(digits, vec![0]);
}

#[test]
fn decompose_pads_leading_blanks() {
    let digits: Vec<u8> = CodeBDigits::fit(42, 4).unwrap().collect();
    assert_eq!(digits, vec![code_b::BLANK, code_b::BLANK, 4, 2]);

    let digits: Vec<u8> = CodeBDigits::fit(-42, 4).unwrap().collect();
    assert_eq!(digits, vec![code_b::HYPHEN, code_b::BLANK, 4, 2]);
}

#[test]
fn decompose_overflow() {
    assert!(CodeBDigits::fit(12345, 4).is_none());
    assert!(CodeBDigits::fit(9999, 4).is_some());

    // The hyphen costs one position.
    assert!(CodeBDigits::fit(-1000, 4).is_none());
    assert!(CodeBDigits::fit(-999, 4).is_some());
    assert!(CodeBDigits::fit(-1, 1).is_none());
}

#[test]
fn decompose_width_bounds() {
    assert!(CodeBDigits::fit(1, 0).is_none());
    assert!(CodeBDigits::fit(1, 9).is_none());
    assert!(CodeBDigits::fit(99_999_999, 8).is_some());
}

#[test]
fn decompose_is_restartable() {
    let digits = CodeBDigits::fit(-305, 8).unwrap();
    let first: Vec<u8> = digits.clone().collect();
    let second: Vec<u8> = digits.collect();
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            code_b::HYPHEN,
            code_b::BLANK,
            code_b::BLANK,
            code_b::BLANK,
            code_b::BLANK,
            3,
            0,
            5
        ]
    );
}
