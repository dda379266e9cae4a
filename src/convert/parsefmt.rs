use super::digit::{digit_char, digit_value};
use super::Value;

// digits must already have passed the validator for this radix;
// None means the number does not fit in 32 bits
pub fn parse(digits: &str, radix: u32) -> Option<Value> {
    let mut value: Value = 0;
    for c in digits.chars() {
        value = value.checked_mul(radix)?.checked_add(digit_value(c))?;
    }
    Some(value)
}

// formatted length minus one, counted by exact division so values at
// exact powers of the radix never come out short
pub fn digit_count(value: Value, radix: u32) -> usize {
    let mut count = 0;
    let mut value = value / radix;
    while value > 0 {
        count += 1;
        value /= radix;
    }
    count
}

pub fn fmt(value: Value, radix: u32) -> String {
    if value == 0 {
        return "0".to_owned();
    }

    let count = digit_count(value, radix);
    let mut out = vec!['0'; count + 1];

    let mut value = value;
    let mut i = 0;
    while value > 0 {
        // least significant digit first, written from the last slot backward
        out[count - i] = digit_char(value % radix);
        value /= radix;
        i += 1;
    }

    out.into_iter().collect()
}

#[test]
fn parse_test() {
    assert_eq!(parse("255", 10), Some(255));
    assert_eq!(parse("FF", 16), Some(255));
    assert_eq!(parse("11111111", 2), Some(255));
    assert_eq!(parse("377", 8), Some(255));
    assert_eq!(parse("0", 2), Some(0));
    assert_eq!(parse("4294967295", 10), Some(u32::MAX));
}

#[test]
fn parse_overflow_test() {
    assert_eq!(parse("4294967296", 10), None);
    assert_eq!(parse("100000000", 16), None);
    assert_eq!(parse("FFFFFFFF", 16), Some(u32::MAX));
}

#[test]
fn fmt_test() {
    assert_eq!(fmt(255, 16), "FF".to_owned());
    assert_eq!(fmt(255, 2), "11111111".to_owned());
    assert_eq!(fmt(255, 8), "377".to_owned());
    assert_eq!(fmt(255, 10), "255".to_owned());
    assert_eq!(fmt(u32::MAX, 16), "FFFFFFFF".to_owned());
}

#[test]
fn fmt_zero_test() {
    for radix in [2, 8, 10, 16] {
        assert_eq!(fmt(0, radix), "0".to_owned());
    }
}

#[test]
fn fmt_no_leading_zero_test() {
    for radix in [2, 8, 10, 16] {
        for value in [1, 7, 100, 4096, u32::MAX] {
            assert!(!fmt(value, radix).starts_with('0'));
        }
    }
}

#[test]
fn round_trip_test() {
    let samples = [0, 1, 2, 7, 8, 9, 10, 15, 16, 17, 255, 256, 1000, 65535, 65536, u32::MAX];
    for radix in [2, 8, 10, 16] {
        for value in samples {
            assert_eq!(parse(fmt(value, radix).as_str(), radix), Some(value));
        }
    }
}

#[test]
fn digit_count_test() {
    // exact powers of the radix are where a float log goes off by one
    assert_eq!(digit_count(8, 8), 1);
    assert_eq!(digit_count(16, 16), 1);
    assert_eq!(digit_count(10, 10), 1);
    assert_eq!(digit_count(2, 2), 1);
    assert_eq!(digit_count(1 << 31, 2), 31);
    assert_eq!(digit_count(1_000_000, 10), 6);

    for radix in [2u32, 8, 10, 16] {
        let mut value: Value = 1;
        loop {
            assert_eq!(digit_count(value, radix) + 1, fmt(value, radix).len());
            match value.checked_mul(radix) {
                Some(next) => value = next,
                None => break,
            }
        }
    }
}
