use super::base::Base;

// explicit range tests per base rather than the generic digit decoder,
// so characters past a base's boundary ('2' in binary, '8' in octal,
// lowercase or past-'F' letters in hex) are rejected
pub fn is_valid(digits: &str, base: Base) -> bool {
    if digits.is_empty() {
        return false;
    }
    digits.chars().all(|c| match base {
        Base::Binary => matches!(c, '0'..='1'),
        Base::Octal => matches!(c, '0'..='7'),
        Base::Decimal => matches!(c, '0'..='9'),
        Base::Hexadecimal => matches!(c, '0'..='9' | 'A'..='F'),
        Base::AllBases => false,// output selector, never an input radix
    })
}

#[test]
fn binary_test() {
    assert!(is_valid("1010", Base::Binary));
    assert!(is_valid("0", Base::Binary));
    assert!(!is_valid("102", Base::Binary));
}

#[test]
fn octal_test() {
    assert!(is_valid("01234567", Base::Octal));
    assert!(!is_valid("8", Base::Octal));
}

#[test]
fn decimal_test() {
    assert!(is_valid("0123456789", Base::Decimal));
    assert!(!is_valid("12A", Base::Decimal));
    assert!(!is_valid("-1", Base::Decimal));
}

#[test]
fn hexadecimal_test() {
    assert!(is_valid("0123456789ABCDEF", Base::Hexadecimal));
    assert!(!is_valid("G", Base::Hexadecimal));
    assert!(!is_valid("ff", Base::Hexadecimal));
}

#[test]
fn all_bases_test() {
    assert!(!is_valid("0", Base::AllBases));
    assert!(!is_valid("1010", Base::AllBases));
}

#[test]
fn empty_test() {
    for base in super::base::CONCRETE {
        assert!(!is_valid("", base));
    }
}
