use super::Value;

static DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

// out-of-set characters map to 0; callers run the validator first
pub fn digit_value(digit: char) -> Value {
    match digit {
        '0'..='9' => digit as Value - '0' as Value,
        'A'..='F' => digit as Value - 'A' as Value + 10,
        _ => 0,
    }
}

pub fn digit_char(value: Value) -> char {
    DIGITS[value as usize]
}

#[test]
fn digit_value_test() {
    assert_eq!(digit_value('0'), 0);
    assert_eq!(digit_value('9'), 9);
    assert_eq!(digit_value('A'), 10);
    assert_eq!(digit_value('F'), 15);
    assert_eq!(digit_value('G'), 0);
}

#[test]
fn digit_char_test() {
    for value in 0..16 {
        assert_eq!(digit_value(digit_char(value)), value);
    }
    assert_eq!(digit_char(10), 'A');
    assert_eq!(digit_char(15), 'F');
}
