#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    AllBases,
}

// canonical order for the "todas bases" fan-out
pub const CONCRETE: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

impl Base {
    pub fn radix(&self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
            Base::AllBases => 0,// not a radix, fan out over CONCRETE instead
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Base::Binary => "binário",
            Base::Octal => "octal",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
            Base::AllBases => "todas bases",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Base::Binary),
            1 => Some(Base::Octal),
            2 => Some(Base::Decimal),
            3 => Some(Base::Hexadecimal),
            4 => Some(Base::AllBases),
            _ => None,
        }
    }
}

#[test]
fn radix_test() {
    assert_eq!(Base::Binary.radix(), 2);
    assert_eq!(Base::Octal.radix(), 8);
    assert_eq!(Base::Decimal.radix(), 10);
    assert_eq!(Base::Hexadecimal.radix(), 16);
    assert_eq!(Base::AllBases.radix(), 0);
}

#[test]
fn from_index_test() {
    for (i, base) in CONCRETE.iter().enumerate() {
        assert_eq!(Base::from_index(i), Some(*base));
    }
    assert_eq!(Base::from_index(4), Some(Base::AllBases));
    assert_eq!(Base::from_index(5), None);
}

#[test]
fn fan_out_order_test() {
    assert_eq!(
        CONCRETE,
        [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal]
    );
}
