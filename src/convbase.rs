use crate::convert::base::{Base, CONCRETE};
use crate::convert::{parsefmt, Value};

// one conversion turn, shared between the frontend and its output step
pub struct Session {
    pub from: Base,
    pub to: Base,
    pub digits: String,
    pub value: Value,
}

impl Session {
    pub fn result_lines(&self) -> Vec<String> {
        let targets: Vec<Base> = if self.to == Base::AllBases {
            CONCRETE.to_vec()
        } else {
            vec![self.to]
        };

        targets
            .into_iter()
            .map(|to| {
                format!(
                    "O {} {} em {} é representado como {}",
                    self.from.display_name(),
                    self.digits,
                    to.display_name(),
                    parsefmt::fmt(self.value, to.radix()),
                )
            })
            .collect()
    }
}

#[test]
fn single_destination_test() {
    let session = Session {
        from: Base::Decimal,
        to: Base::Hexadecimal,
        digits: "255".to_owned(),
        value: 255,
    };
    assert_eq!(
        session.result_lines(),
        vec!["O decimal 255 em hexadecimal é representado como FF".to_owned()]
    );
}

#[test]
fn fan_out_test() {
    let session = Session {
        from: Base::Hexadecimal,
        to: Base::AllBases,
        digits: "FF".to_owned(),
        value: 255,
    };
    let lines = session.result_lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("em binário é representado como 11111111"));
    assert!(lines[1].ends_with("em octal é representado como 377"));
    assert!(lines[2].ends_with("em decimal é representado como 255"));
    assert!(lines[3].ends_with("em hexadecimal é representado como FF"));
}

#[test]
fn fan_out_zero_test() {
    let session = Session {
        from: Base::Decimal,
        to: Base::AllBases,
        digits: "0".to_owned(),
        value: 0,
    };
    let lines = session.result_lines();
    assert_eq!(lines.len(), 4);
    for line in lines {
        assert!(line.ends_with(" 0"));
    }
}
