use crate::convbase::Session;
use crate::convert::base::{Base, CONCRETE};
use crate::convert::{parsefmt, validate, Value};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal;
use std::io::{stderr, stdin, stdout, BufRead, Write};

const READ_ERROR: &str = "ERRO: Não foi possível ler a entrada padrão.";
const OPTION_PARSE_ERROR: &str = "ERRO: Não foi possível converter a entrada em um decimal válido.";
const OPTION_RANGE_ERROR: &str = "ERRO: Opção inválida.";
const NUMBER_ERROR: &str =
    "ERRO: O número digitado não é válido na base escolhida ou o número é negativo.";
const OVERFLOW_ERROR: &str = "ERRO: O número digitado não cabe em 32 bits.";

pub fn crossterm_main() {
    let stdin = stdin();
    let mut input = stdin.lock();

    loop {
        let session = run_turn(&mut input, &mut stdout(), &mut stderr());
        for line in session.result_lines() {
            _ = queue!(stdout(), Print(line), Print("\n"));
        }
        _ = stdout().flush();

        if ask_exit(&mut input) {
            break;
        }
    }
}

fn run_turn(input: &mut impl BufRead, out: &mut impl Write, err: &mut impl Write) -> Session {
    print_options(out, false);
    let from = choose_base(input, out, err, "De qual base você deseja converter: ", false);

    print_options(out, true);
    let to = choose_base(input, out, err, "Para qual base você deseja converter: ", true);

    let (digits, value) = read_number(input, out, err, from);

    Session {
        from,
        to,
        digits,
        value,
    }
}

fn print_options(out: &mut impl Write, include_all: bool) {
    for (i, base) in CONCRETE.iter().enumerate() {
        _ = queue!(out, Print(format!("({}) {}\n", i, base.display_name())));
    }
    if include_all {
        _ = queue!(out, Print(format!("(4) {}\n", Base::AllBases.display_name())));
    }
}

// retries in a loop instead of recursing so a long session can't blow the stack
fn choose_base(
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    prompt: &str,
    include_all: bool,
) -> Base {
    let limit = if include_all { 4 } else { 3 };
    loop {
        _ = queue!(out, Print(prompt));
        _ = out.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(n) if n > 0 => {}
            _ => {
                report(err, READ_ERROR);
                continue;
            }
        }

        let index = match line.trim().parse::<usize>() {
            Ok(index) => index,
            Err(_) => {
                report(err, OPTION_PARSE_ERROR);
                continue;
            }
        };

        match Base::from_index(index) {
            Some(base) if index <= limit => return base,
            _ => {
                report(err, OPTION_RANGE_ERROR);
            }
        }
    }
}

// base selections stand, only the number is asked again on a bad entry
fn read_number(
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    from: Base,
) -> (String, Value) {
    loop {
        _ = queue!(
            out,
            Print(format!(
                "Digite o número em {} sem prefixo e sufixo: ",
                from.display_name()
            ))
        );
        _ = out.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(n) if n > 0 => {}
            _ => {
                report(err, READ_ERROR);
                continue;
            }
        }

        let digits = line.trim_end_matches(['\r', '\n']).to_owned();
        if !validate::is_valid(&digits, from) {
            report(err, NUMBER_ERROR);
            continue;
        }

        match parsefmt::parse(&digits, from.radix()) {
            Some(value) => return (digits, value),
            None => report(err, OVERFLOW_ERROR),
        }
    }
}

fn report(err: &mut impl Write, message: &str) {
    _ = queue!(
        err,
        SetForegroundColor(Color::Red),
        Print(message),
        ResetColor,
        Print("\n")
    );
    _ = err.flush();
}

fn ask_exit(input: &mut impl BufRead) -> bool {
    _ = queue!(stdout(), Print("Deseja sair? (S/n): "));
    _ = stdout().flush();

    if terminal::enable_raw_mode().is_ok() {
        let mut answer = 'n';
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let KeyCode::Char(c) = key.code {
                        answer = c;
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
        _ = terminal::disable_raw_mode();
        _ = queue!(stdout(), Print(format!("{}\n", answer)));
        _ = stdout().flush();
        return answer == 'S' || answer == 's';
    }

    // terminal without raw mode, fall back to reading a line
    let mut line = String::new();
    _ = input.read_line(&mut line);
    matches!(line.trim().chars().next(), Some('S' | 's'))
}

#[test]
fn choose_base_retry_test() {
    let mut input = std::io::Cursor::new(b"9\nx\n3\n".to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let base = choose_base(&mut input, &mut out, &mut err, "De qual base: ", false);
    assert_eq!(base, Base::Hexadecimal);
    let err = String::from_utf8(err).unwrap();
    assert!(err.contains("ERRO: Opção inválida."));
    assert!(err.contains("ERRO: Não foi possível converter"));
}

#[test]
fn choose_base_all_only_for_destination_test() {
    // index 4 is out of range when picking the source base
    let mut input = std::io::Cursor::new(b"4\n0\n".to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let base = choose_base(&mut input, &mut out, &mut err, "De qual base: ", false);
    assert_eq!(base, Base::Binary);
    assert!(String::from_utf8(err).unwrap().contains("ERRO: Opção inválida."));

    let mut input = std::io::Cursor::new(b"4\n".to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let base = choose_base(&mut input, &mut out, &mut err, "Para qual base: ", true);
    assert_eq!(base, Base::AllBases);
    assert!(err.is_empty());
}

#[test]
fn read_number_retry_test() {
    // "102" is not binary, the corrected entry goes through
    let mut input = std::io::Cursor::new(b"102\n11111111\n".to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let (digits, value) = read_number(&mut input, &mut out, &mut err, Base::Binary);
    assert_eq!(digits, "11111111");
    assert_eq!(value, 255);
    assert!(String::from_utf8(err).unwrap().contains(NUMBER_ERROR));
}

#[test]
fn read_number_overflow_test() {
    let mut input = std::io::Cursor::new(b"4294967296\n4294967295\n".to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let (_, value) = read_number(&mut input, &mut out, &mut err, Base::Decimal);
    assert_eq!(value, u32::MAX);
    assert!(String::from_utf8(err).unwrap().contains(OVERFLOW_ERROR));
}

#[test]
fn run_turn_test() {
    let mut input = std::io::Cursor::new(b"2\n3\n255\n".to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let session = run_turn(&mut input, &mut out, &mut err);
    assert_eq!(session.from, Base::Decimal);
    assert_eq!(session.to, Base::Hexadecimal);
    assert_eq!(
        session.result_lines(),
        vec!["O decimal 255 em hexadecimal é representado como FF".to_owned()]
    );
    assert!(err.is_empty());

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("(0) binário"));
    assert!(out.contains("(4) todas bases"));
    assert!(out.contains("Digite o número em decimal sem prefixo e sufixo: "));
}

#[test]
fn print_options_test() {
    let mut out = Vec::new();
    print_options(&mut out, false);
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "(0) binário\n(1) octal\n(2) decimal\n(3) hexadecimal\n");

    let mut out = Vec::new();
    print_options(&mut out, true);
    assert!(String::from_utf8(out).unwrap().ends_with("(4) todas bases\n"));
}
