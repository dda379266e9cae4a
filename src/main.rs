pub mod convbase;
pub mod convert;
pub mod term_frontend;

fn main() {
    term_frontend::crossterm_main();
}
