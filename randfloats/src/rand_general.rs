use randfloats::Notation;
use std::process::ExitCode;

fn main() -> ExitCode {
    randfloats::main_with(Notation::General)
}
