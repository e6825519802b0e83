use std::process::ExitCode;

use dishes::main as dishes_main;

fn main() -> ExitCode {
    dishes_main(std::env::args_os())
}
