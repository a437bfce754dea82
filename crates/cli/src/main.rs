use std::process::ExitCode;

fn main() -> ExitCode {
    ukef_cli::run()
}
