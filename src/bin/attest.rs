// Attest command-line runner
// Usage: attest run <FILE>... | attest check <FILE>...

use std::process::ExitCode;

fn main() -> ExitCode {
    attest::cli::run()
}
