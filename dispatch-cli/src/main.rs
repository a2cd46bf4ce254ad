//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use dispatch_cli::CliError;

fn main() {
    if let Err(err) = dispatch_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("campus-dispatch: {err}");
        std::process::exit(1);
    }
}
