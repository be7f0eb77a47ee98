use std::process::ExitCode;

use oeis_search::cli;
use oeis_search::error::FetchError;

fn main() -> ExitCode {
    match cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.downcast_ref::<FetchError>()
                .map(FetchError::exit_code)
                .unwrap_or(ExitCode::FAILURE)
        }
    }
}
