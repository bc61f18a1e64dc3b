use std::process::ExitCode;

use colorcheck::cli::{self, Outcome};
use colorcheck::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Invalid) => ExitCode::from(1),
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::from(2)
        }
    }
}
