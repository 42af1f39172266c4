use paint_json::{logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing();

    let stdout = std::io::stdout();
    match run(&mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "round trip failed");
            ExitCode::FAILURE
        }
    }
}
