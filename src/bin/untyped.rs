use paint_json::{logging, run_untyped};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing();

    let stdout = std::io::stdout();
    if let Err(err) = run_untyped(&mut stdout.lock()) {
        tracing::error!(error = %err, "untyped round trip failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
