use std::process::ExitCode;

use nook::error::Error;

fn main() -> ExitCode {
    if let Err(err) = nook::run() {
        eprintln!("error: {err:#}");
        if let Some(Error::PermissionDenied) = err.root_cause().downcast_ref::<Error>() {
            eprintln!();
            eprintln!("To grant access:");
            eprintln!("  1. Open System Settings > Privacy & Security > Automation");
            eprintln!("  2. Find your terminal application (Terminal.app, iTerm, ...)");
            eprintln!("  3. Enable access to Notes and restart your terminal");
            return ExitCode::from(2);
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
