mod cli;
mod logging;

use std::{io::Write, process::ExitCode};

use clap::Parser;
use cscan::{Diagnostics, ScanError, SourceFile};

fn scan(path: &std::path::Path, out: &mut dyn Write) -> Result<(), ScanError> {
    let file = SourceFile::open(path)?;
    let mut diags = Diagnostics::stdout(file.path());
    file.dump(&mut diags, out)?;
    log::debug!(
        "{}: {} diagnostics",
        file.path().display(),
        diags.reported().len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(args.log_level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut code = ExitCode::SUCCESS;
    for path in &args.files {
        if let Err(err) = scan(path, &mut out) {
            log::error!("{}: {}", path.display(), err);
            eprintln!("cscan: {}: {}", path.display(), err);
            code = ExitCode::FAILURE;
        }
    }
    code
}
