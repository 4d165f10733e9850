//! verify-build - advisory scan of the production build output.
//!
//! Exits 1 only when the output directory is missing or cannot be listed,
//! or when `ZANTAKU__VERIFIER__STRICT` is set and an error-level finding
//! was reported.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use zantaku_site_tools::adapters::{ConsoleReporter, LocalFileTree, Tone};
use zantaku_site_tools::application::{VerifyBuildCommand, VerifyBuildHandler};
use zantaku_site_tools::config::AppConfig;
use zantaku_site_tools::domain::verification::BuildScanner;
use zantaku_site_tools::telemetry;

fn main() -> ExitCode {
    let reporter = ConsoleReporter::from_env();

    let config = match AppConfig::load().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            let _ = reporter.line(&mut io::stderr(), Tone::Error, &e.to_string());
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(&config.log_level, config.log_json);

    let verifier = &config.verifier;
    let handler = VerifyBuildHandler::new(
        Arc::new(LocalFileTree::new(&verifier.output_dir)),
        BuildScanner::new(verifier.allow_list()),
    );
    let command = VerifyBuildCommand {
        entry_file: verifier.entry_file.clone(),
    };

    let report = match handler.handle(command) {
        Ok(report) => report,
        Err(e) => {
            let _ = reporter.line(&mut io::stderr(), Tone::Error, &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = reporter.verification(&mut io::stdout().lock(), &report) {
        tracing::error!("Failed to write report: {}", e);
    }

    match report.exit_code(verifier.strict) {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
