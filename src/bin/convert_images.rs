//! convert-images - writes a WebP sibling for every PNG and JPEG asset.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use zantaku_site_tools::adapters::{ConsoleReporter, LocalFileTree, Tone, WebpConverter};
use zantaku_site_tools::application::{ConvertImagesCommand, ConvertImagesHandler};
use zantaku_site_tools::config::AppConfig;
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

    let images = &config.images;
    let handler = ConvertImagesHandler::new(
        Arc::new(LocalFileTree::new(&images.source_dir)),
        Arc::new(WebpConverter::new()),
    );

    match handler.handle(ConvertImagesCommand {
        force: images.force,
    }) {
        Ok(summary) => {
            let mut out = io::stdout().lock();
            if let Err(e) = reporter.conversion(&mut out, &images.source_dir, &summary) {
                tracing::error!("Failed to write summary: {}", e);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = reporter.line(&mut io::stderr(), Tone::Error, &e.to_string());
            ExitCode::FAILURE
        }
    }
}
