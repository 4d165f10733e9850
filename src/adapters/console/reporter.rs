//! Console reporter for CI output.
//!
//! Renders verification reports and image conversion summaries as colored
//! text. Severity colors: cyan for info, yellow for warnings, red for errors,
//! green for passing checks.

use std::io::{self, Write};
use std::path::Path;

use crate::domain::assets::{ConversionOutcome, ConversionSummary};
use crate::domain::verification::{CspStatus, Severity, VerificationReport};

const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Tone of one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Error,
    Pass,
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Tone::Info,
            Severity::Warning => Tone::Warning,
            Severity::Error => Tone::Error,
        }
    }
}

impl Tone {
    fn color(&self) -> &'static str {
        match self {
            Tone::Info => CYAN,
            Tone::Warning => YELLOW,
            Tone::Error => RED,
            Tone::Pass => GREEN,
        }
    }
}

/// Writes report lines, with or without ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    colored: bool,
}

impl ConsoleReporter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Colored unless `NO_COLOR` is set to a non-empty value.
    ///
    /// CI logs render ANSI colors, so a non-terminal stdout stays colored.
    pub fn from_env() -> Self {
        Self::with_no_color(std::env::var("NO_COLOR").ok().as_deref())
    }

    /// Colored unless the given `NO_COLOR` value is present and non-empty.
    pub fn with_no_color(no_color: Option<&str>) -> Self {
        Self::new(no_color.map_or(true, str::is_empty))
    }

    /// Writes one line in the given tone.
    pub fn line(&self, out: &mut impl Write, tone: Tone, text: &str) -> io::Result<()> {
        if self.colored {
            writeln!(out, "{}{}{}", tone.color(), text, RESET)
        } else {
            writeln!(out, "{}", text)
        }
    }

    /// Renders a full verification report.
    pub fn verification(&self, out: &mut impl Write, report: &VerificationReport) -> io::Result<()> {
        self.line(
            out,
            Tone::Info,
            &format!("Verifying build output in {}", report.output_dir.display()),
        )?;

        for (path, findings) in report.by_file() {
            self.line(out, Tone::Info, &format!("\n{}", path.display()))?;
            for finding in findings {
                let location = finding
                    .line
                    .map(|line| format!(":{}", line))
                    .unwrap_or_default();
                self.line(
                    out,
                    finding.severity().into(),
                    &format!(
                        "  [{}]{} {}: {}",
                        finding.severity(),
                        location,
                        finding.kind.description(),
                        finding.matched
                    ),
                )?;
            }
        }

        match report.csp {
            CspStatus::Present => self.line(out, Tone::Pass, "\nContent-Security-Policy found")?,
            CspStatus::Missing => self.line(
                out,
                Tone::Error,
                "\nContent-Security-Policy missing from the entry file",
            )?,
            CspStatus::EntryNotFound => self.line(
                out,
                Tone::Info,
                "\nNo HTML entry file found, Content-Security-Policy not checked",
            )?,
        }

        let summary = format!(
            "\nScanned {} files: {} error(s), {} warning(s)",
            report.files_scanned,
            report.count(Severity::Error),
            report.count(Severity::Warning)
        );
        let tone = if report.is_clean() {
            Tone::Pass
        } else if report.count(Severity::Error) > 0 {
            Tone::Error
        } else {
            Tone::Warning
        };
        self.line(out, tone, &summary)
    }

    /// Renders the outcome of an image conversion run.
    pub fn conversion(
        &self,
        out: &mut impl Write,
        source_dir: &Path,
        summary: &ConversionSummary,
    ) -> io::Result<()> {
        self.line(
            out,
            Tone::Info,
            &format!("Converting images in {}", source_dir.display()),
        )?;

        for outcome in &summary.outcomes {
            match outcome {
                ConversionOutcome::Converted {
                    source,
                    target,
                    source_bytes,
                    target_bytes,
                } => self.line(
                    out,
                    Tone::Pass,
                    &format!(
                        "  {} -> {} ({} -> {} bytes)",
                        source.display(),
                        target.display(),
                        source_bytes,
                        target_bytes
                    ),
                )?,
                ConversionOutcome::Skipped { source } => self.line(
                    out,
                    Tone::Info,
                    &format!("  {} is up to date", source.display()),
                )?,
                ConversionOutcome::Failed { source, reason } => self.line(
                    out,
                    Tone::Error,
                    &format!("  {} failed: {}", source.display(), reason),
                )?,
            }
        }

        let tone = if summary.failed() > 0 {
            Tone::Warning
        } else {
            Tone::Pass
        };
        self.line(
            out,
            tone,
            &format!(
                "\n{} converted, {} up to date, {} failed ({:.1}% smaller)",
                summary.converted(),
                summary.skipped(),
                summary.failed(),
                summary.savings_percent()
            ),
        )
    }
}
