//! Findings produced by a build output scan.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// How loudly a finding is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Categories of sensitive data looked for in build output, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivePattern {
    ApiKey,
    Secret,
    Password,
    EmbeddedCredentials,
    DatabaseHost,
}

impl SensitivePattern {
    pub const ALL: [SensitivePattern; 5] = [
        SensitivePattern::ApiKey,
        SensitivePattern::Secret,
        SensitivePattern::Password,
        SensitivePattern::EmbeddedCredentials,
        SensitivePattern::DatabaseHost,
    ];

    /// Human readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            SensitivePattern::ApiKey => "API key",
            SensitivePattern::Secret => "secret",
            SensitivePattern::Password => "password",
            SensitivePattern::EmbeddedCredentials => "embedded credentials",
            SensitivePattern::DatabaseHost => "database host URL",
        }
    }
}

/// What a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FindingKind {
    SensitiveData(SensitivePattern),
    DisallowedDomain(String),
    UnobfuscatedComponent,
    ConsoleStatement,
    MissingCsp,
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::MissingCsp => Severity::Error,
            _ => Severity::Warning,
        }
    }

    pub fn description(&self) -> String {
        match self {
            FindingKind::SensitiveData(pattern) => {
                format!("possible {} exposed", pattern.label())
            }
            FindingKind::DisallowedDomain(domain) => {
                format!("reference to non-allow-listed domain {}", domain)
            }
            FindingKind::UnobfuscatedComponent => {
                "un-minified component function declaration".to_string()
            }
            FindingKind::ConsoleStatement => "logging call left in production output".to_string(),
            FindingKind::MissingCsp => "Content-Security-Policy not found".to_string(),
        }
    }
}

/// One match occurrence in one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Path relative to the scanned output directory.
    pub path: PathBuf,
    pub kind: FindingKind,
    /// The matched text, or the domain for domain findings.
    pub matched: String,
    /// 1-based line of the match, when it came from file content.
    pub line: Option<usize>,
}

impl Finding {
    pub fn new(
        path: impl Into<PathBuf>,
        kind: FindingKind,
        matched: impl Into<String>,
        line: Option<usize>,
    ) -> Self {
        Self {
            path: path.into(),
            kind,
            matched: matched.into(),
            line,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Newline offsets of one file, built once and shared by every match.
pub(crate) struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(content: &str) -> Self {
        let newlines = content
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| i)
            .collect();
        Self { newlines }
    }

    /// 1-based line number of a byte offset.
    pub(crate) fn line_of(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&newline| newline < offset) + 1
    }
}
