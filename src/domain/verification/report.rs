//! Result of one verification pass.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::csp::CspStatus;
use super::finding::{Finding, FindingKind, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub output_dir: PathBuf,
    pub files_scanned: usize,
    pub findings: Vec<Finding>,
    pub csp: CspStatus,
}

impl VerificationReport {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            files_scanned: 0,
            findings: Vec::new(),
            csp: CspStatus::EntryNotFound,
        }
    }

    /// Records the entry file check, adding a finding when the policy is missing.
    pub fn record_csp(&mut self, entry: &Path, status: CspStatus) {
        self.csp = status;
        if status == CspStatus::Missing {
            self.findings.push(Finding::new(
                entry,
                FindingKind::MissingCsp,
                super::csp::CSP_MARKER,
                None,
            ));
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity() == severity)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings grouped by file, files in path order.
    pub fn by_file(&self) -> BTreeMap<&Path, Vec<&Finding>> {
        let mut grouped: BTreeMap<&Path, Vec<&Finding>> = BTreeMap::new();
        for finding in &self.findings {
            grouped.entry(finding.path.as_path()).or_default().push(finding);
        }
        grouped
    }

    /// Process exit code for this report.
    ///
    /// Findings are advisory and never fail the run unless `strict` is set,
    /// in which case any error-severity finding does.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && self.count(Severity::Error) > 0 {
            1
        } else {
            0
        }
    }
}
