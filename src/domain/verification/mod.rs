//! Verification module - static checks over a produced build output.
//!
//! The scan is advisory: findings describe what a human should look at in CI
//! output, they do not by themselves fail the build.

mod allow_list;
mod artifact;
mod csp;
mod finding;
mod report;
mod rules;

pub use allow_list::{DomainAllowList, DEFAULT_ALLOWED_DOMAINS};
pub use artifact::{Artifact, ArtifactKind, MARKUP_EXTENSIONS, SCRIPT_EXTENSIONS};
pub use csp::{CspStatus, CSP_MARKER};
pub use finding::{Finding, FindingKind, SensitivePattern, Severity};
pub use report::VerificationReport;
pub use rules::{
    BuildScanner, ConsoleStatementRule, ExternalDomainRule, ScanRule, SensitiveDataRule,
    UnobfuscatedComponentRule,
};
