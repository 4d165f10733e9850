//! Scan rules applied to the text of build artifacts.
//!
//! Each rule is an independent predicate over one file's content and yields
//! zero or more findings, one per match occurrence. Rules share no state, so
//! the order of evaluation only affects the order findings are listed in.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::allow_list::DomainAllowList;
use super::artifact::Artifact;
use super::finding::{Finding, FindingKind, LineIndex, SensitivePattern};

static API_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)api[_-]?key\s*[:=]\s*["'`][^"'`\s]+["'`]"#).unwrap());

static SECRET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)secret\s*[:=]\s*["'`][^"'`\s]+["'`]"#).unwrap());

static PASSWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)password\s*[:=]\s*["'`][^"'`\s]+["'`]"#).unwrap());

static EMBEDDED_CREDENTIALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b[a-z][a-z0-9+.-]*://[^\s/:@"'`<>]+:[^\s/@"'`<>]+@[^\s/"'`<>]+"#).unwrap()
});

static DATABASE_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://[a-z0-9-]+\.supabase\.co\b").unwrap());

// Scheme and authority only. The host ends at the first character that cannot
// appear in a hostname, so `${`, `;` and `,` right after it are not captured.
static ABSOLUTE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bhttps?://[a-z0-9](?:[a-z0-9.-]*[a-z0-9])?(?::\d+)?").unwrap()
});

static COMPONENT_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfunction\s+[A-Z][A-Za-z0-9_$]*\s*\(").unwrap());

static CONSOLE_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bconsole\.(?:log|debug|info)\s*\(").unwrap());

fn sensitive_regex(pattern: SensitivePattern) -> &'static Regex {
    match pattern {
        SensitivePattern::ApiKey => &API_KEY,
        SensitivePattern::Secret => &SECRET,
        SensitivePattern::Password => &PASSWORD,
        SensitivePattern::EmbeddedCredentials => &EMBEDDED_CREDENTIALS,
        SensitivePattern::DatabaseHost => &DATABASE_HOST,
    }
}

/// A single check over one artifact's text.
pub trait ScanRule: Send + Sync {
    /// Short rule name for logs.
    fn name(&self) -> &'static str;

    fn applies_to(&self, artifact: &Artifact) -> bool;

    fn check(&self, artifact: &Artifact, content: &str) -> Vec<Finding>;
}

fn findings_for(
    regex: &Regex,
    artifact: &Artifact,
    content: &str,
    lines: &LineIndex,
    kind: impl Fn() -> FindingKind,
) -> Vec<Finding> {
    regex
        .find_iter(content)
        .map(|m| {
            Finding::new(
                artifact.path.clone(),
                kind(),
                m.as_str(),
                Some(lines.line_of(m.start())),
            )
        })
        .collect()
}

/// Looks for credentials and database hosts, in [`SensitivePattern::ALL`] order.
pub struct SensitiveDataRule;

impl ScanRule for SensitiveDataRule {
    fn name(&self) -> &'static str {
        "sensitive-data"
    }

    fn applies_to(&self, artifact: &Artifact) -> bool {
        artifact.is_text()
    }

    fn check(&self, artifact: &Artifact, content: &str) -> Vec<Finding> {
        let lines = LineIndex::new(content);
        SensitivePattern::ALL
            .iter()
            .flat_map(|pattern| {
                findings_for(sensitive_regex(*pattern), artifact, content, &lines, || {
                    FindingKind::SensitiveData(*pattern)
                })
            })
            .collect()
    }
}

/// Flags absolute URLs whose host is not allow-listed.
pub struct ExternalDomainRule {
    allow_list: DomainAllowList,
}

impl ExternalDomainRule {
    pub fn new(allow_list: DomainAllowList) -> Self {
        Self { allow_list }
    }
}

impl ScanRule for ExternalDomainRule {
    fn name(&self) -> &'static str {
        "external-domain"
    }

    fn applies_to(&self, artifact: &Artifact) -> bool {
        artifact.is_text()
    }

    fn check(&self, artifact: &Artifact, content: &str) -> Vec<Finding> {
        let lines = LineIndex::new(content);
        ABSOLUTE_URL
            .find_iter(content)
            .filter_map(|m| {
                let url = Url::parse(m.as_str()).ok()?;
                let host = url.host_str()?.to_ascii_lowercase();
                if self.allow_list.is_allowed(&host) {
                    return None;
                }
                Some(Finding::new(
                    artifact.path.clone(),
                    FindingKind::DisallowedDomain(host.clone()),
                    host,
                    Some(lines.line_of(m.start())),
                ))
            })
            .collect()
    }
}

/// Capitalized `function Name(` declarations survive only in un-minified bundles.
pub struct UnobfuscatedComponentRule;

impl ScanRule for UnobfuscatedComponentRule {
    fn name(&self) -> &'static str {
        "unobfuscated-component"
    }

    fn applies_to(&self, artifact: &Artifact) -> bool {
        artifact.is_own_script()
    }

    fn check(&self, artifact: &Artifact, content: &str) -> Vec<Finding> {
        let lines = LineIndex::new(content);
        findings_for(&COMPONENT_FUNCTION, artifact, content, &lines, || {
            FindingKind::UnobfuscatedComponent
        })
    }
}

/// Logging calls left in first-party scripts.
pub struct ConsoleStatementRule;

impl ScanRule for ConsoleStatementRule {
    fn name(&self) -> &'static str {
        "console-statement"
    }

    fn applies_to(&self, artifact: &Artifact) -> bool {
        artifact.is_own_script()
    }

    fn check(&self, artifact: &Artifact, content: &str) -> Vec<Finding> {
        let lines = LineIndex::new(content);
        findings_for(&CONSOLE_CALL, artifact, content, &lines, || {
            FindingKind::ConsoleStatement
        })
    }
}

/// Ordered rule set run against every artifact.
pub struct BuildScanner {
    rules: Vec<Box<dyn ScanRule>>,
}

impl BuildScanner {
    /// The standard rule set with the given domain allow-list.
    pub fn new(allow_list: DomainAllowList) -> Self {
        Self::with_rules(vec![
            Box::new(SensitiveDataRule),
            Box::new(ExternalDomainRule::new(allow_list)),
            Box::new(UnobfuscatedComponentRule),
            Box::new(ConsoleStatementRule),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn ScanRule>>) -> Self {
        Self { rules }
    }

    pub fn scan(&self, artifact: &Artifact, content: &str) -> Vec<Finding> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(artifact))
            .flat_map(|rule| {
                let findings = rule.check(artifact, content);
                if !findings.is_empty() {
                    tracing::debug!(
                        "{} matched {} time(s) in {}",
                        rule.name(),
                        findings.len(),
                        artifact.path.display()
                    );
                }
                findings
            })
            .collect()
    }
}

impl Default for BuildScanner {
    fn default() -> Self {
        Self::new(DomainAllowList::default())
    }
}
