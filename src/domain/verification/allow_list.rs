//! Domains permitted to appear in build output.

/// Domains the site itself serves from.
pub const DEFAULT_ALLOWED_DOMAINS: [&str; 3] = ["zantaku.com", "api.zantaku.com", "cdn.zantaku.com"];

const LOCALHOST: &str = "localhost";

/// Set of allowed domains. `localhost` is always allowed.
///
/// A host matches an entry when it equals it or is a subdomain of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainAllowList {
    domains: Vec<String>,
}

impl DomainAllowList {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| normalize(d.as_ref()))
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    pub fn is_allowed(&self, host: &str) -> bool {
        let host = normalize(host);
        if host == LOCALHOST {
            return true;
        }
        self.domains.iter().any(|allowed| {
            host == *allowed
                || host
                    .strip_suffix(allowed.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

impl Default for DomainAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_DOMAINS)
    }
}

fn normalize(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_allows_site_domains() {
        let list = DomainAllowList::default();
        assert!(list.is_allowed("zantaku.com"));
        assert!(list.is_allowed("cdn.zantaku.com"));
        assert!(list.is_allowed("API.Zantaku.com"));
    }

    #[test]
    fn localhost_is_always_allowed() {
        let list = DomainAllowList::new(Vec::<String>::new());
        assert!(list.is_allowed("localhost"));
    }

    #[test]
    fn subdomains_match_but_lookalikes_do_not() {
        let list = DomainAllowList::default();
        assert!(list.is_allowed("img.cdn.zantaku.com"));
        assert!(!list.is_allowed("notzantaku.com"));
        assert!(!list.is_allowed("zantaku.com.evil.example"));
        assert!(!list.is_allowed("evil-tracker.example.com"));
    }

    #[test]
    fn blank_entries_are_ignored() {
        let list = DomainAllowList::new(["", "  ", "example.org."]);
        assert_eq!(list.domains(), &["example.org".to_string()]);
    }
}
