use regex::Regex;

/// Compile the matching pattern for a target domain.
///
/// The pattern is case-sensitive, anchored to the whole candidate, and
/// accepts the domain itself or any chain of valid DNS labels above it
/// (`a.example.com`, `a.b.example.com`, but not `example.com.evil.org`
/// or `notexample.com`).
///
/// Returns `None` when the domain cannot be turned into a pattern — the
/// caller must treat that domain as not enumerable and no-op.
pub fn domain_pattern(domain: &str) -> Option<Regex> {
    let domain = domain.trim().trim_matches('.');
    if domain.is_empty() || !domain.contains('.') {
        return None;
    }

    let escaped = regex::escape(domain);
    // Zero or more subdomain labels, then the domain itself.
    let pattern = format!(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9_-]{{0,61}}[a-zA-Z0-9])?\.)*{escaped}$");
    Regex::new(&pattern).ok()
}
