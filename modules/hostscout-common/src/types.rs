use serde::{Deserialize, Serialize};

// --- Source identity ---

/// Category of a data source, forwarded on every discovery so downstream
/// consumers can weigh results by how they were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Authenticated provider API (passive DNS, certificate logs, ...).
    Api,
    /// Plain web scraping.
    Scrape,
    /// Historical archive lookup.
    Archive,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Api => write!(f, "api"),
            SourceKind::Scrape => write!(f, "scrape"),
            SourceKind::Archive => write!(f, "archive"),
        }
    }
}

/// Identity tag for one source instance. Immutable after construction;
/// this is what shows up in bus messages and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub name: String,
    pub kind: SourceKind,
}

impl SourceInfo {
    pub fn new(name: &str, kind: SourceKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

impl std::fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// --- Credentials ---

/// Username/password pair for a provider that requires authentication.
/// Owned by `Config`; a source clones its pair at configure time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Both halves present and non-empty. An incomplete pair disables the
    /// source the same way an absent one does.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

// --- Requests and events ---

/// One domain enumeration need, handed to a source by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryRequest {
    /// Target domain, e.g. `example.com`.
    pub domain: String,
    /// Correlation tag for the enumeration run this request belongs to.
    pub run_id: String,
}

/// One confirmed candidate hostname, published on the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryEvent {
    /// The discovered hostname.
    pub name: String,
    /// The domain it was requested under.
    pub domain: String,
    /// Category of the source that found it.
    pub source_kind: SourceKind,
    /// Name of the source that found it.
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_credentials_are_not_complete() {
        let full = Credentials {
            username: "u".to_string(),
            password: "p".to_string(),
        };
        assert!(full.is_complete());

        let no_password = Credentials {
            username: "u".to_string(),
            password: String::new(),
        };
        assert!(!no_password.is_complete());

        let no_username = Credentials {
            username: String::new(),
            password: "p".to_string(),
        };
        assert!(!no_username.is_complete());
    }

    #[test]
    fn source_kind_displays_lowercase() {
        assert_eq!(SourceKind::Api.to_string(), "api");
        assert_eq!(SourceKind::Scrape.to_string(), "scrape");
    }
}
