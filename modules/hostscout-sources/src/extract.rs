//! Provider payload extraction.
//!
//! The passive-DNS wire format is newline-delimited JSON: one record per
//! line, each independently decodable, each carrying at least an `rrname`
//! field. One malformed line must not lose the rest of the batch.

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use hostscout_common::SourceError;

use crate::nameset::NameSet;

/// One passive-DNS record. Unknown fields are ignored; a record without
/// `rrname` fails to decode and is skipped.
#[derive(Debug, Deserialize)]
struct PdnsRecord {
    rrname: String,
}

/// Extract the unique hostnames matching `pattern` from a raw NDJSON body.
///
/// Blank lines are skipped; undecodable lines are skipped with a debug log;
/// duplicate hostnames across lines collapse to one.
pub fn extract_names(body: &str, pattern: &Regex) -> NameSet {
    let mut names = NameSet::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record: PdnsRecord = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(e) => {
                debug!("{}", SourceError::Decode(e.to_string()));
                continue;
            }
        };

        if pattern.is_match(&record.rrname) {
            names.insert(record.rrname);
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostscout_common::domain_pattern;

    #[test]
    fn worked_example_yields_one_name() {
        let body = concat!(
            "{\"rrname\":\"a.example.com\"}\n",
            "{\"rrname\":\"a.example.com\"}\n",
            "{\"rrname\":\"other.org\"}\n",
            "not-json",
        );
        let pattern = domain_pattern("example.com").unwrap();

        let names = extract_names(body, &pattern);

        assert_eq!(names.len(), 1);
        assert!(names.contains("a.example.com"));
    }

    #[test]
    fn malformed_lines_do_not_lose_valid_ones() {
        let body = concat!(
            "{\"rrname\":\"a.example.com\"}\n",
            "{broken\n",
            "{\"rrname\":\"b.example.com\"}\n",
            "{\"ttl\":300}\n",
            "{\"rrname\":\"c.example.com\"}",
        );
        let pattern = domain_pattern("example.com").unwrap();

        let names = extract_names(body, &pattern);

        assert_eq!(names.len(), 3);
        assert!(names.contains("a.example.com"));
        assert!(names.contains("b.example.com"));
        assert!(names.contains("c.example.com"));
    }

    #[test]
    fn names_outside_the_domain_are_filtered() {
        let body = concat!(
            "{\"rrname\":\"a.example.com\"}\n",
            "{\"rrname\":\"example.com.evil.org\"}\n",
            "{\"rrname\":\"notexample.com\"}",
        );
        let pattern = domain_pattern("example.com").unwrap();

        let names = extract_names(body, &pattern);

        assert_eq!(names.len(), 1);
        assert!(names.contains("a.example.com"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = "{\"rrname\":\"a.example.com\",\"rrtype\":\"A\",\"count\":42}";
        let pattern = domain_pattern("example.com").unwrap();

        let names = extract_names(body, &pattern);

        assert!(names.contains("a.example.com"));
    }

    #[test]
    fn blank_lines_and_empty_body_are_fine() {
        let pattern = domain_pattern("example.com").unwrap();

        assert!(extract_names("", &pattern).is_empty());
        assert!(extract_names("\n\n  \n", &pattern).is_empty());
    }
}
