//! Bus message types — the fixed set of topics a data source publishes.
//!
//! Subscribers are unknown to the publisher; loose coupling happens through
//! this enum. Each variant carries one fixed payload shape and maps to one
//! priority.

use serde::{Deserialize, Serialize};

use hostscout_common::DiscoveryEvent;

/// Delivery priority hint for subscribers that queue by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Critical,
}

/// One message on the discovery bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BusMessage {
    /// Liveness heartbeat from a source. Published twice per successful
    /// invocation: once before the provider call begins and once right
    /// after it returns. Progress trackers treat it as "work in progress";
    /// it carries no other meaning.
    SourceActive { source: String },

    /// Human-readable log line for the run log.
    Log { message: String },

    /// One unique candidate hostname discovered for a requested domain.
    NameDiscovered { event: DiscoveryEvent },
}

impl BusMessage {
    pub fn priority(&self) -> Priority {
        match self {
            BusMessage::SourceActive { .. } => Priority::Critical,
            BusMessage::Log { .. } => Priority::High,
            BusMessage::NameDiscovered { .. } => Priority::High,
        }
    }

    /// Variant name for logs and persistence keys.
    pub fn topic(&self) -> &'static str {
        match self {
            BusMessage::SourceActive { .. } => "source_active",
            BusMessage::Log { .. } => "log",
            BusMessage::NameDiscovered { .. } => "name_discovered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostscout_common::SourceKind;

    #[test]
    fn priorities_follow_topic() {
        let active = BusMessage::SourceActive {
            source: "CIRCL".to_string(),
        };
        assert_eq!(active.priority(), Priority::Critical);

        let log = BusMessage::Log {
            message: "hello".to_string(),
        };
        assert_eq!(log.priority(), Priority::High);

        let discovered = BusMessage::NameDiscovered {
            event: DiscoveryEvent {
                name: "a.example.com".to_string(),
                domain: "example.com".to_string(),
                source_kind: SourceKind::Api,
                source: "CIRCL".to_string(),
            },
        };
        assert_eq!(discovered.priority(), Priority::High);
    }

    #[test]
    fn messages_serialize_with_type_tag() {
        let log = BusMessage::Log {
            message: "querying".to_string(),
        };
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["type"], "log");
        assert_eq!(json["message"], "querying");
    }
}
