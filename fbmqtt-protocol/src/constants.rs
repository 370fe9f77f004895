//! Protocol constants shared by the validator, parser, and builder.

use serde::{Deserialize, Serialize};

/// Topic segment delimiter.
pub const TOPIC_DELIMITER: &str = "/";

/// Convention prefix — every FB MQTT topic starts with `/fb`.
pub const API_PREFIX: &str = "/fb";

/// Version token for the v1 convention.
pub const API_V1_VERSION: &str = "v1";

/// Canonical boolean payload literals.
pub const PAYLOAD_BOOL_TRUE: &str = "true";
pub const PAYLOAD_BOOL_FALSE: &str = "false";

/// Sentinel devices publish when a property carries no value.
///
/// The sentinel only ever appears on the wire; inside the message model an
/// absent value is `None` and the sentinel must never be serialized back out.
pub const VALUE_NOT_SET: &str = "value_not_set";

/// MQTT quality-of-service level for a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qos {
    /// QoS 0 — fire and forget.
    AtMostOnce,
    /// QoS 1 — acknowledged delivery. Default for all outbound commands.
    AtLeastOnce,
    /// QoS 2 — exactly-once handshake.
    ExactlyOnce,
}

impl Qos {
    /// Numeric level as used by MQTT transports.
    pub fn level(self) -> u8 {
        match self {
            Qos::AtMostOnce => 0,
            Qos::AtLeastOnce => 1,
            Qos::ExactlyOnce => 2,
        }
    }
}

impl Default for Qos {
    fn default() -> Self {
        Qos::AtLeastOnce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qos_levels() {
        assert_eq!(Qos::AtMostOnce.level(), 0);
        assert_eq!(Qos::AtLeastOnce.level(), 1);
        assert_eq!(Qos::ExactlyOnce.level(), 2);
    }

    #[test]
    fn test_default_qos_is_at_least_once() {
        assert_eq!(Qos::default(), Qos::AtLeastOnce);
    }
}
