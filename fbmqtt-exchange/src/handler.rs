//! Inbound network-event boundary.
//!
//! The MQTT session collaborator calls [`MessageHandler::on_message`] once
//! per received message. Parse failures are expected per-message conditions:
//! they are logged at debug severity and the message is dropped — the event
//! loop and the queue are never disturbed. Lost messages are not retried;
//! devices republish periodically and retained topics replay on subscribe.

use tracing::debug;

use fbmqtt_protocol::{parser, validator, ConnectorId};

use crate::queue::MessageQueue;

/// Boundary between the network session and the message queue.
pub struct MessageHandler {
    connector: ConnectorId,
    queue: MessageQueue,
}

impl MessageHandler {
    /// Create a handler for one connector session with an empty queue.
    pub fn new(connector: ConnectorId) -> Self {
        Self {
            connector,
            queue: MessageQueue::new(),
        }
    }

    /// Connector this handler receives for.
    pub fn connector(&self) -> &ConnectorId {
        &self.connector
    }

    /// Handle one received message; returns whether a message was queued.
    ///
    /// Non-convention and unknown-version traffic is ignored silently, as
    /// are broker-reflected write commands. Convention traffic that fails
    /// to parse is logged and dropped.
    pub fn on_message(&mut self, topic: &str, payload: &str, retained: bool) -> bool {
        if !validator::validate_convention(topic)
            || !validator::validate_version(topic)
            || validator::is_command(topic)
        {
            return false;
        }

        match parser::parse(self.connector, topic, payload, retained) {
            Ok(message) => {
                self.queue.append(message);
                true
            }
            Err(error) => {
                debug!(%topic, %error, "received message could not be parsed, dropping");
                false
            }
        }
    }

    /// Queue of decoded messages awaiting the drain tick.
    pub fn queue(&self) -> &MessageQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut MessageQueue {
        &mut self.queue
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn handler() -> MessageHandler {
        MessageHandler::new(ConnectorId::from(Uuid::new_v4()))
    }

    #[test]
    fn test_valid_message_is_queued() {
        let mut handler = handler();

        assert!(handler.on_message("/fb/v1/device-name/$name", "Some content", false));
        assert_eq!(handler.queue().len(), 1);

        let message = handler.queue_mut().dequeue().unwrap();
        assert_eq!(message.device().as_str(), "device-name");
    }

    #[test]
    fn test_foreign_traffic_is_ignored_silently() {
        let mut handler = handler();

        assert!(!handler.on_message("/homie/v1/device/$name", "x", false));
        assert!(!handler.on_message("/fb/v2/device-name/$name", "x", false));
        assert!(!handler.on_message("/fb/v1/device-name/$property/brightness/set", "50", false));
        assert!(handler.queue().is_empty());
    }

    #[test]
    fn test_parse_failure_leaves_queue_intact() {
        let mut handler = handler();

        assert!(handler.on_message("/fb/v1/device-name/$name", "First", false));
        assert!(!handler.on_message("/fb/v1/device-name/$unknown", "x", false));
        assert!(!handler.on_message(
            "/fb/v1/device-name/$property/brightness/$format",
            "5:1",
            false,
        ));
        assert!(handler.on_message("/fb/v1/device-name/$state", "ready", false));

        // Only the two valid messages made it through, in order.
        assert_eq!(handler.queue().len(), 2);
        let first = handler.queue_mut().dequeue().unwrap();
        let second = handler.queue_mut().dequeue().unwrap();
        assert_eq!(first.kind().to_string(), "device-attribute");
        assert_eq!(second.kind().to_string(), "device-attribute");
    }

    #[test]
    fn test_retained_flag_is_carried_through() {
        let mut handler = handler();

        assert!(handler.on_message("/fb/v1/device-name/$name", "Some content", true));
        assert!(handler.queue_mut().dequeue().unwrap().retained());
    }
}
