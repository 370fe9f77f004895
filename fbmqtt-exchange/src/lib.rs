//! # fbmqtt-exchange
//!
//! Buffering and dispatch between the FB MQTT network boundary and the
//! persistence collaborators.
//!
//! # Architecture
//!
//! ```text
//! Network events → MessageHandler → MessageQueue → ConsumerRouter → Consumers
//!                  (validate+parse)  (FIFO buffer)   (drain tick)
//! ```
//!
//! The handler runs synchronously inside the network event callback and only
//! ever appends; the queue is drained by an externally scheduled tick. That
//! gap is the system's backpressure: bursts of inbound traffic pile up in
//! the unbounded queue while consumers work through messages one at a time,
//! strictly in arrival order.
//!
//! # Quick Start
//!
//! ```rust
//! use fbmqtt_exchange::{Consumer, ConsumerResult, ConsumerRouter, MessageHandler};
//! use fbmqtt_protocol::{ConnectorId, Message, MessageKind};
//! use uuid::Uuid;
//!
//! struct DeviceAttributeConsumer;
//!
//! impl Consumer for DeviceAttributeConsumer {
//!     fn kind(&self) -> MessageKind {
//!         MessageKind::DeviceAttribute
//!     }
//!
//!     fn consume(&mut self, message: &Message) -> ConsumerResult {
//!         // apply to storage here
//!         Ok(())
//!     }
//! }
//!
//! let mut handler = MessageHandler::new(ConnectorId::from(Uuid::new_v4()));
//! let mut router = ConsumerRouter::new();
//! router.register(Box::new(DeviceAttributeConsumer));
//!
//! // network callback:
//! handler.on_message("/fb/v1/device-name/$name", "Some content", false);
//!
//! // scheduled drain tick:
//! let processed = router.drain(handler.queue_mut());
//! assert_eq!(processed, 1);
//! ```

pub mod consumer;
pub mod error;
pub mod handler;
pub mod logging;
pub mod queue;

// Re-exports - Public API
pub use consumer::{Consumer, ConsumerRouter};
pub use error::{ConsumerError, ConsumerResult};
pub use handler::MessageHandler;
pub use logging::{init_logging, init_logging_from_env, init_silent, LoggingError, LoggingMode};
pub use queue::MessageQueue;

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use fbmqtt_protocol::{ConnectorId, Message, MessageKind};

    use super::*;

    struct CountingConsumer {
        kind: MessageKind,
        count: usize,
    }

    impl Consumer for CountingConsumer {
        fn kind(&self) -> MessageKind {
            self.kind
        }

        fn consume(&mut self, _message: &Message) -> ConsumerResult {
            self.count += 1;
            Ok(())
        }
    }

    #[test]
    fn test_full_pipeline() {
        let mut handler = MessageHandler::new(ConnectorId::from(Uuid::new_v4()));
        let mut router = ConsumerRouter::new();
        router.register(Box::new(CountingConsumer {
            kind: MessageKind::DeviceAttribute,
            count: 0,
        }));
        router.register(Box::new(CountingConsumer {
            kind: MessageKind::ChannelProperty,
            count: 0,
        }));

        // Burst of events, one of them malformed.
        handler.on_message("/fb/v1/device-name/$name", "Some content", false);
        handler.on_message("/fb/v1/device-name/$unknown", "x", false);
        handler.on_message(
            "/fb/v1/device-name/$channel/channel-one/$property/temperature",
            "21.5",
            false,
        );

        assert_eq!(handler.queue().len(), 2);

        let processed = router.drain(handler.queue_mut());

        assert_eq!(processed, 2);
        assert!(handler.queue().is_empty());
    }
}
