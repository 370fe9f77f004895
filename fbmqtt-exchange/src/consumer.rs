//! Consumer registry and the queue drain loop.
//!
//! Consumers declare exactly one accepted message kind up front, so routing
//! is a tag comparison instead of any runtime type discovery. Registration
//! order is the dispatch order and stays deterministic for the lifetime of
//! the router.

use tracing::{debug, warn};

use fbmqtt_protocol::{Message, MessageKind};

use crate::error::ConsumerResult;
use crate::queue::MessageQueue;

/// A handler for exactly one message kind.
pub trait Consumer {
    /// The message kind this consumer accepts.
    fn kind(&self) -> MessageKind;

    /// Apply one message. Errors are confined to this message.
    fn consume(&mut self, message: &Message) -> ConsumerResult;
}

/// Registry of consumers draining the queue in FIFO order.
#[derive(Default)]
pub struct ConsumerRouter {
    consumers: Vec<Box<dyn Consumer>>,
}

impl ConsumerRouter {
    /// Create a router with no consumers registered.
    pub fn new() -> Self {
        Self {
            consumers: Vec::new(),
        }
    }

    /// Register a consumer. Dispatch follows registration order.
    pub fn register(&mut self, consumer: Box<dyn Consumer>) {
        self.consumers.push(consumer);
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    /// Route one message to the first consumer accepting its kind.
    ///
    /// Returns whether a consumer was found. A consumer failure is logged
    /// and reported as handled — the message was consumed, unsuccessfully.
    pub fn dispatch(&mut self, message: &Message) -> bool {
        let Some(consumer) = self
            .consumers
            .iter_mut()
            .find(|consumer| consumer.kind() == message.kind())
        else {
            debug!(
                kind = %message.kind(),
                device = %message.device(),
                "no consumer registered for message, dropping"
            );

            return false;
        };

        if let Err(error) = consumer.consume(message) {
            warn!(
                kind = %message.kind(),
                device = %message.device(),
                %error,
                "consumer failed to process message"
            );
        }

        true
    }

    /// Drain the queue, dispatching messages strictly in FIFO order.
    ///
    /// One message is processed at a time; a failing or unmatched message
    /// never stops the loop. Returns the number of messages taken off the
    /// queue.
    pub fn drain(&mut self, queue: &mut MessageQueue) -> usize {
        let mut processed = 0;

        while let Some(message) = queue.dequeue() {
            self.dispatch(&message);
            processed += 1;
        }

        processed
    }
}
