//! Ordered message buffer between the network boundary and consumers.

use std::collections::VecDeque;

use tracing::debug;

use fbmqtt_protocol::Message;

/// Unbounded FIFO queue of decoded messages.
///
/// The network boundary appends as events arrive; an externally scheduled
/// drain tick consumes. The queue never caps its size and never drops an
/// entry by policy — if the drain falls behind a burst, the queue grows
/// until the drain catches up.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: VecDeque<Message>,
}

impl MessageQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self {
            messages: VecDeque::new(),
        }
    }

    /// Append a message to the back of the queue. O(1), always succeeds.
    pub fn append(&mut self, message: Message) {
        debug!(
            kind = %message.kind(),
            device = %message.device(),
            "appended new message into messages queue"
        );

        self.messages.push_back(message);
    }

    /// Take the oldest message, or `None` when the queue is empty.
    ///
    /// Non-blocking poll; an empty queue is a normal condition, not an
    /// error.
    pub fn dequeue(&mut self) -> Option<Message> {
        self.messages.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}
