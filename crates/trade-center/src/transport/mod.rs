//! Transport abstraction layer
//!
//! Topics carry opaque payloads. Consumers acknowledge each message once it
//! has been decoded, so a producer can wait for delivery before publishing
//! the next event.

pub mod channel;
pub mod message;

pub use channel::ChannelPubsub;
pub use message::Message;

use crate::error::TransportError;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Logical topic names
pub struct Topics;

impl Topics {
    /// Market quotes consumed by the matching loop
    pub const TICK: &'static str = "tick";

    /// New orders consumed by the matching loop
    pub const ORDER: &'static str = "order";

    /// Balance snapshots published after every ledger update
    pub const BALANCE: &'static str = "balance";
}

/// Stream of messages for one topic; `None` from `recv` means the topic closed
pub type MessageStream = mpsc::Receiver<Message>;

/// Publish/subscribe over named topics
#[async_trait]
pub trait Pubsub: Send + Sync {
    /// Send a message to every subscriber of `topic`
    async fn publish(&self, topic: &str, msg: Message) -> Result<(), TransportError>;

    /// Take the stream for `topic`
    async fn subscribe(&self, topic: &str) -> Result<MessageStream, TransportError>;

    /// Close `topic`; its subscriber sees the end of the stream once drained
    async fn close(&self, topic: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensure the trait is object-safe
    fn _assert_pubsub_object_safe(_: &dyn Pubsub) {}

    #[test]
    fn test_topics() {
        assert_eq!(Topics::TICK, "tick");
        assert_eq!(Topics::ORDER, "order");
        assert_eq!(Topics::BALANCE, "balance");
    }
}
