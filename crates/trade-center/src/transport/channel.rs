//! Tokio channel-based transport for single-process mode
//!
//! Every topic is one bounded mpsc channel with a single subscriber.
//! Messages are passed directly, without copying the payload.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, mpsc};

use crate::config::TradeCenterConfig;
use crate::error::TransportError;
use crate::transport::{Message, MessageStream, Pubsub};

struct Topic {
    tx: Option<mpsc::Sender<Message>>,
    rx: Option<mpsc::Receiver<Message>>,
}

impl Topic {
    fn open(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self {
            tx: Some(tx),
            rx: Some(rx),
        }
    }
}

/// In-process pub/sub backed by one channel per topic
///
/// Topics are created on first use, so a producer may publish before the
/// consumer subscribes (up to the channel capacity).
pub struct ChannelPubsub {
    capacity: usize,
    topics: Mutex<HashMap<String, Topic>>,
}

impl ChannelPubsub {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            topics: Mutex::new(HashMap::new()),
        }
    }

    /// Topic channels bounded by `channel_capacity`
    pub fn from_config(config: &TradeCenterConfig) -> Self {
        Self::new(config.channel_capacity)
    }

    async fn sender(&self, topic: &str) -> Result<mpsc::Sender<Message>, TransportError> {
        let mut topics = self.topics.lock().await;
        topics
            .entry(topic.to_string())
            .or_insert_with(|| Topic::open(self.capacity))
            .tx
            .clone()
            .ok_or_else(|| TransportError::ChannelClosed(topic.to_string()))
    }
}

impl Default for ChannelPubsub {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[async_trait]
impl Pubsub for ChannelPubsub {
    async fn publish(&self, topic: &str, msg: Message) -> Result<(), TransportError> {
        // Clone the sender so a full channel does not hold the topic lock
        let tx = self.sender(topic).await?;
        tx.send(msg)
            .await
            .map_err(|_| TransportError::ChannelClosed(topic.to_string()))
    }

    async fn subscribe(&self, topic: &str) -> Result<MessageStream, TransportError> {
        let mut topics = self.topics.lock().await;
        topics
            .entry(topic.to_string())
            .or_insert_with(|| Topic::open(self.capacity))
            .rx
            .take()
            .ok_or_else(|| TransportError::AlreadySubscribed(topic.to_string()))
    }

    async fn close(&self, topic: &str) {
        let mut topics = self.topics.lock().await;
        topics
            .entry(topic.to_string())
            .or_insert_with(|| Topic::open(self.capacity))
            .tx = None;
    }
}
