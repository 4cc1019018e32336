use tokio::sync::oneshot;

/// An opaque payload with an optional delivery acknowledgement
#[derive(Debug)]
pub struct Message {
    payload: Vec<u8>,
    ack_tx: Option<oneshot::Sender<()>>,
}

impl Message {
    /// Fire-and-forget message
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            ack_tx: None,
        }
    }

    /// Message whose consumer will signal the returned receiver on `ack`
    pub fn with_ack(payload: Vec<u8>) -> (Self, oneshot::Receiver<()>) {
        let (ack_tx, ack_rx) = oneshot::channel();
        (
            Self {
                payload,
                ack_tx: Some(ack_tx),
            },
            ack_rx,
        )
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Acknowledge delivery. Only the first call has an effect.
    pub fn ack(&mut self) {
        if let Some(tx) = self.ack_tx.take() {
            // Producer may have stopped waiting
            let _ = tx.send(());
        }
    }
}
