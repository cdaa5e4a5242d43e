use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use uuid::Uuid;

/// One broadcast channel per hostel; nothing is persisted and nothing is
/// delivered to members who join later.
#[derive(Clone, Default)]
pub struct ChatHub {
    channels: Arc<Mutex<HashMap<Uuid, broadcast::Sender<ChatFrame>>>>,
}

#[derive(Debug, Clone)]
pub struct ChatFrame {
    pub sender: Uuid,
    pub body: String,
}

impl ChatHub {
    pub fn join(
        &self,
        hostel: Uuid,
    ) -> (broadcast::Sender<ChatFrame>, broadcast::Receiver<ChatFrame>) {
        let mut channels = self.channels.lock().expect("chat hub lock poisoned");
        let sender = channels
            .entry(hostel)
            .or_insert_with(|| broadcast::channel(64).0)
            .clone();
        let receiver = sender.subscribe();
        (sender, receiver)
    }

    /// Drops the channel once its last member is gone.
    pub fn leave(&self, hostel: &Uuid) {
        let mut channels = self.channels.lock().expect("chat hub lock poisoned");
        if let Some(sender) = channels.get(hostel) {
            if sender.receiver_count() == 0 {
                channels.remove(hostel);
            }
        }
    }
}
