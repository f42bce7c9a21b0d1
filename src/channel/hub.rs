//! The in-process event hub behind the real-time channel.
//!
//! One broadcast sender per topic. In production the socket transport feeds
//! [`EventHub::publish`] as frames arrive; views call
//! [`EventHub::subscribe`] and hand the receiver to a consumer task.
//! Construction fails cleanly when channel credentials are missing - callers
//! log and carry on without live updates rather than crashing the view.

use std::collections::HashMap;

use tokio::sync::broadcast;
use tracing::{error, info, trace};

use crate::config::channel::ChannelConfig;
use crate::errors::{Error, Result};

use super::events::{RawEvent, INVOICES_TOPIC, REQUESTS_TOPIC};

/// Buffered events per topic before slow consumers start lagging.
const TOPIC_CAPACITY: usize = 64;

/// In-process broker for real-time patch events.
#[derive(Debug)]
pub struct EventHub {
    topics: HashMap<&'static str, broadcast::Sender<RawEvent>>,
}

impl EventHub {
    /// Connects the hub using channel credentials from configuration.
    ///
    /// Missing credentials are an expected deployment state, surfaced as
    /// [`Error::Channel`] so the caller can log and disable live updates.
    pub fn connect(config: Option<&ChannelConfig>) -> Result<Self> {
        let Some(config) = config else {
            return Err(Error::Channel {
                message: "channel credentials not configured; live updates disabled".to_string(),
            });
        };
        info!(cluster = %config.cluster, "connecting real-time channel");
        Ok(Self::in_process())
    }

    /// Like [`EventHub::connect`], but logs the failure and returns `None`
    /// instead of an error. Views run without live updates in that case;
    /// a misconfigured channel must never crash them.
    #[must_use]
    pub fn try_connect(config: Option<&ChannelConfig>) -> Option<Self> {
        match Self::connect(config) {
            Ok(hub) => Some(hub),
            Err(err) => {
                error!(%err, "real-time channel unavailable");
                None
            }
        }
    }

    /// Builds a hub with no external transport. Used directly by tests and
    /// as the broker the socket transport feeds in production.
    #[must_use]
    pub fn in_process() -> Self {
        let mut topics = HashMap::new();
        for topic in [REQUESTS_TOPIC, INVOICES_TOPIC] {
            let (sender, _) = broadcast::channel(TOPIC_CAPACITY);
            topics.insert(topic, sender);
        }
        Self { topics }
    }

    /// Subscribes to a topic's event stream.
    pub fn subscribe(&self, topic: &str) -> Result<broadcast::Receiver<RawEvent>> {
        self.topics
            .get(topic)
            .map(broadcast::Sender::subscribe)
            .ok_or_else(|| Error::Channel {
                message: format!("unknown channel topic '{topic}'"),
            })
    }

    /// Publishes one event to its topic's subscribers.
    ///
    /// Events on unknown topics or with no live subscribers are dropped;
    /// both are normal during navigation.
    pub fn publish(&self, event: RawEvent) {
        let Some(sender) = self.topics.get(event.topic.as_str()) else {
            trace!(topic = %event.topic, "dropping event for unknown topic");
            return;
        };
        if sender.send(event).is_err() {
            trace!("no live subscribers for channel event");
        }
    }
}
