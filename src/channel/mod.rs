//! Real-time patch channel.
//!
//! Other sessions' mutations arrive here as named events on per-entity
//! topics and are merged into the in-memory list without reordering
//! unaffected rows. Changes made by *this* session go through the
//! dispatchers and a full refresh instead - the channel only carries news
//! from elsewhere.

/// Consumer tasks applying events to shared controllers
pub mod consumer;
/// Wire-event decoding and topic/event names
pub mod events;
/// The in-process broadcast hub behind the channel
pub mod hub;

pub use consumer::{subscribe_invoices, subscribe_requests, Subscription};
pub use events::{RawEvent, INVOICES_TOPIC, REQUESTS_TOPIC};
pub use hub::EventHub;
