//! Wire-event decoding for the real-time patch channel.
//!
//! Topics and event names mirror what the backend broadcasts. Payloads are
//! `{ "<entity-singular>": {...} }` for creates/updates and `{ "id": ... }`
//! for deletes. Decoding is defensive: an unknown event name or an
//! undecodable payload is logged and skipped, never a panic.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::ListAction;
use crate::models::{BudgetRequest, Invoice, RecordId};

/// Topic carrying budget request events.
pub const REQUESTS_TOPIC: &str = "budget-requests";
/// Topic carrying invoice events.
pub const INVOICES_TOPIC: &str = "invoices";

/// One event as delivered by the channel transport.
#[derive(Debug, Clone)]
pub struct RawEvent {
    /// Topic the event was published on
    pub topic: String,
    /// Event name, e.g. `"request-approved"`
    pub event: String,
    /// Raw JSON payload
    pub payload: Value,
}

impl RawEvent {
    /// Convenience constructor used by transports and tests.
    pub fn new(topic: impl Into<String>, event: impl Into<String>, payload: Value) -> Self {
        Self {
            topic: topic.into(),
            event: event.into(),
            payload,
        }
    }
}

/// Whether only admin sessions may act on this event.
///
/// New-request broadcasts are aimed at approvers; non-privileged sessions
/// must not act on them.
#[must_use]
pub fn is_admin_only(event: &str) -> bool {
    event == "new-request"
}

/// Decodes a budget-request topic event into a list action.
#[must_use]
pub fn decode_request_event(raw: &RawEvent) -> Option<ListAction<BudgetRequest>> {
    match raw.event.as_str() {
        "new-request" => entity_payload(&raw.payload, "request").map(ListAction::Create),
        "request-approved" | "request-rejected" | "request-updated" => {
            entity_payload(&raw.payload, "request").map(ListAction::Update)
        }
        "request-deleted" => id_payload(&raw.payload).map(ListAction::Remove),
        other => {
            debug!(event = other, topic = %raw.topic, "ignoring unknown channel event");
            None
        }
    }
}

/// Decodes an invoice topic event into a list action.
#[must_use]
pub fn decode_invoice_event(raw: &RawEvent) -> Option<ListAction<Invoice>> {
    match raw.event.as_str() {
        "invoice-created" => entity_payload(&raw.payload, "invoice").map(ListAction::Create),
        "invoice-updated" => entity_payload(&raw.payload, "invoice").map(ListAction::Update),
        "invoice-deleted" => id_payload(&raw.payload).map(ListAction::Remove),
        other => {
            debug!(event = other, topic = %raw.topic, "ignoring unknown channel event");
            None
        }
    }
}

/// Pulls the record out of a `{ "<singular>": {...} }` payload.
fn entity_payload<T: DeserializeOwned>(payload: &Value, key: &str) -> Option<T> {
    let nested = payload.get(key).unwrap_or(payload);
    match serde_json::from_value(nested.clone()) {
        Ok(record) => Some(record),
        Err(error) => {
            warn!(%error, key, "could not decode channel event payload; skipping");
            None
        }
    }
}

/// Pulls the id out of a `{ "id": ... }` delete payload.
fn id_payload(payload: &Value) -> Option<RecordId> {
    let id_value = payload.get("id").unwrap_or(payload);
    match serde_json::from_value(id_value.clone()) {
        Ok(id) => Some(id),
        Err(error) => {
            warn!(%error, "could not decode channel delete payload; skipping");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_request_decodes_to_create() {
        let raw = RawEvent::new(
            REQUESTS_TOPIC,
            "new-request",
            json!({"request": {"id": 42, "amount": 125.0, "status": "pending"}}),
        );
        let action = decode_request_event(&raw).unwrap();
        assert!(matches!(action, ListAction::Create(ref r) if r.id == RecordId::from(42)));
    }

    #[test]
    fn test_approved_decodes_to_update_with_string_id() {
        let raw = RawEvent::new(
            REQUESTS_TOPIC,
            "request-approved",
            json!({"request": {"id": "42", "amount": 125.0, "status": "approved"}}),
        );
        let action = decode_request_event(&raw).unwrap();
        assert!(matches!(action, ListAction::Update(ref r) if r.id == RecordId::new("42")));
    }

    #[test]
    fn test_invoice_delete_decodes_to_remove() {
        let raw = RawEvent::new(INVOICES_TOPIC, "invoice-deleted", json!({"id": 7}));
        let action = decode_invoice_event(&raw).unwrap();
        assert!(matches!(action, ListAction::Remove(ref id) if *id == RecordId::from(7)));
    }

    #[test]
    fn test_unknown_event_and_garbled_payload_are_skipped() {
        let unknown = RawEvent::new(REQUESTS_TOPIC, "request-archived", json!({}));
        assert!(decode_request_event(&unknown).is_none());

        let garbled = RawEvent::new(
            REQUESTS_TOPIC,
            "request-updated",
            json!({"request": "not an object"}),
        );
        assert!(decode_request_event(&garbled).is_none());
    }

    #[test]
    fn test_only_new_request_is_admin_gated() {
        assert!(is_admin_only("new-request"));
        assert!(!is_admin_only("request-approved"));
        assert!(!is_admin_only("invoice-created"));
    }
}
