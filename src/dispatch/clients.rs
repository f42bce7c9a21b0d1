//! Client dispatchers.

use serde::Serialize;

use crate::gateway::{Gateway, CLIENTS};
use crate::models::RecordId;

use super::{run_dispatch, DispatchOutcome, InFlight, Notifier};

/// Fields accepted when creating or updating a client.
#[derive(Debug, Clone, Serialize)]
pub struct ClientPayload {
    /// Client or company name
    pub name: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
}

/// Creates a client and asks for a refresh on success.
pub async fn create_client(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    payload: &ClientPayload,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Client created",
        gateway.create_record(CLIENTS, payload),
    )
    .await
}

/// Updates a client and asks for a refresh on success.
pub async fn update_client(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    id: &RecordId,
    payload: &ClientPayload,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Client updated",
        gateway.update_record(CLIENTS, id, payload),
    )
    .await
}

/// Deletes a client and asks for a refresh on success.
pub async fn delete_client(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    id: &RecordId,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Client deleted",
        gateway.delete_record(CLIENTS, id),
    )
    .await
}
