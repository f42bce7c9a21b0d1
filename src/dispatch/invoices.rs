//! Invoice dispatchers.

use serde::Serialize;

use crate::gateway::{Gateway, INVOICES};
use crate::models::{InvoiceStatus, RecordId};

use super::{run_dispatch, DispatchOutcome, InFlight, Notifier};

/// Fields accepted when creating or updating an invoice.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicePayload {
    /// Human-facing invoice number
    pub number: Option<String>,
    /// Invoiced amount in dollars
    pub amount: f64,
    /// Lifecycle status
    pub status: Option<InvoiceStatus>,
    /// Billed client
    pub client_id: Option<RecordId>,
    /// Free-text notes
    pub description: Option<String>,
    /// Issue date, `YYYY-MM-DD`
    pub date: Option<String>,
}

/// Creates an invoice and asks for a refresh on success.
pub async fn create_invoice(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    payload: &InvoicePayload,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Invoice created",
        gateway.create_record(INVOICES, payload),
    )
    .await
}

/// Updates an invoice and asks for a refresh on success.
pub async fn update_invoice(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    id: &RecordId,
    payload: &InvoicePayload,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Invoice updated",
        gateway.update_record(INVOICES, id, payload),
    )
    .await
}

/// Deletes an invoice and asks for a refresh on success.
pub async fn delete_invoice(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    id: &RecordId,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Invoice deleted",
        gateway.delete_record(INVOICES, id),
    )
    .await
}
