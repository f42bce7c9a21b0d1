//! Budget request dispatchers.
//!
//! Create/update/delete plus the approve/reject transitions. Approval gets
//! its own error presentation: when the backend reports that the requested
//! amount exceeds an available balance, the message names the balance that
//! ran out instead of showing the generic error string.

use serde::Serialize;

use crate::errors::Error;
use crate::gateway::{Gateway, BUDGET_REQUESTS};
use crate::models::RecordId;

use super::{run_dispatch, run_dispatch_with, DispatchOutcome, InFlight, Notifier};

/// Fields accepted when creating or updating a budget request.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetRequestPayload {
    /// Requested amount in dollars
    pub amount: f64,
    /// Purpose of the request
    pub description: Option<String>,
    /// Spending category
    pub category_id: Option<RecordId>,
    /// Charged department
    pub department_id: Option<RecordId>,
}

/// Creates a budget request and asks for a refresh on success.
pub async fn create_request(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    payload: &BudgetRequestPayload,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Budget request submitted",
        gateway.create_record(BUDGET_REQUESTS, payload),
    )
    .await
}

/// Updates a budget request and asks for a refresh on success.
pub async fn update_request(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    id: &RecordId,
    payload: &BudgetRequestPayload,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Budget request updated",
        gateway.update_record(BUDGET_REQUESTS, id, payload),
    )
    .await
}

/// Deletes a budget request and asks for a refresh on success.
pub async fn delete_request(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    id: &RecordId,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Budget request deleted",
        gateway.delete_record(BUDGET_REQUESTS, id),
    )
    .await
}

/// Approves a budget request, with the balance-aware error presentation.
pub async fn approve_request(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    id: &RecordId,
) -> DispatchOutcome {
    run_dispatch_with(
        notifier,
        in_flight,
        "Budget request approved",
        gateway.approve_request(id),
        approval_error_message,
    )
    .await
}

/// Rejects a budget request and asks for a refresh on success.
pub async fn reject_request(
    gateway: &Gateway,
    notifier: &Notifier,
    in_flight: &InFlight,
    id: &RecordId,
) -> DispatchOutcome {
    run_dispatch(
        notifier,
        in_flight,
        "Budget request rejected",
        gateway.reject_request(id),
    )
    .await
}

/// Formats approval failures.
///
/// Balance failures name the department budget or the total budget that
/// came up short; everything else falls back to the error's own display
/// string.
#[must_use]
pub fn approval_error_message(error: &Error) -> String {
    let Error::InsufficientBudget {
        requested,
        available,
        budget_type,
        department,
    } = error
    else {
        return error.to_string();
    };

    match (budget_type.as_str(), department) {
        ("department", Some(name)) => format!(
            "Not enough budget available in department {name}. \
             Requested: ${requested:.2}, Available: ${available:.2}"
        ),
        _ => format!(
            "Not enough total budget available. \
             Requested: ${requested:.2}, Available: ${available:.2}"
        ),
    }
}
