//! Invoice records.

use serde::{Deserialize, Serialize};

use super::client::Client;
use super::id::RecordId;
use super::refs::{self, DepartmentHandle, UserHandle};
use super::status::InvoiceStatus;
use super::user::UserDetails;
use super::ListRecord;

/// An invoice as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: RecordId,
    /// Human-facing invoice number
    pub number: Option<String>,
    /// Invoiced amount in dollars
    pub amount: f64,
    /// Lifecycle status
    pub status: InvoiceStatus,
    /// Billed client's key
    pub client_id: Option<RecordId>,
    /// Denormalized client, when the backend includes it
    pub client: Option<Client>,
    /// Creating user's key
    pub user_id: Option<RecordId>,
    /// Denormalized creating user, when the backend includes it
    pub user: Option<UserDetails>,
    /// Free-text notes
    pub description: Option<String>,
    /// Issue date as sent by the backend; parsed defensively
    pub date: Option<String>,
}

impl Invoice {
    /// Billed client's name, when the reference is populated.
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client.as_ref().map(|c| c.name.as_str())
    }
}

impl ListRecord for Invoice {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status_label(&self) -> &'static str {
        self.status.as_label()
    }

    fn owner_id(&self) -> Option<&RecordId> {
        self.user_id.as_ref()
    }

    fn user_handle(&self) -> UserHandle<'_> {
        refs::user_handle(self.user.as_ref(), self.user_id.as_ref())
    }

    fn department_handle(&self) -> DepartmentHandle<'_> {
        DepartmentHandle::Absent
    }

    // Invoices carry no category; the client name takes that search slot
    fn category_name(&self) -> Option<&str> {
        self.client_name()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn date_label(&self) -> Option<&str> {
        self.date.as_deref()
    }
}
