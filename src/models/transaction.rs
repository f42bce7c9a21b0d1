//! Transaction records.

use serde::{Deserialize, Serialize};

use super::category::CategoryDetails;
use super::department::DepartmentDetails;
use super::id::RecordId;
use super::refs::{self, DepartmentHandle, UserHandle};
use super::status::TransactionStatus;
use super::user::UserDetails;
use super::ListRecord;

/// A transaction as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: RecordId,
    /// Signed amount in dollars
    pub amount: f64,
    /// Free-text description
    pub description: Option<String>,
    /// Lifecycle status
    pub status: TransactionStatus,
    /// Owning category key
    pub category_id: Option<RecordId>,
    /// Owning department key
    pub department_id: Option<RecordId>,
    /// Recording user's key
    pub user_id: Option<RecordId>,
    /// Denormalized recording user, when the backend includes it
    pub user: Option<UserDetails>,
    /// Denormalized category, when the backend includes it
    pub category: Option<CategoryDetails>,
    /// Denormalized department, when the backend includes it
    pub department: Option<DepartmentDetails>,
    /// Transaction date as sent by the backend; parsed defensively
    pub date: Option<String>,
}

impl ListRecord for Transaction {
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
        refs::department_handle(
            self.department.as_ref(),
            self.department_id.as_ref(),
            self.category.as_ref(),
        )
    }

    fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn date_label(&self) -> Option<&str> {
        self.date.as_deref()
    }
}
