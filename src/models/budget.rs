//! Department budget summaries.

use serde::{Deserialize, Serialize};

use super::department::DepartmentDetails;
use super::id::RecordId;

/// A budget line as the backend sends it.
///
/// Balance enforcement happens on the backend; this record exists so views
/// can display allocations next to the requests drawing on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: RecordId,
    /// Owning department key; None for the company-wide total budget
    pub department_id: Option<RecordId>,
    /// Denormalized department, when the backend includes it
    pub department: Option<DepartmentDetails>,
    /// Allocated amount in dollars
    pub amount: f64,
    /// Amount already committed
    pub spent: Option<f64>,
}

impl Budget {
    /// Remaining allocation, when the backend reported spend.
    #[must_use]
    pub fn available(&self) -> Option<f64> {
        self.spent.map(|spent| self.amount - spent)
    }
}
