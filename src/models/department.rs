//! Department support records.

use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// A department as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDetails {
    /// Unique identifier
    pub id: RecordId,
    /// Department name (e.g. "Sales")
    pub name: String,
}
