//! Category support records.

use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// A spending category as the backend sends it.
///
/// Categories carry the owning department key, which is the secondary path
/// for resolving a record's department name when no department reference is
/// nested on the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetails {
    /// Unique identifier
    pub id: RecordId,
    /// Category name
    pub name: String,
    /// Owning department, when assigned
    pub department_id: Option<RecordId>,
}
