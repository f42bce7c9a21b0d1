//! Client records.

use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// A billed client as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: RecordId,
    /// Client or company name
    pub name: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Creating user's key
    pub user_id: Option<RecordId>,
}
