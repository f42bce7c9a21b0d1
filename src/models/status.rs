//! Closed status vocabularies per entity type.
//!
//! Every enum carries an `Unknown` catch-all so an unrecognized label coming
//! off the wire degrades instead of failing the whole list deserialization.
//! `as_label` returns the lowercase label the status filter compares against.

use serde::{Deserialize, Serialize};

/// Budget request lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting an approval decision
    Pending,
    /// Approved by an administrator
    Approved,
    /// Rejected by an administrator
    Rejected,
    /// Unrecognized label from the backend
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    /// Lowercase label used by filters and displays.
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

/// Transaction lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Recorded but not settled
    Pending,
    /// Settled
    Completed,
    /// Voided before settlement
    Cancelled,
    /// Unrecognized label from the backend
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// Lowercase label used by filters and displays.
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet sent to the client
    Draft,
    /// Sent, awaiting payment
    Sent,
    /// Paid in full
    Paid,
    /// Past its due date
    Overdue,
    /// Unrecognized label from the backend
    #[serde(other)]
    Unknown,
}

impl InvoiceStatus {
    /// Lowercase label used by filters and displays.
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Unknown => "unknown",
        }
    }
}
