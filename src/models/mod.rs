//! Wire-facing record types shared by every layer.
//!
//! These mirror what the remote backend actually sends: optional nested
//! references, inconsistent field naming, and ids that arrive as either JSON
//! numbers or strings. Decoding is deliberately lenient - an unknown status
//! label or a missing nested object must never fail a whole list fetch.

/// Department budget summaries
pub mod budget;
/// Category support records
pub mod category;
/// Client records
pub mod client;
/// Department support records
pub mod department;
/// Record identifiers that tolerate number-or-string JSON
pub mod id;
/// Invoice records
pub mod invoice;
/// Tagged handles for optional nested references
pub mod refs;
/// Budget request (requisition) records
pub mod request;
/// Closed status vocabularies per entity type
pub mod status;
/// Transaction records
pub mod transaction;
/// User records, roles, and the current session viewer
pub mod user;

pub use budget::Budget;
pub use category::CategoryDetails;
pub use client::Client;
pub use department::DepartmentDetails;
pub use id::RecordId;
pub use invoice::Invoice;
pub use refs::{DepartmentHandle, UserHandle};
pub use request::BudgetRequest;
pub use status::{InvoiceStatus, RequestStatus, TransactionStatus};
pub use transaction::Transaction;
pub use user::{Role, UserDetails, Viewer};

/// What a record must expose to participate in a list view.
///
/// The view-state controller, the filter predicates, and the patch reducer
/// are all generic over this trait, so the same reconciliation rules apply
/// to budget requests, transactions, and invoices alike.
pub trait ListRecord: Clone {
    /// Unique identity within the list. Patch merges key on this.
    fn id(&self) -> &RecordId;

    /// Lowercase status label used for exact status filtering.
    fn status_label(&self) -> &'static str;

    /// Id of the user who created the record, when known.
    fn owner_id(&self) -> Option<&RecordId>;

    /// Handle over the optionally populated requester/creator reference.
    fn user_handle(&self) -> UserHandle<'_>;

    /// Handle over the optionally populated department reference.
    fn department_handle(&self) -> DepartmentHandle<'_>;

    /// Category name when a populated category reference is present.
    fn category_name(&self) -> Option<&str>;

    /// Free-text description, searched case-insensitively.
    fn description(&self) -> Option<&str>;

    /// Raw date label as sent by the backend; parsed defensively by filters.
    fn date_label(&self) -> Option<&str>;
}
