//! View-state core - framework-agnostic list reconciliation.
//!
//! Everything here is a pure function or a plain struct: filtering,
//! pagination, name resolution, the patch reducer, and the controller that
//! ties them into one derived view. No I/O happens in this module; the
//! gateway, store, and channel feed it from the outside.

/// The list view-state controller and its derived view
pub mod controller;
/// Filter predicates over entity lists
pub mod filter;
/// Pagination over a filtered list
pub mod paginate;
/// Pure list reconciliation actions
pub mod reducer;
/// Name resolution for optionally populated references
pub mod resolve;

pub use controller::{DataSource, ListController, ListView};
pub use filter::{DepartmentFilter, FilterState, StatusFilter};
pub use paginate::PageState;
pub use reducer::{reduce, ListAction};
