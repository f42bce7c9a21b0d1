//! Tagged handles for optional nested references.
//!
//! The backend treats nested `user`/`category`/`department` objects as
//! optionally present. Rather than chaining optional access at every call
//! site, each record exposes one handle per reference kind and
//! [`crate::core::resolve`] owns the single resolution function for each.

use super::category::CategoryDetails;
use super::department::DepartmentDetails;
use super::id::RecordId;
use super::user::UserDetails;

/// How much of the requester/creator reference the payload carried.
#[derive(Debug, Clone, Copy)]
pub enum UserHandle<'a> {
    /// The nested user object is present (fields may still be sparse)
    Populated(&'a UserDetails),
    /// Only the owning foreign key is present
    IdOnly(&'a RecordId),
    /// Neither the object nor the key is present
    Absent,
}

/// How much of the department reference the payload carried.
#[derive(Debug, Clone, Copy)]
pub enum DepartmentHandle<'a> {
    /// The nested department object is present
    Populated(&'a DepartmentDetails),
    /// Only the owning foreign key is present
    IdOnly(&'a RecordId),
    /// No department reference, but a category that may carry one
    ViaCategory(&'a CategoryDetails),
    /// No department information at all
    Absent,
}

/// Builds a [`UserHandle`] from a record's optional fields.
#[must_use]
pub fn user_handle<'a>(
    user: Option<&'a UserDetails>,
    user_id: Option<&'a RecordId>,
) -> UserHandle<'a> {
    match (user, user_id) {
        (Some(details), _) => UserHandle::Populated(details),
        (None, Some(id)) => UserHandle::IdOnly(id),
        (None, None) => UserHandle::Absent,
    }
}

/// Builds a [`DepartmentHandle`] from a record's optional fields.
///
/// Precedence mirrors name resolution: a nested department wins, then the
/// record's own foreign key, then the category's owning department.
#[must_use]
pub fn department_handle<'a>(
    department: Option<&'a DepartmentDetails>,
    department_id: Option<&'a RecordId>,
    category: Option<&'a CategoryDetails>,
) -> DepartmentHandle<'a> {
    match (department, department_id, category) {
        (Some(details), _, _) => DepartmentHandle::Populated(details),
        (None, Some(id), _) => DepartmentHandle::IdOnly(id),
        (None, None, Some(category)) => DepartmentHandle::ViaCategory(category),
        (None, None, None) => DepartmentHandle::Absent,
    }
}
