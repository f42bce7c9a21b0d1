//! Name resolution for optionally populated references.
//!
//! The backend's response shapes are not strictly guaranteed, so every
//! resolution here degrades to a documented fallback string instead of
//! panicking. These are the only places display names come from.

use crate::models::{DepartmentDetails, DepartmentHandle, RecordId, UserDetails, UserHandle};

/// Fallback when a record carries no department reference at all.
pub const NO_DEPARTMENT: &str = "No Department";
/// Fallback when a department key exists but resolves to nothing loaded.
pub const UNKNOWN_DEPARTMENT: &str = "Unknown Department";
/// Fallback when a record carries no user reference at all.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Resolves a human display name from a requester/creator handle.
///
/// Priority over the populated fields: full `name`, then both name parts,
/// then whichever single part exists, then `email`, then `username`, and
/// finally the `"User ID: {id}"` literal. An id-only reference goes straight
/// to the literal.
#[must_use]
pub fn user_display_name(handle: UserHandle<'_>) -> String {
    match handle {
        UserHandle::Populated(user) => populated_display_name(user),
        UserHandle::IdOnly(id) => format!("User ID: {id}"),
        UserHandle::Absent => UNKNOWN_USER.to_string(),
    }
}

fn populated_display_name(user: &UserDetails) -> String {
    if let Some(name) = non_empty(user.name.as_deref()) {
        return name.to_string();
    }

    let first = non_empty(user.first_name.as_deref());
    let last = non_empty(user.last_name.as_deref());
    match (first, last) {
        (Some(first), Some(last)) => return format!("{first} {last}"),
        (Some(only), None) | (None, Some(only)) => return only.to_string(),
        (None, None) => {}
    }

    if let Some(email) = non_empty(user.email.as_deref()) {
        return email.to_string();
    }
    if let Some(username) = non_empty(user.username.as_deref()) {
        return username.to_string();
    }

    format!("User ID: {}", user.id)
}

/// Resolves a department display name from a department handle.
///
/// A nested department wins outright. A bare key (on the record or its
/// category) is looked up against the loaded department list;
/// [`UNKNOWN_DEPARTMENT`] means a key existed but did not resolve, while
/// [`NO_DEPARTMENT`] means no key existed at all - two distinct states.
#[must_use]
pub fn department_name(
    handle: DepartmentHandle<'_>,
    departments: &[DepartmentDetails],
) -> String {
    match handle {
        DepartmentHandle::Populated(department) => department.name.clone(),
        DepartmentHandle::IdOnly(id) => lookup_name(id, departments),
        DepartmentHandle::ViaCategory(category) => match category.department_id.as_ref() {
            Some(id) => lookup_name(id, departments),
            None => NO_DEPARTMENT.to_string(),
        },
        DepartmentHandle::Absent => NO_DEPARTMENT.to_string(),
    }
}

/// The department key a record filters under, if any.
#[must_use]
pub fn department_key<'a>(handle: DepartmentHandle<'a>) -> Option<&'a RecordId> {
    match handle {
        DepartmentHandle::Populated(department) => Some(&department.id),
        DepartmentHandle::IdOnly(id) => Some(id),
        DepartmentHandle::ViaCategory(category) => category.department_id.as_ref(),
        DepartmentHandle::Absent => None,
    }
}

fn lookup_name(id: &RecordId, departments: &[DepartmentDetails]) -> String {
    departments
        .iter()
        .find(|department| department.id == *id)
        .map_or_else(|| UNKNOWN_DEPARTMENT.to_string(), |d| d.name.clone())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::refs;
    use crate::models::CategoryDetails;

    fn bare_user(id: i64) -> UserDetails {
        UserDetails {
            id: RecordId::from(id),
            name: None,
            first_name: None,
            last_name: None,
            email: None,
            username: None,
            role: None,
            department_id: None,
        }
    }

    #[test]
    fn test_full_name_wins_over_parts() {
        let user = UserDetails {
            name: Some("Grace Hopper".to_string()),
            first_name: Some("Grace".to_string()),
            last_name: Some("Murray".to_string()),
            ..bare_user(1)
        };
        assert_eq!(
            user_display_name(UserHandle::Populated(&user)),
            "Grace Hopper"
        );
    }

    #[test]
    fn test_name_parts_join_and_single_part_stands_alone() {
        let both = UserDetails {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            ..bare_user(2)
        };
        assert_eq!(user_display_name(UserHandle::Populated(&both)), "Ada Lovelace");

        let only_last = UserDetails {
            last_name: Some("Lovelace".to_string()),
            ..bare_user(2)
        };
        assert_eq!(user_display_name(UserHandle::Populated(&only_last)), "Lovelace");
    }

    #[test]
    fn test_email_then_username_then_id_literal() {
        let email_only = UserDetails {
            email: Some("ada@example.com".to_string()),
            username: Some("ada".to_string()),
            ..bare_user(3)
        };
        assert_eq!(
            user_display_name(UserHandle::Populated(&email_only)),
            "ada@example.com"
        );

        let username_only = UserDetails {
            username: Some("ada".to_string()),
            ..bare_user(3)
        };
        assert_eq!(user_display_name(UserHandle::Populated(&username_only)), "ada");

        let nothing = bare_user(3);
        assert_eq!(
            user_display_name(UserHandle::Populated(&nothing)),
            "User ID: 3"
        );
    }

    #[test]
    fn test_blank_fields_are_treated_as_missing() {
        let user = UserDetails {
            name: Some("   ".to_string()),
            email: Some("ada@example.com".to_string()),
            ..bare_user(4)
        };
        assert_eq!(
            user_display_name(UserHandle::Populated(&user)),
            "ada@example.com"
        );
    }

    #[test]
    fn test_id_only_and_absent_user_handles() {
        let id = RecordId::from(9);
        assert_eq!(user_display_name(UserHandle::IdOnly(&id)), "User ID: 9");
        assert_eq!(user_display_name(UserHandle::Absent), UNKNOWN_USER);
    }

    #[test]
    fn test_department_fallbacks_are_distinct() {
        let departments = vec![DepartmentDetails {
            id: RecordId::from(7),
            name: "Sales".to_string(),
        }];

        // Key present and resolvable
        let known = RecordId::from(7);
        assert_eq!(
            department_name(DepartmentHandle::IdOnly(&known), &departments),
            "Sales"
        );

        // Key present but unresolvable - NOT the same as no key
        let unknown = RecordId::from(99);
        assert_eq!(
            department_name(DepartmentHandle::IdOnly(&unknown), &departments),
            UNKNOWN_DEPARTMENT
        );

        // No key at all
        assert_eq!(
            department_name(DepartmentHandle::Absent, &departments),
            NO_DEPARTMENT
        );
    }

    #[test]
    fn test_category_path_resolves_department() {
        let departments = vec![DepartmentDetails {
            id: RecordId::from(7),
            name: "Sales".to_string(),
        }];
        let category = CategoryDetails {
            id: RecordId::from(1),
            name: "Travel".to_string(),
            department_id: Some(RecordId::from(7)),
        };
        let handle = refs::department_handle(None, None, Some(&category));
        assert_eq!(department_name(handle, &departments), "Sales");
        assert_eq!(department_key(handle), Some(&RecordId::from(7)));
    }
}
