//! User records, roles, and the current session viewer.

use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// Session role as granted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access - sees all departments and approval events
    Admin,
    /// Regular staff access, scoped to the viewer's own department
    #[serde(alias = "staff", alias = "user")]
    Employee,
}

/// A user record as the backend sends it.
///
/// Name fields are inconsistently populated and inconsistently named
/// (`first_name` vs `firstName`); display code must go through
/// [`crate::core::resolve::user_display_name`] rather than reading fields
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    /// Unique identifier
    pub id: RecordId,
    /// Full display name, when the backend bothered to denormalize one
    pub name: Option<String>,
    /// Given name (`firstName` in some responses)
    #[serde(alias = "firstName")]
    pub first_name: Option<String>,
    /// Family name (`lastName` in some responses)
    #[serde(alias = "lastName")]
    pub last_name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Login handle
    pub username: Option<String>,
    /// Role, when included in the payload
    pub role: Option<Role>,
    /// Owning department
    pub department_id: Option<RecordId>,
}

/// The current session's identity.
///
/// `is_creator` highlighting, role-gated subscriptions, and non-admin
/// department scoping all derive from this value and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    /// The session user's id
    pub user_id: RecordId,
    /// The session user's role
    pub role: Role,
    /// The session user's department, when assigned
    pub department_id: Option<RecordId>,
}

impl Viewer {
    /// Whether this session has administrative access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_user_details_accepts_camel_case_name_fields() {
        let json = r#"{"id": 3, "firstName": "Ada", "lastName": "Lovelace"}"#;
        let user: UserDetails = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.last_name.as_deref(), Some("Lovelace"));
        assert!(user.name.is_none());
    }

    #[test]
    fn test_role_aliases_map_to_employee() {
        let role: Role = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(role, Role::Employee);
    }
}
