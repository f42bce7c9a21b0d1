//! Shared test utilities for `LedgerDesk`.
//!
//! This module provides common helper functions for setting up in-memory
//! cache stores and building test records with sensible defaults.

use sea_orm::Database;
use tracing_subscriber::EnvFilter;

use crate::errors::Result;
use crate::models::{
    BudgetRequest, Client, DepartmentDetails, RecordId, RequestStatus, Role, Viewer,
};
use crate::store::SnapshotStore;

/// Initializes test tracing once per process; safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` cache store with all tables initialized.
/// This is the standard setup for all store integration tests.
pub async fn setup_test_store() -> Result<SnapshotStore> {
    let db = Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(SnapshotStore::new(db))
}

/// An admin viewer with no department scoping.
#[must_use]
pub fn viewer_admin() -> Viewer {
    Viewer {
        user_id: RecordId::from(100),
        role: Role::Admin,
        department_id: None,
    }
}

/// A non-admin viewer, optionally assigned to a department.
#[must_use]
pub fn viewer_employee(department: Option<i64>) -> Viewer {
    Viewer {
        user_id: RecordId::from(200),
        role: Role::Employee,
        department_id: department.map(RecordId::from),
    }
}

/// Creates a test budget request with sensible defaults.
///
/// # Arguments
/// * `id` - Record id
/// * `status` - Lifecycle status label (`"pending"`, `"approved"`, `"rejected"`)
#[must_use]
pub fn sample_request(id: i64, status: &str) -> BudgetRequest {
    let status = match status {
        "approved" => RequestStatus::Approved,
        "rejected" => RequestStatus::Rejected,
        "pending" => RequestStatus::Pending,
        _ => RequestStatus::Unknown,
    };
    BudgetRequest {
        id: RecordId::from(id),
        uid: None,
        amount: 125.0,
        description: None,
        status,
        category_id: None,
        department_id: None,
        user_id: None,
        user: None,
        category: None,
        department: None,
        date: None,
    }
}

/// Creates `n` pending test requests with ids `1..=n`.
#[must_use]
pub fn sample_requests(n: i64) -> Vec<BudgetRequest> {
    (1..=n).map(|id| sample_request(id, "pending")).collect()
}

/// Creates a test client with sensible defaults.
#[must_use]
pub fn sample_client(id: i64) -> Client {
    Client {
        id: RecordId::from(id),
        name: format!("Client {id}"),
        email: Some(format!("client{id}@example.com")),
        phone: None,
        user_id: None,
    }
}

/// Creates a test department.
#[must_use]
pub fn sample_department(id: i64, name: &str) -> DepartmentDetails {
    DepartmentDetails {
        id: RecordId::from(id),
        name: name.to_string(),
    }
}
