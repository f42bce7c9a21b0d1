//! Cached record entity - one row per record in a cache snapshot.
//!
//! The local cache mirrors the last known-good server list per entity
//! collection. Records are stored as JSON payloads so the cache schema never
//! chases the backend's shape; `record_id` and `uid` are lifted out as
//! columns for keyed lookups.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cached record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cached_records")]
pub struct Model {
    /// Surrogate key; ascending insert order preserves list order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Entity collection this row belongs to (e.g. "requisitions")
    pub collection: String,
    /// The record's own id within its collection
    pub record_id: String,
    /// Secondary business key, populated for requisitions only
    pub uid: Option<String>,
    /// Full record as JSON
    pub payload: String,
    /// When this snapshot row was written (RFC 3339)
    pub saved_at: String,
}

/// Cached records reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
