//! The local cache store.
//!
//! Persists one snapshot per entity collection: the last known-good server
//! list, overwritten wholesale on every non-empty fetch. It is read only as
//! a fallback when the server legitimately returns nothing - never merged
//! back into server data and never used as a write-back source of truth.

use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::entities::{cached_record, CachedRecord, CachedRecordColumn};
use crate::errors::{Error, Result};
use crate::models::{BudgetRequest, Client, DepartmentDetails, RecordId, UserDetails};

/// The entity collections the cache mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Billed clients
    Clients,
    /// Company users
    Users,
    /// Departments
    Departments,
    /// Budget requests
    Requisitions,
}

impl Collection {
    /// The collection's key in the cache table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Users => "users",
            Self::Departments => "departments",
            Self::Requisitions => "requisitions",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record type the cache can snapshot.
pub trait Cacheable: Serialize + DeserializeOwned {
    /// The record's id within its collection.
    fn cache_id(&self) -> &RecordId;

    /// Secondary business key, when the collection supports keyed lookups.
    fn cache_uid(&self) -> Option<&str> {
        None
    }
}

impl Cacheable for Client {
    fn cache_id(&self) -> &RecordId {
        &self.id
    }
}

impl Cacheable for UserDetails {
    fn cache_id(&self) -> &RecordId {
        &self.id
    }
}

impl Cacheable for DepartmentDetails {
    fn cache_id(&self) -> &RecordId {
        &self.id
    }
}

impl Cacheable for BudgetRequest {
    fn cache_id(&self) -> &RecordId {
        &self.id
    }

    fn cache_uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }
}

/// Snapshot store over the local cache database.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    db: DatabaseConnection,
}

impl SnapshotStore {
    /// Wraps an open cache database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Overwrites the snapshot for one collection.
    ///
    /// Delete-then-insert inside a transaction: a reader either sees the old
    /// snapshot or the new one, never a half-written mix.
    pub async fn save_all<R: Cacheable>(
        &self,
        collection: Collection,
        records: &[R],
    ) -> Result<()> {
        let saved_at = Utc::now().to_rfc3339();
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            rows.push(cached_record::ActiveModel {
                collection: Set(collection.as_str().to_string()),
                record_id: Set(record.cache_id().as_str().to_string()),
                uid: Set(record.cache_uid().map(ToString::to_string)),
                payload: Set(serde_json::to_string(record)?),
                saved_at: Set(saved_at.clone()),
                ..Default::default()
            });
        }

        let txn = self.db.begin().await?;
        CachedRecord::delete_many()
            .filter(CachedRecordColumn::Collection.eq(collection.as_str()))
            .exec(&txn)
            .await?;
        if !rows.is_empty() {
            CachedRecord::insert_many(rows).exec(&txn).await?;
        }
        txn.commit().await?;

        info!(%collection, count = records.len(), "cache snapshot written");
        Ok(())
    }

    /// Reads the whole snapshot for one collection, in its original list
    /// order. Rows that no longer decode are skipped, not fatal - the cache
    /// only ever supplements the display.
    pub async fn get_all<R: Cacheable>(&self, collection: Collection) -> Result<Vec<R>> {
        let rows = CachedRecord::find()
            .filter(CachedRecordColumn::Collection.eq(collection.as_str()))
            .order_by_asc(CachedRecordColumn::Id)
            .all(&self.db)
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            match serde_json::from_str(&row.payload) {
                Ok(record) => records.push(record),
                Err(error) => {
                    warn!(%collection, record_id = %row.record_id, %error,
                        "skipping undecodable cache row");
                }
            }
        }
        Ok(records)
    }

    /// Looks up one requisition by its secondary `uid` key.
    ///
    /// Absence is a legitimate state (e.g. a requisition not yet synced),
    /// so the miss is `Ok(None)` rather than an error.
    pub async fn get_requisition_by_uid(&self, uid: &str) -> Result<Option<BudgetRequest>> {
        self.find_requisition_by_uid(uid).await
    }

    /// Like [`SnapshotStore::get_requisition_by_uid`], for callers rendering
    /// a single requisition page: the miss becomes [`Error::NotFound`] whose
    /// display string is the "could not load" message shown in place of the
    /// record.
    pub async fn require_requisition_by_uid(&self, uid: &str) -> Result<BudgetRequest> {
        self.find_requisition_by_uid(uid)
            .await?
            .ok_or_else(|| Error::NotFound {
                entity: "requisition",
                id: uid.to_string(),
            })
    }

    async fn find_requisition_by_uid(&self, uid: &str) -> Result<Option<BudgetRequest>> {
        let row = CachedRecord::find()
            .filter(CachedRecordColumn::Collection.eq(Collection::Requisitions.as_str()))
            .filter(CachedRecordColumn::Uid.eq(uid))
            .one(&self.db)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        match serde_json::from_str(&row.payload) {
            Ok(record) => Ok(Some(record)),
            Err(error) => {
                warn!(uid, %error, "cached requisition row no longer decodes");
                Ok(None)
            }
        }
    }
}
