//! Pure list reconciliation.
//!
//! Real-time patches and full refreshes both funnel through [`reduce`], a
//! pure function over an immutable list. Merges are keyed by id, preserve
//! the relative order of unaffected records, and never introduce a
//! duplicate id.

use crate::models::{ListRecord, RecordId};

/// One instruction to reconcile an in-memory list.
#[derive(Debug, Clone)]
pub enum ListAction<R> {
    /// Total replacement with authoritative server data. Never a merge.
    Replace(Vec<R>),
    /// A record created elsewhere: prepend it. If the id already exists the
    /// record is replaced in place instead - the duplicate-id invariant
    /// outranks prepend semantics.
    Create(R),
    /// A record mutated elsewhere (update/approve/reject): replace in place.
    /// Unknown ids are a no-op, never an append.
    Update(R),
    /// A record deleted elsewhere. Unknown ids are a no-op.
    Remove(RecordId),
}

/// Applies one action to a list, returning the new list.
#[must_use]
pub fn reduce<R: ListRecord>(records: &[R], action: ListAction<R>) -> Vec<R> {
    match action {
        ListAction::Replace(records) => records,
        ListAction::Create(record) => {
            if records.iter().any(|existing| existing.id() == record.id()) {
                replace_in_place(records, record)
            } else {
                let mut next = Vec::with_capacity(records.len() + 1);
                next.push(record);
                next.extend_from_slice(records);
                next
            }
        }
        ListAction::Update(record) => replace_in_place(records, record),
        ListAction::Remove(id) => records
            .iter()
            .filter(|record| *record.id() != id)
            .cloned()
            .collect(),
    }
}

fn replace_in_place<R: ListRecord>(records: &[R], replacement: R) -> Vec<R> {
    records
        .iter()
        .map(|existing| {
            if existing.id() == replacement.id() {
                replacement.clone()
            } else {
                existing.clone()
            }
        })
        .collect()
}
