//! Entity module - Contains all SeaORM entity definitions for the local
//! cache database. Each entity has a Model struct for data and an Entity
//! struct for operations.

pub mod cached_record;

// Re-export specific types to avoid conflicts
pub use cached_record::{
    Column as CachedRecordColumn, Entity as CachedRecord, Model as CachedRecordModel,
};
