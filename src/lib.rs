//! `LedgerDesk` - Client-side data synchronization and view-state engine
//!
//! This crate provides the data layer for a business-management dashboard
//! (budgets, budget requests, transactions, invoices, clients, administration).
//! It reconciles three input streams - server fetches, a local cache fallback,
//! and real-time patch events - into one consistent, filtered, paginated list
//! per entity type, and drives mutations through thin action dispatchers.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation - missing docs should be added gradually
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Real-time patch channel - event decoding, list reducer, consumer tasks
pub mod channel;
/// Configuration management for the backend gateway, channel, and cache store
pub mod config;
/// View-state core - filtering, pagination, name resolution, list controller
pub mod core;
/// Action dispatchers - mutating gateway calls plus the notification service
pub mod dispatch;
/// SeaORM entity definitions for the local cache database
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Remote data gateway - REST calls, response normalization, error mapping
pub mod gateway;
/// Wire-facing record types shared by every layer
pub mod models;
/// Local cache store and the server/cache fallback policy
pub mod store;
/// Tracing initialization for host shells
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;
