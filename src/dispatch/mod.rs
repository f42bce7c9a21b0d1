//! Action dispatchers.
//!
//! A dispatcher performs one mutating call against the gateway, translates
//! its result into a user notification, and asks for a full reload on
//! success - never an optimistic local patch, so the displayed state can
//! only ever diverge from the server between a mutation and its refresh.
//! Duplicate submissions are not deduplicated here; the shell disables the
//! triggering control off the [`InFlight`] flag while a dispatch runs.

/// Client create/update/delete dispatchers
pub mod clients;
/// Invoice create/update/delete dispatchers
pub mod invoices;
/// The notification service
pub mod notify;
/// Budget request dispatchers including approve/reject
pub mod requests;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::errors::{Error, Result};

pub use notify::{channel, Notification, NotificationFeed, Notifier, Severity};

/// What the shell should do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The mutation landed; reload server state in full
    Refresh,
    /// The mutation failed; state was not touched
    Failed,
}

/// The loading flag the shell reads to disable a control while its
/// dispatch is in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    flag: Arc<AtomicBool>,
}

/// Clears the in-flight flag when the dispatch ends, even on early return.
#[derive(Debug)]
pub struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlight {
    /// Marks a dispatch as running until the returned guard drops.
    #[must_use]
    pub fn begin(&self) -> InFlightGuard {
        self.flag.store(true, Ordering::SeqCst);
        InFlightGuard {
            flag: Arc::clone(&self.flag),
        }
    }

    /// Whether a dispatch is currently running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Runs one mutating gateway call with the standard outcome handling and
/// the default error presentation (the error's display string, verbatim).
pub async fn run_dispatch<F>(
    notifier: &Notifier,
    in_flight: &InFlight,
    success_message: &str,
    operation: F,
) -> DispatchOutcome
where
    F: Future<Output = Result<()>>,
{
    run_dispatch_with(notifier, in_flight, success_message, operation, |error| {
        error.to_string()
    })
    .await
}

/// Like [`run_dispatch`] but with a custom error-message formatter, for
/// actions whose structured errors deserve a better message than the
/// default display string.
pub async fn run_dispatch_with<F, M>(
    notifier: &Notifier,
    in_flight: &InFlight,
    success_message: &str,
    operation: F,
    format_error: M,
) -> DispatchOutcome
where
    F: Future<Output = Result<()>>,
    M: FnOnce(&Error) -> String,
{
    let _guard = in_flight.begin();
    match operation.await {
        Ok(()) => {
            notifier.success(success_message);
            DispatchOutcome::Refresh
        }
        Err(error) => {
            debug!(%error, "dispatch failed");
            notifier.error(format_error(&error));
            DispatchOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[tokio::test]
    async fn test_success_notifies_and_requests_refresh() {
        let (notifier, mut feed) = channel();
        let in_flight = InFlight::default();

        let outcome =
            run_dispatch(&notifier, &in_flight, "Budget request created", async { Ok(()) })
                .await;

        assert_eq!(outcome, DispatchOutcome::Refresh);
        let note = feed.try_next().unwrap();
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(note.message, "Budget request created");
        assert!(!in_flight.is_loading());
    }

    #[tokio::test]
    async fn test_failure_surfaces_error_verbatim_and_mutates_nothing() {
        let (notifier, mut feed) = channel();
        let in_flight = InFlight::default();

        let outcome = run_dispatch(&notifier, &in_flight, "unused", async {
            Err(Error::Gateway {
                verb: "deleting",
                entity: "invoice",
            })
        })
        .await;

        assert_eq!(outcome, DispatchOutcome::Failed);
        let note = feed.try_next().unwrap();
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.message, "Error deleting invoice");
    }

    #[tokio::test]
    async fn test_in_flight_flag_is_set_while_the_operation_runs() {
        let (notifier, _feed) = channel();
        let in_flight = InFlight::default();
        let observer = in_flight.clone();

        assert!(!in_flight.is_loading());
        let outcome = run_dispatch(&notifier, &in_flight, "done", async move {
            assert!(observer.is_loading(), "flag must be up during the call");
            Ok(())
        })
        .await;
        assert_eq!(outcome, DispatchOutcome::Refresh);
        assert!(!in_flight.is_loading());
    }
}
