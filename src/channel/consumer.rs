//! Consumer tasks that keep a list controller in sync with channel events.
//!
//! Each subscription spawns one task that decodes events in receipt order
//! and applies them to the shared controller. The task holds only a weak
//! reference: when the view unmounts and drops its controller, the task
//! ends instead of writing into freed state. Dropping the [`Subscription`]
//! aborts the task, so navigating away never leaks handlers.

use std::sync::{Arc, Weak};

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::core::{ListAction, ListController};
use crate::errors::Result;
use crate::models::{BudgetRequest, Invoice, ListRecord};

use super::events::{self, RawEvent, INVOICES_TOPIC, REQUESTS_TOPIC};
use super::hub::EventHub;

/// A live channel subscription. Aborts its consumer task on drop.
#[derive(Debug)]
pub struct Subscription {
    topic: &'static str,
    handle: JoinHandle<()>,
}

impl Subscription {
    /// The topic this subscription listens on.
    #[must_use]
    pub const fn topic(&self) -> &'static str {
        self.topic
    }

    /// Whether the consumer task has already ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
        trace!(topic = self.topic, "channel subscription torn down");
    }
}

/// Subscribes a budget-request controller to the request topic.
pub fn subscribe_requests(
    hub: &EventHub,
    controller: &Arc<RwLock<ListController<BudgetRequest>>>,
) -> Result<Subscription> {
    let rx = hub.subscribe(REQUESTS_TOPIC)?;
    Ok(spawn_consumer(
        REQUESTS_TOPIC,
        rx,
        Arc::downgrade(controller),
        events::decode_request_event,
    ))
}

/// Subscribes an invoice controller to the invoice topic.
pub fn subscribe_invoices(
    hub: &EventHub,
    controller: &Arc<RwLock<ListController<Invoice>>>,
) -> Result<Subscription> {
    let rx = hub.subscribe(INVOICES_TOPIC)?;
    Ok(spawn_consumer(
        INVOICES_TOPIC,
        rx,
        Arc::downgrade(controller),
        events::decode_invoice_event,
    ))
}

fn spawn_consumer<R, D>(
    topic: &'static str,
    mut rx: Receiver<RawEvent>,
    controller: Weak<RwLock<ListController<R>>>,
    decode: D,
) -> Subscription
where
    R: ListRecord + Send + Sync + 'static,
    D: Fn(&RawEvent) -> Option<ListAction<R>> + Send + 'static,
{
    let handle = tokio::spawn(async move {
        loop {
            let raw = match rx.recv().await {
                Ok(raw) => raw,
                Err(RecvError::Lagged(skipped)) => {
                    // The next full refresh heals whatever we missed
                    warn!(topic, skipped, "channel consumer lagged; events dropped");
                    continue;
                }
                Err(RecvError::Closed) => {
                    debug!(topic, "channel closed; consumer exiting");
                    break;
                }
            };

            // Unmount guard: the view owning this controller is gone
            let Some(shared) = controller.upgrade() else {
                debug!(topic, "controller dropped; consumer exiting");
                break;
            };

            let Some(action) = decode(&raw) else {
                continue;
            };

            let mut guard = shared.write().await;
            if events::is_admin_only(&raw.event) && !guard.viewer().is_admin() {
                trace!(topic, event = %raw.event, "skipping admin-only event");
                continue;
            }
            guard.apply(action);
        }
    });

    Subscription { topic, handle }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{DataSource, FilterState};
    use crate::models::{RecordId, RequestStatus};
    use crate::test_utils::{
        init_test_tracing, sample_request, sample_requests, viewer_admin, viewer_employee,
    };
    use serde_json::json;
    use std::time::Duration;

    fn shared_controller(
        viewer: crate::models::Viewer,
    ) -> Arc<RwLock<ListController<BudgetRequest>>> {
        let mut controller = ListController::for_viewer(viewer, FilterState::default(), 5);
        controller.set_list(sample_requests(3), DataSource::Server);
        Arc::new(RwLock::new(controller))
    }

    /// Polls until `predicate` holds or a deadline passes.
    async fn eventually<F>(mut predicate: F)
    where
        F: AsyncFnMut() -> bool,
    {
        for _ in 0..200 {
            if predicate().await {
                return;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        assert!(predicate().await, "condition not reached in time");
    }

    #[tokio::test]
    async fn test_update_event_patches_the_shared_list() {
        init_test_tracing();
        let hub = EventHub::in_process();
        let controller = shared_controller(viewer_admin());
        let _subscription = subscribe_requests(&hub, &controller).unwrap();

        hub.publish(RawEvent::new(
            REQUESTS_TOPIC,
            "request-approved",
            json!({"request": {"id": 2, "amount": 50.0, "status": "approved"}}),
        ));

        eventually(async || {
            let guard = controller.read().await;
            guard.records()[1].status == RequestStatus::Approved
        })
        .await;

        let guard = controller.read().await;
        assert_eq!(guard.records().len(), 3);
    }

    #[tokio::test]
    async fn test_new_request_is_ignored_by_non_admin_sessions() {
        let hub = EventHub::in_process();
        let controller = shared_controller(viewer_employee(Some(7)));
        let _subscription = subscribe_requests(&hub, &controller).unwrap();

        hub.publish(RawEvent::new(
            REQUESTS_TOPIC,
            "new-request",
            json!({"request": {"id": 42, "amount": 10.0, "status": "pending"}}),
        ));
        // A follow-up event the session does act on, to order the assertion
        hub.publish(RawEvent::new(
            REQUESTS_TOPIC,
            "request-updated",
            json!({"request": {"id": 1, "amount": 99.0, "status": "pending"}}),
        ));

        eventually(async || {
            let guard = controller.read().await;
            (guard.records()[0].amount - 99.0).abs() < f64::EPSILON
        })
        .await;

        let guard = controller.read().await;
        assert_eq!(guard.records().len(), 3, "create must not have been applied");
    }

    #[tokio::test]
    async fn test_new_request_prepends_for_admin_sessions() {
        let hub = EventHub::in_process();
        let controller = shared_controller(viewer_admin());
        let _subscription = subscribe_requests(&hub, &controller).unwrap();

        hub.publish(RawEvent::new(
            REQUESTS_TOPIC,
            "new-request",
            json!({"request": {"id": 42, "amount": 10.0, "status": "pending"}}),
        ));

        eventually(async || controller.read().await.records().len() == 4).await;

        let guard = controller.read().await;
        assert_eq!(*guard.records()[0].id(), RecordId::from(42));
    }

    #[tokio::test]
    async fn test_garbled_event_is_skipped_and_stream_continues() {
        init_test_tracing();
        let hub = EventHub::in_process();
        let controller = shared_controller(viewer_admin());
        let _subscription = subscribe_requests(&hub, &controller).unwrap();

        hub.publish(RawEvent::new(
            REQUESTS_TOPIC,
            "request-updated",
            json!({"request": "definitely not a record"}),
        ));
        hub.publish(RawEvent::new(
            REQUESTS_TOPIC,
            "request-deleted",
            json!({"id": 3}),
        ));

        eventually(async || controller.read().await.records().len() == 2).await;
    }

    #[tokio::test]
    async fn test_consumer_exits_when_controller_is_dropped() {
        let hub = EventHub::in_process();
        let controller = shared_controller(viewer_admin());
        let subscription = subscribe_requests(&hub, &controller).unwrap();

        drop(controller);
        hub.publish(RawEvent::new(
            REQUESTS_TOPIC,
            "request-updated",
            json!({"request": {"id": 1, "amount": 1.0, "status": "pending"}}),
        ));

        eventually(async || subscription.is_finished()).await;
    }

    #[tokio::test]
    async fn test_dropping_subscription_aborts_the_task() {
        let hub = EventHub::in_process();
        let controller = shared_controller(viewer_admin());
        let subscription = subscribe_requests(&hub, &controller).unwrap();
        let sample = sample_request(1, "pending");
        drop(subscription);

        // Task is gone; publishing afterwards must not touch the list
        hub.publish(RawEvent::new(
            REQUESTS_TOPIC,
            "request-deleted",
            json!({"id": sample.id}),
        ));
        tokio::time::sleep(Duration::from_millis(20)).await;

        let guard = controller.read().await;
        assert_eq!(guard.records().len(), 3);
    }
}
