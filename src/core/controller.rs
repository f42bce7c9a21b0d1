//! The list view-state controller.
//!
//! One controller instance owns the authoritative in-memory list for one
//! entity type and exposes a derived, filtered, paginated view. Server
//! loads, cache fallbacks, and real-time patches all land here; the view is
//! recomputed from scratch on every call so there is no hidden mutation to
//! drift out of sync.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{DepartmentDetails, ListRecord, Viewer};

use super::filter::{self, DepartmentFilter, FilterState, StatusFilter};
use super::paginate::PageState;
use super::reducer::{self, ListAction};

/// Where the currently displayed list came from.
///
/// `ConnectionError` and `CachedFallback` are distinct failure
/// presentations: a connection error shows a banner and disables mutation,
/// while a cache fallback silently serves the last known-good snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Initial state before any load completes
    Loading,
    /// Authoritative server data
    Server,
    /// Last known-good snapshot served because the server returned empty
    CachedFallback,
    /// The server really has no records
    Empty,
    /// The server could not be reached; the view is read-only
    ConnectionError,
}

impl DataSource {
    /// Whether create/edit/approve/reject controls may be enabled.
    #[must_use]
    pub const fn allows_mutation(self) -> bool {
        !matches!(self, Self::ConnectionError)
    }
}

/// The derived view handed to the display layer.
#[derive(Debug, Clone)]
pub struct ListView<R> {
    /// Records visible on the current page, in display order
    pub rows: Vec<R>,
    /// Current page, 1-based
    pub page: usize,
    /// Derived total page count for the active filter
    pub total_pages: usize,
    /// How many records the active filter matched
    pub filtered_len: usize,
    /// Where the underlying list came from
    pub source: DataSource,
}

/// Owns one entity list plus its filter and pagination state.
#[derive(Debug)]
pub struct ListController<R: ListRecord> {
    records: Vec<R>,
    filter: FilterState,
    page: PageState,
    source: DataSource,
    viewer: Viewer,
    departments: Vec<DepartmentDetails>,
}

impl<R: ListRecord> ListController<R> {
    /// Creates a controller for the given session viewer.
    ///
    /// Non-admin viewers get their department filter initialized to their
    /// own department on mount; the department selector itself is an
    /// admin-only control and stays locked for them.
    #[must_use]
    pub fn for_viewer(viewer: Viewer, filter: FilterState, page_size: usize) -> Self {
        let mut filter = filter;
        if !viewer.is_admin() {
            if let Some(department_id) = viewer.department_id.clone() {
                filter.department = DepartmentFilter::Only(department_id);
            }
        }
        Self {
            records: Vec::new(),
            filter,
            page: PageState::new(page_size),
            source: DataSource::Loading,
            viewer,
            departments: Vec::new(),
        }
    }

    /// The session viewer this controller was mounted for.
    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Where the current list came from.
    #[must_use]
    pub const fn source(&self) -> DataSource {
        self.source
    }

    /// The active filter state.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The full unfiltered in-memory list.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Supplies the loaded department list used for name resolution and
    /// department filtering.
    pub fn set_departments(&mut self, departments: Vec<DepartmentDetails>) {
        self.departments = departments;
    }

    /// Replaces the entire list with (re)loaded data.
    ///
    /// Server data is authoritative: this never merges with previous state.
    /// Filters are left alone, and the current page is clamped in case the
    /// new list is smaller than the old one.
    pub fn set_list(&mut self, records: Vec<R>, source: DataSource) {
        self.records = records;
        self.source = source;
        self.clamp_page();
    }

    /// Applies one real-time patch action to the list.
    pub fn apply(&mut self, action: ListAction<R>) {
        self.records = reducer::reduce(&self.records, action);
        self.clamp_page();
    }

    /// Updates the free-text search and resets to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page.reset();
    }

    /// Updates the status predicate and resets to page 1.
    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.page.reset();
    }

    /// Updates the date-range bounds and resets to page 1.
    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.filter.from = from;
        self.filter.to = to;
        self.page.reset();
    }

    /// Updates the department predicate and resets to page 1.
    ///
    /// Admin-only: for non-admin viewers the selector is not rendered, so a
    /// call reaching here is a bug in the shell - it is ignored with a warn
    /// rather than silently widening the viewer's scope.
    pub fn set_department_filter(&mut self, department: DepartmentFilter) {
        if !self.viewer.is_admin() {
            warn!("ignoring department filter change from non-admin viewer");
            return;
        }
        self.filter.department = department;
        self.page.reset();
    }

    /// Moves to the given page, clamped to the derived page range.
    pub fn set_page(&mut self, page: usize) {
        self.page.page = page.max(1);
        self.clamp_page();
    }

    /// Whether the given record was created by the session viewer.
    ///
    /// Derived solely from the record's own owning key - never cached.
    #[must_use]
    pub fn is_creator(&self, record: &R) -> bool {
        record.owner_id() == Some(&self.viewer.user_id)
    }

    /// Recomputes the derived, filtered, paginated view from scratch.
    #[must_use]
    pub fn view(&self) -> ListView<R> {
        let filtered =
            filter::apply_filters(&self.records, &self.filter, &self.viewer, &self.departments);
        ListView {
            rows: self.page.slice(&filtered).to_vec(),
            page: self.page.page,
            total_pages: self.page.total_pages(filtered.len()),
            filtered_len: filtered.len(),
            source: self.source,
        }
    }

    fn clamp_page(&mut self) {
        let filtered_len =
            filter::apply_filters(&self.records, &self.filter, &self.viewer, &self.departments)
                .len();
        self.page.clamp(filtered_len);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::{RecordId, RequestStatus};
    use crate::test_utils::{sample_request, viewer_admin, viewer_employee};

    /// Twelve requests of which five are pending, as in the approval queue
    /// walkthrough.
    fn twelve_requests() -> Vec<crate::models::BudgetRequest> {
        (1..=12)
            .map(|n| sample_request(n, if n <= 5 { "pending" } else { "approved" }))
            .collect()
    }

    #[test]
    fn test_pending_filter_then_all_recomputes_pages_and_resets() {
        let mut controller = ListController::for_viewer(
            viewer_admin(),
            FilterState::pending_requests(),
            5,
        );
        controller.set_list(twelve_requests(), DataSource::Server);

        let view = controller.view();
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.filtered_len, 5);

        controller.set_page(1);
        controller.set_status_filter(StatusFilter::All);

        let view = controller.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.filtered_len, 12);
    }

    #[test]
    fn test_every_filter_mutation_resets_to_page_one() {
        let mut controller =
            ListController::for_viewer(viewer_admin(), FilterState::default(), 2);
        controller.set_list(twelve_requests(), DataSource::Server);
        assert!(controller.view().total_pages > 1);

        controller.set_page(3);
        controller.set_search("anything");
        assert_eq!(controller.view().page, 1);

        controller.set_search("");
        controller.set_page(3);
        controller.set_status_filter(StatusFilter::Only("approved".to_string()));
        assert_eq!(controller.view().page, 1);

        controller.set_status_filter(StatusFilter::All);
        controller.set_page(3);
        controller.set_date_range(None, chrono::NaiveDate::from_ymd_opt(2030, 1, 1));
        assert_eq!(controller.view().page, 1);

        controller.set_date_range(None, None);
        controller.set_page(3);
        controller.set_department_filter(DepartmentFilter::All);
        assert_eq!(controller.view().page, 1);
    }

    #[test]
    fn test_approval_patch_drops_record_from_pending_view() {
        let mut controller = ListController::for_viewer(
            viewer_admin(),
            FilterState::pending_requests(),
            5,
        );
        controller.set_list(twelve_requests(), DataSource::Server);
        assert_eq!(controller.view().filtered_len, 5);

        let mut approved = sample_request(42, "pending");
        approved.id = RecordId::new("3");
        approved.status = RequestStatus::Approved;
        controller.apply(ListAction::Update(approved));

        // Record 3 no longer matches status=pending; no manual refresh needed
        let view = controller.view();
        assert_eq!(view.filtered_len, 4);
        assert!(view.rows.iter().all(|r| *r.id() != RecordId::new("3")));
        // The full list still holds all twelve records
        assert_eq!(controller.records().len(), 12);
    }

    #[test]
    fn test_nonadmin_mount_scopes_department_and_locks_selector() {
        let employee = viewer_employee(Some(7));
        let mut controller =
            ListController::<crate::models::BudgetRequest>::for_viewer(employee, FilterState::default(), 5);

        assert_eq!(
            controller.filter().department,
            DepartmentFilter::Only(RecordId::from(7))
        );

        // The selector is not rendered for non-admins; a stray call is ignored
        controller.set_department_filter(DepartmentFilter::All);
        assert_eq!(
            controller.filter().department,
            DepartmentFilter::Only(RecordId::from(7))
        );
    }

    #[test]
    fn test_list_shrink_clamps_page_instead_of_showing_empty_page() {
        let mut controller =
            ListController::for_viewer(viewer_admin(), FilterState::default(), 5);
        controller.set_list(twelve_requests(), DataSource::Server);
        controller.set_page(3);
        assert_eq!(controller.view().rows.len(), 2);

        // Both records on page 3 get deleted elsewhere
        controller.apply(ListAction::Remove(RecordId::from(11)));
        controller.apply(ListAction::Remove(RecordId::from(12)));

        let view = controller.view();
        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn test_is_creator_compares_owning_key_to_viewer() {
        let controller =
            ListController::for_viewer(viewer_admin(), FilterState::default(), 5);
        let mut own = sample_request(1, "pending");
        own.user_id = Some(controller.viewer().user_id.clone());
        let mut other = sample_request(2, "pending");
        other.user_id = Some(RecordId::from(999));
        let mut orphan = sample_request(3, "pending");
        orphan.user_id = None;

        assert!(controller.is_creator(&own));
        assert!(!controller.is_creator(&other));
        assert!(!controller.is_creator(&orphan));
    }

    #[test]
    fn test_connection_error_source_disables_mutation() {
        let mut controller =
            ListController::<crate::models::BudgetRequest>::for_viewer(viewer_admin(), FilterState::default(), 5);
        controller.set_list(Vec::new(), DataSource::ConnectionError);
        assert!(!controller.view().source.allows_mutation());
        assert!(DataSource::CachedFallback.allows_mutation());
    }
}
