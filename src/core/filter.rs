//! Filter predicates over entity lists.
//!
//! [`apply_filters`] is a pure function of (list, filter state): calling it
//! twice with the same inputs yields the same output and never mutates the
//! list. All active predicates must hold (logical AND).

use chrono::NaiveDate;

use crate::models::{DepartmentDetails, ListRecord, RecordId, Viewer};

use super::resolve;

/// Status predicate: everything, or one exact lowercase label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No constraint
    #[default]
    All,
    /// Exact match against the record's status label
    Only(String),
}

/// Department predicate: everything, or one department key.
/// Only evaluated for admin viewers - non-admin data is already scoped
/// server-side to the viewer's own department.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    /// No constraint
    #[default]
    All,
    /// Records belonging to one department
    Only(RecordId),
}

/// The current combination of search/status/department/date predicates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    /// Case-insensitive substring search; empty means no constraint
    pub search: String,
    /// Status predicate
    pub status: StatusFilter,
    /// Department predicate (admin-only)
    pub department: DepartmentFilter,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
}

impl FilterState {
    /// The business default for request lists: status starts at `pending`,
    /// not "all" - approvers land on the work that needs them.
    #[must_use]
    pub fn pending_requests() -> Self {
        Self {
            status: StatusFilter::Only("pending".to_string()),
            ..Self::default()
        }
    }
}

/// Evaluates every active predicate against every record and returns the
/// matching records in their original relative order.
#[must_use]
pub fn apply_filters<R: ListRecord>(
    records: &[R],
    filter: &FilterState,
    viewer: &Viewer,
    departments: &[DepartmentDetails],
) -> Vec<R> {
    let needle = filter.search.trim().to_lowercase();

    records
        .iter()
        .filter(|record| matches_status(*record, &filter.status))
        .filter(|record| matches_department(*record, &filter.department, viewer))
        .filter(|record| needle.is_empty() || matches_search(*record, &needle, departments))
        .filter(|record| matches_date_range(*record, filter.from, filter.to))
        .cloned()
        .collect()
}

fn matches_status<R: ListRecord>(record: &R, status: &StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Only(label) => record.status_label().eq_ignore_ascii_case(label),
    }
}

fn matches_department<R: ListRecord>(
    record: &R,
    department: &DepartmentFilter,
    viewer: &Viewer,
) -> bool {
    if !viewer.is_admin() {
        return true;
    }
    match department {
        DepartmentFilter::All => true,
        DepartmentFilter::Only(wanted) => {
            resolve::department_key(record.department_handle()) == Some(wanted)
        }
    }
}

fn matches_search<R: ListRecord>(
    record: &R,
    needle: &str,
    departments: &[DepartmentDetails],
) -> bool {
    let requester = resolve::user_display_name(record.user_handle());
    if requester.to_lowercase().contains(needle) {
        return true;
    }

    let department = resolve::department_name(record.department_handle(), departments);
    if department.to_lowercase().contains(needle) {
        return true;
    }

    if let Some(category) = record.category_name() {
        if category.to_lowercase().contains(needle) {
            return true;
        }
    }

    record
        .description()
        .is_some_and(|description| description.to_lowercase().contains(needle))
}

fn matches_date_range<R: ListRecord>(
    record: &R,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }

    // A bound is active: records without a parseable date are excluded
    // rather than guessed at.
    let Some(date) = record.date_label().and_then(parse_record_date) else {
        return false;
    };

    if from.is_some_and(|from| date < from) {
        return false;
    }
    if to.is_some_and(|to| date > to) {
        return false;
    }
    true
}

/// Parses the date labels the backend is known to emit.
///
/// Tries RFC 3339 timestamps first, then the bare `YYYY-MM-DD` form.
/// Anything else is `None` - the caller decides what exclusion means.
#[must_use]
pub fn parse_record_date(label: &str) -> Option<NaiveDate> {
    let trimmed = label.trim();
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{sample_department, sample_request, viewer_admin, viewer_employee};

    #[test]
    fn test_filtering_is_pure_and_repeatable() {
        let records = vec![
            sample_request(1, "pending"),
            sample_request(2, "approved"),
            sample_request(3, "pending"),
        ];
        let filter = FilterState::pending_requests();
        let viewer = viewer_admin();

        let first = apply_filters(&records, &filter, &viewer, &[]);
        let second = apply_filters(&records, &filter, &viewer, &[]);

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        // Source list is untouched
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].status_label(), "approved");
    }

    #[test]
    fn test_status_all_skips_the_predicate() {
        let records = vec![sample_request(1, "pending"), sample_request(2, "rejected")];
        let filter = FilterState::default();
        assert_eq!(
            apply_filters(&records, &filter, &viewer_admin(), &[]).len(),
            2
        );
    }

    #[test]
    fn test_department_predicate_is_admin_only() {
        let mut in_sales = sample_request(1, "pending");
        in_sales.department_id = Some(crate::models::RecordId::from(7));
        let mut in_ops = sample_request(2, "pending");
        in_ops.department_id = Some(crate::models::RecordId::from(8));
        let records = vec![in_sales, in_ops];

        let filter = FilterState {
            department: DepartmentFilter::Only(crate::models::RecordId::from(7)),
            ..FilterState::default()
        };

        let for_admin = apply_filters(&records, &filter, &viewer_admin(), &[]);
        assert_eq!(for_admin.len(), 1);
        assert_eq!(for_admin[0].id, crate::models::RecordId::from(1));

        // Non-admin data is already scoped server-side; the predicate is skipped
        let employee = viewer_employee(Some(8));
        assert_eq!(apply_filters(&records, &filter, &employee, &[]).len(), 2);
    }

    #[test]
    fn test_search_covers_requester_department_category_description() {
        let departments = vec![sample_department(7, "Sales")];

        let mut by_description = sample_request(1, "pending");
        by_description.description = Some("Quarterly team offsite".to_string());

        let mut by_department = sample_request(2, "pending");
        by_department.department_id = Some(crate::models::RecordId::from(7));

        let records = vec![by_description, by_department];

        let search = |needle: &str| FilterState {
            search: needle.to_string(),
            ..FilterState::default()
        };

        let hits = apply_filters(&records, &search("OFFSITE"), &viewer_admin(), &departments);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, crate::models::RecordId::from(1));

        let hits = apply_filters(&records, &search("sales"), &viewer_admin(), &departments);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, crate::models::RecordId::from(2));

        let hits = apply_filters(&records, &search("nowhere"), &viewer_admin(), &departments);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive_and_excludes_unparseable() {
        let mut in_range = sample_request(1, "pending");
        in_range.date = Some("2026-03-15".to_string());
        let mut on_boundary = sample_request(2, "pending");
        on_boundary.date = Some("2026-03-01T09:30:00Z".to_string());
        let mut garbled = sample_request(3, "pending");
        garbled.date = Some("next tuesday".to_string());
        let records = vec![in_range, on_boundary, garbled];

        let filter = FilterState {
            from: NaiveDate::from_ymd_opt(2026, 3, 1),
            to: NaiveDate::from_ymd_opt(2026, 3, 31),
            ..FilterState::default()
        };

        let hits = apply_filters(&records, &filter, &viewer_admin(), &[]);
        assert_eq!(hits.len(), 2);

        // No bounds active: the garbled date is not held against the record
        let unbounded = FilterState::default();
        assert_eq!(
            apply_filters(&records, &unbounded, &viewer_admin(), &[]).len(),
            3
        );
    }

    #[test]
    fn test_predicates_combine_with_logical_and() {
        let mut matching = sample_request(1, "pending");
        matching.description = Some("Printer paper".to_string());
        matching.date = Some("2026-02-10".to_string());
        let mut wrong_status = sample_request(2, "approved");
        wrong_status.description = Some("Printer paper".to_string());
        wrong_status.date = Some("2026-02-10".to_string());
        let records = vec![matching, wrong_status];

        let filter = FilterState {
            search: "printer".to_string(),
            status: StatusFilter::Only("pending".to_string()),
            from: NaiveDate::from_ymd_opt(2026, 2, 1),
            ..FilterState::default()
        };

        let hits = apply_filters(&records, &filter, &viewer_admin(), &[]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, crate::models::RecordId::from(1));
    }
}
