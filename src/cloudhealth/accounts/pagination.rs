//! Page-by-page scan of the AWS accounts listing
//!
//! The scan is a two-state machine, `Scanning` or `Done`. [`advance`] is the
//! pure transition applied to each fetched page; the HTTP loop in `api.rs`
//! only feeds it pages until it reports `Done`.

use serde_json::Value;

use super::models::owner_id_matches;

/// Position in the paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
}

impl PaginationCursor {
    /// Cursor on the first page
    pub fn new(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }

    /// Cursor on the following page
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }
}

/// What the scan does after a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    /// Fetch the page at this cursor next
    Scanning(PaginationCursor),
    /// Stop fetching
    Done,
}

/// Result of applying one page to the scan
#[derive(Debug, PartialEq)]
pub struct PageOutcome {
    pub step: PageStep,
    /// Records from this page to append to the output
    pub keep: Vec<Value>,
}

/// Apply one fetched page to the scan.
///
/// - An empty page ends the scan.
/// - Without an owner filter every record is kept and the scan continues.
/// - With an owner filter, the first page holding a match ends the scan and
///   only its matching records are kept; pages without a match are dropped.
pub fn advance(
    cursor: PaginationCursor,
    owner_id: Option<u64>,
    records: Vec<Value>,
) -> PageOutcome {
    if records.is_empty() {
        return PageOutcome {
            step: PageStep::Done,
            keep: Vec::new(),
        };
    }

    let Some(owner_id) = owner_id else {
        return PageOutcome {
            step: PageStep::Scanning(cursor.next()),
            keep: records,
        };
    };

    let matching: Vec<Value> = records
        .into_iter()
        .filter(|record| owner_id_matches(record, owner_id))
        .collect();

    if matching.is_empty() {
        PageOutcome {
            step: PageStep::Scanning(cursor.next()),
            keep: matching,
        }
    } else {
        PageOutcome {
            step: PageStep::Done,
            keep: matching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account(id: u32, owner_id: &str) -> Value {
        json!({"id": id, "owner_id": owner_id})
    }

    #[test]
    fn test_cursor_starts_on_first_page() {
        let cursor = PaginationCursor::new(30);
        assert_eq!(cursor.page, 1);
        assert_eq!(cursor.per_page, 30);
        assert_eq!(cursor.next().page, 2);
        assert_eq!(cursor.next().per_page, 30);
    }

    #[test]
    fn test_empty_page_is_done() {
        let outcome = advance(PaginationCursor::new(10), None, vec![]);
        assert_eq!(outcome.step, PageStep::Done);
        assert!(outcome.keep.is_empty());

        let outcome = advance(PaginationCursor::new(10), Some(42), vec![]);
        assert_eq!(outcome.step, PageStep::Done);
    }

    #[test]
    fn test_unfiltered_keeps_everything_and_continues() {
        let cursor = PaginationCursor::new(2);
        let records = vec![account(1, "111111111111"), account(2, "222222222222")];
        let outcome = advance(cursor, None, records.clone());
        assert_eq!(outcome.step, PageStep::Scanning(cursor.next()));
        assert_eq!(outcome.keep, records);
    }

    #[test]
    fn test_filtered_without_match_continues_and_keeps_nothing() {
        let cursor = PaginationCursor::new(2);
        let outcome = advance(
            cursor,
            Some(333333333333),
            vec![account(1, "111111111111"), account(2, "222222222222")],
        );
        assert_eq!(outcome.step, PageStep::Scanning(cursor.next()));
        assert!(outcome.keep.is_empty());
    }

    #[test]
    fn test_filtered_match_stops_with_matching_subset() {
        let cursor = PaginationCursor { page: 4, per_page: 3 };
        let outcome = advance(
            cursor,
            Some(222222222222),
            vec![
                account(1, "111111111111"),
                account(2, "222222222222"),
                account(3, "222222222222"),
            ],
        );
        assert_eq!(outcome.step, PageStep::Done);
        assert_eq!(
            outcome.keep,
            vec![account(2, "222222222222"), account(3, "222222222222")]
        );
    }
}
