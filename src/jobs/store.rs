//! Summary store for serving results after they are displayed.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::types::SummaryReport;

/// How long a finished summary stays downloadable.
const RETENTION_HOURS: i64 = 1;

/// In-memory store of finished summaries, keyed by report id.
pub struct SummaryStore {
    reports: HashMap<Uuid, SummaryReport>,
}

impl SummaryStore {
    /// Create a new summary store.
    pub fn new() -> Self {
        Self {
            reports: HashMap::new(),
        }
    }

    /// Store a report, pruning expired ones first.
    pub fn insert(&mut self, report: SummaryReport) -> Uuid {
        self.cleanup_old_reports();
        let id = report.id;
        self.reports.insert(id, report);
        id
    }

    /// Get a report by ID.
    pub fn get(&self, id: Uuid) -> Option<&SummaryReport> {
        self.reports.get(&id)
    }

    /// Number of stored reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Drop reports older than the retention window.
    pub fn cleanup_old_reports(&mut self) {
        let cutoff = Utc::now() - Duration::hours(RETENTION_HOURS);
        self.reports.retain(|_, report| report.created_at > cutoff);
    }
}

impl Default for SummaryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinishPolicy, TailPolicy};

    fn report(age_minutes: i64) -> SummaryReport {
        SummaryReport {
            id: Uuid::new_v4(),
            summary: "A short summary.".to_string(),
            original_word_count: 120,
            final_word_count: 3,
            chunk_count: 1,
            failures: vec![],
            reduced: true,
            tail_policy: TailPolicy::PreserveTail,
            finish_policy: FinishPolicy::Reduce,
            source_name: None,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = SummaryStore::new();
        let id = store.insert(report(0));
        assert_eq!(store.get(id).map(|r| r.summary.as_str()), Some("A short summary."));
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_expired_reports_are_pruned_on_insert() {
        let mut store = SummaryStore::new();
        let old_report = report(90);
        let old = old_report.id;
        store.reports.insert(old, old_report);
        let recent = store.insert(report(10));
        assert!(store.get(old).is_none());

        store.reports.insert(old, report(90));
        assert_eq!(store.len(), 2);

        store.insert(report(0));
        assert!(store.get(old).is_none());
        assert!(store.get(recent).is_some());
        assert_eq!(store.len(), 2);
    }
}
