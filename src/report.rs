//! Aggregation of check results over a single run.

use serde::Serialize;

use crate::check::CheckResult;

/// Ordered accumulation of [`CheckResult`]s for one run.
///
/// Results are recorded in the order they were produced, which is exactly
/// the input enumeration order since checks run strictly sequentially. The
/// report lives for the duration of one run and is discarded at exit.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one result.
    pub fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Total number of names checked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// All recorded results, in check order.
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Names confirmed available (HTTP 204), in check order.
    pub fn available(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|r| r.is_available())
            .map(|r| r.username.as_str())
    }

    /// Number of names confirmed available.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_available()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(username: &str, status_code: u16) -> CheckResult {
        CheckResult {
            username: username.to_owned(),
            taken: status_code == 200,
            status_code,
        }
    }

    #[test]
    fn empty_report_counts_zero() {
        let report = Report::new();
        assert_eq!(report.total(), 0);
        assert_eq!(report.available_count(), 0);
        assert_eq!(report.available().count(), 0);
    }

    #[test]
    fn one_free_one_taken() {
        let mut report = Report::new();
        report.record(result("ninja", 204));
        report.record(result("a", 200));

        assert_eq!(report.total(), 2);
        assert_eq!(report.available_count(), 1);
        assert_eq!(report.available().collect::<Vec<_>>(), ["ninja"]);
    }

    #[test]
    fn unknown_statuses_are_excluded_from_available() {
        let mut report = Report::new();
        report.record(result("ninja", 404));
        report.record(result("shroud", 500));

        assert_eq!(report.total(), 2);
        assert_eq!(report.available_count(), 0);
    }

    #[test]
    fn available_count_matches_available_listing() {
        let mut report = Report::new();
        for (name, status) in [("a", 200), ("b", 204), ("c", 204), ("d", 503)] {
            report.record(result(name, status));
        }
        assert_eq!(report.available_count(), report.available().count());
        assert_eq!(report.available().collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn serializes_results_in_order() {
        let mut report = Report::new();
        report.record(result("ninja", 204));
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["results"][0]["username"], "ninja");
        assert_eq!(json["results"][0]["status_code"], 204);
        assert_eq!(json["results"][0]["taken"], false);
    }
}
