// ============================================================================
// SEARCH FILTER - user-chosen criteria for the public job listing
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::JobType;

/// Fixed salary bands (annual, INR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalaryRange {
    #[serde(rename = "0-3 LPA")]
    UpTo3,
    #[serde(rename = "3-6 LPA")]
    From3To6,
    #[serde(rename = "6-10 LPA")]
    From6To10,
    #[serde(rename = "10+ LPA")]
    Above10,
}

impl SalaryRange {
    pub const ALL: [SalaryRange; 4] = [
        SalaryRange::UpTo3,
        SalaryRange::From3To6,
        SalaryRange::From6To10,
        SalaryRange::Above10,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SalaryRange::UpTo3 => "0-3 LPA",
            SalaryRange::From3To6 => "3-6 LPA",
            SalaryRange::From6To10 => "6-10 LPA",
            SalaryRange::Above10 => "10+ LPA",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == label.trim())
    }

    /// Inclusive `(min, max)`; `max` is `None` for the open-ended top band
    pub fn bounds(&self) -> (u64, Option<u64>) {
        match self {
            SalaryRange::UpTo3 => (0, Some(299_999)),
            SalaryRange::From3To6 => (300_000, Some(599_999)),
            SalaryRange::From6To10 => (600_000, Some(1_000_000)),
            SalaryRange::Above10 => (1_000_001, None),
        }
    }

    pub fn contains(&self, salary: u64) -> bool {
        let (min, max) = self.bounds();
        salary >= min && max.map_or(true, |max| salary <= max)
    }
}

/// Search criteria. Lives only in memory; never persisted across reloads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchFilter {
    pub title: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub categories: Vec<String>,
    pub location_states: Vec<String>,
    pub salary_range: Option<SalaryRange>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.location.trim().is_empty()
            && self.job_type.is_none()
            && self.categories.is_empty()
            && self.location_states.is_empty()
            && self.salary_range.is_none()
    }

    /// Adds the value if absent, removes it otherwise
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_state(&mut self, state: &str) {
        toggle(&mut self.location_states, state);
    }

    /// Query pairs for `GET /api/jobs`.
    ///
    /// Only non-empty fields are emitted; multi-selects become repeated keys.
    pub fn to_query(&self, page: u32, limit: u32) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), page.max(1).to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        let title = self.title.trim();
        if !title.is_empty() {
            query.push(("title".to_string(), title.to_string()));
        }
        let location = self.location.trim();
        if !location.is_empty() {
            query.push(("location".to_string(), location.to_string()));
        }
        if let Some(job_type) = self.job_type {
            query.push(("type".to_string(), job_type.as_str().to_string()));
        }
        for category in self.categories.iter().filter(|c| !c.trim().is_empty()) {
            query.push(("category".to_string(), category.clone()));
        }
        for state in self.location_states.iter().filter(|s| !s.trim().is_empty()) {
            query.push(("states[]".to_string(), state.clone()));
        }
        if let Some(range) = self.salary_range {
            let (min, max) = range.bounds();
            query.push(("salaryMin".to_string(), min.to_string()));
            if let Some(max) = max {
                query.push(("salaryMax".to_string(), max.to_string()));
            }
        }

        query
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

/// Renders query pairs as a percent-encoded query string (no leading `?`)
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_table_matches_fixed_bounds() {
        assert_eq!(SalaryRange::UpTo3.bounds(), (0, Some(299_999)));
        assert_eq!(SalaryRange::From3To6.bounds(), (300_000, Some(599_999)));
        assert_eq!(SalaryRange::From6To10.bounds(), (600_000, Some(1_000_000)));
        assert_eq!(SalaryRange::Above10.bounds(), (1_000_001, None));
    }

    #[test]
    fn salary_bands_are_exclusive_at_edges() {
        assert!(!SalaryRange::From3To6.contains(600_000));
        assert!(SalaryRange::From6To10.contains(600_000));
        assert!(SalaryRange::From3To6.contains(599_999));
        assert!(!SalaryRange::From6To10.contains(1_000_001));
        assert!(SalaryRange::Above10.contains(1_000_001));

        for salary in [0, 299_999, 300_000, 599_999, 600_000, 1_000_000, 1_000_001, 5_000_000] {
            let matching = SalaryRange::ALL.iter().filter(|r| r.contains(salary)).count();
            assert_eq!(matching, 1, "salary {} must fall in exactly one band", salary);
        }
    }

    #[test]
    fn labels_round_trip() {
        for range in SalaryRange::ALL {
            assert_eq!(SalaryRange::from_label(range.label()), Some(range));
        }
        assert_eq!(SalaryRange::from_label("1-2 LPA"), None);
    }

    #[test]
    fn empty_filter_serializes_only_page_and_limit() {
        let filter = SearchFilter::default();
        assert!(filter.is_empty());
        assert_eq!(to_query_string(&filter.to_query(1, 9)), "page=1&limit=9");
    }

    #[test]
    fn blank_text_fields_are_skipped() {
        let filter = SearchFilter {
            title: "   ".to_string(),
            location: String::new(),
            ..SearchFilter::default()
        };
        assert_eq!(filter.to_query(2, 9).len(), 2);
    }

    #[test]
    fn full_filter_serializes_repeated_keys_and_salary() {
        let filter = SearchFilter {
            title: "Site Engineer".to_string(),
            location: "Pune".to_string(),
            job_type: Some(JobType::White),
            categories: vec!["Construction".to_string(), "IT".to_string()],
            location_states: vec!["Maharashtra".to_string(), "Goa".to_string()],
            salary_range: Some(SalaryRange::From3To6),
        };

        assert_eq!(
            to_query_string(&filter.to_query(3, 9)),
            "page=3&limit=9&title=Site%20Engineer&location=Pune&type=white\
             &category=Construction&category=IT\
             &states%5B%5D=Maharashtra&states%5B%5D=Goa\
             &salaryMin=300000&salaryMax=599999"
        );
    }

    #[test]
    fn open_ended_band_omits_max() {
        let filter = SearchFilter {
            salary_range: Some(SalaryRange::Above10),
            ..SearchFilter::default()
        };
        let query = filter.to_query(1, 9);
        assert!(query.contains(&("salaryMin".to_string(), "1000001".to_string())));
        assert!(!query.iter().any(|(k, _)| k == "salaryMax"));
    }

    #[test]
    fn toggling_adds_then_removes() {
        let mut filter = SearchFilter::default();
        filter.toggle_category("IT");
        filter.toggle_state("Goa");
        assert_eq!(filter.categories, vec!["IT".to_string()]);
        filter.toggle_category("IT");
        assert!(filter.categories.is_empty());
        assert!(!filter.is_empty());
    }
}
