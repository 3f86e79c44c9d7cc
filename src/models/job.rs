use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};

/// Collar category of a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Blue,
    White,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Blue => "blue",
            JobType::White => "white",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JobType::Blue => "Blue collar",
            JobType::White => "White collar",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(JobType::Blue),
            "white" => Some(JobType::White),
            _ => None,
        }
    }
}

/// Reads an optional job type the way [`JobType::parse`] does.
///
/// Blank, unknown or non-string values become `None` so one odd record does
/// not fail a whole listing.
pub fn lenient_job_type<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|value| value.as_str()).and_then(JobType::parse))
}

/// Card-level view of a posting
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub state: String,
    #[serde(rename = "type", deserialize_with = "lenient_job_type")]
    pub job_type: Option<JobType>,
    pub category: String,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub is_verified: bool,
    #[serde(alias = "createdAt")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl JobSummary {
    /// "3.0 - 6.0 LPA" style label, `None` when the posting has no salary
    pub fn salary_label(&self) -> Option<String> {
        let lpa = |amount: u64| format!("{:.1}", amount as f64 / 100_000.0);
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some(format!("{} - {} LPA", lpa(min), lpa(max))),
            (Some(min), None) => Some(format!("{}+ LPA", lpa(min))),
            (None, Some(max)) => Some(format!("up to {} LPA", lpa(max))),
            (None, None) => None,
        }
    }
}

/// Full posting as returned by `/api/jobs/:id`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDetail {
    #[serde(flatten)]
    pub summary: JobSummary,
    pub description: String,
    pub requirements: Vec<String>,
    pub experience: String,
    pub openings: Option<u32>,
}

/// Pagination block of the `/api/jobs` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_jobs: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One page of public search results.
///
/// Always replaced as a whole; pages are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct JobsPage {
    pub items: Vec<JobSummary>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl JobsPage {
    /// State shown after a failed fetch and before the first one
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            has_next: false,
            has_prev: false,
        }
    }

    /// Builds a page from a server response, keeping `items.len() <= page_size`
    /// and `current_page` within `[1, total_pages]`.
    pub fn from_response(mut items: Vec<JobSummary>, pagination: Pagination, page_size: u32) -> Self {
        items.truncate(page_size as usize);
        let total_pages = pagination.total_pages.max(1);
        let current_page = pagination.current_page.clamp(1, total_pages);

        Self {
            items,
            current_page,
            total_pages,
            total_count: pagination.total_jobs,
            has_next: pagination.has_next_page && current_page < total_pages,
            has_prev: pagination.has_prev_page && current_page > 1,
        }
    }
}

impl Default for JobsPage {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str) -> JobSummary {
        JobSummary {
            id: id.to_string(),
            title: format!("Job {}", id),
            ..JobSummary::default()
        }
    }

    #[test]
    fn empty_page_has_single_page() {
        let page = JobsPage::empty();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn from_response_clamps_page_and_truncates_items() {
        let items: Vec<_> = (0..12).map(|i| job(&i.to_string())).collect();
        let pagination = Pagination {
            current_page: 7,
            total_pages: 4,
            total_jobs: 36,
            has_next_page: true,
            has_prev_page: true,
        };
        let page = JobsPage::from_response(items, pagination, 9);
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.current_page, 4);
        assert!(!page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn zero_total_pages_becomes_one() {
        let page = JobsPage::from_response(Vec::new(), Pagination::default(), 9);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn salary_labels() {
        let mut summary = job("1");
        assert_eq!(summary.salary_label(), None);
        summary.salary_min = Some(300_000);
        summary.salary_max = Some(600_000);
        assert_eq!(summary.salary_label().as_deref(), Some("3.0 - 6.0 LPA"));
        summary.salary_max = None;
        assert_eq!(summary.salary_label().as_deref(), Some("3.0+ LPA"));
    }

    #[test]
    fn job_detail_reads_flattened_summary() {
        let detail: JobDetail = serde_json::from_str(
            r#"{"_id":"j1","title":"Electrician","type":"blue","salaryMin":300000,
                "description":"Wiring work","requirements":["ITI"],"openings":3}"#,
        )
        .unwrap();
        assert_eq!(detail.summary.id, "j1");
        assert_eq!(detail.summary.job_type, Some(JobType::Blue));
        assert_eq!(detail.summary.salary_min, Some(300_000));
        assert_eq!(detail.openings, Some(3));
    }
}
