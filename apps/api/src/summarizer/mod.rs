// Lexical job-description summarizer: vocabulary skills, labeled sections,
// salary/experience hints and company hints. No ranking beyond match order.

pub mod company;
pub mod handlers;
pub mod sections;
pub mod skills;

use serde::{Deserialize, Serialize};

use crate::models::job::JobRecord;
use crate::summarizer::company::{extract_company_info, CompanyInfo};
use crate::summarizer::sections::{
    extract_benefits, extract_experience_level, extract_requirements, extract_responsibilities,
    extract_salary_info,
};
use crate::summarizer::skills::extract_skills;

/// Snippets kept per section category.
pub const TOP_SNIPPETS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub title: String,
    pub company: String,
    pub location: String,
    pub key_skills: Vec<String>,
    /// First experience phrase found, or "Not specified".
    pub experience_level: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub salary: Vec<String>,
    pub company_info: CompanyInfo,
}

fn top(mut items: Vec<String>) -> Vec<String> {
    items.truncate(TOP_SNIPPETS);
    items
}

pub fn summarize_job(job: &JobRecord) -> JobSummary {
    let description = job.description.as_str();

    JobSummary {
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        key_skills: extract_skills(description),
        experience_level: extract_experience_level(description)
            .into_iter()
            .next()
            .unwrap_or_else(|| "Not specified".to_string()),
        requirements: top(extract_requirements(description)),
        responsibilities: top(extract_responsibilities(description)),
        benefits: top(extract_benefits(description)),
        salary: top(extract_salary_info(description)),
        company_info: extract_company_info(description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: &str = "Senior level backend role at a fintech startup.\n\n\
        Requirements: 5+ years experience, React, Node.js\n\n\
        Responsibilities: design APIs\n\n\
        Benefits: equity\n\
        Perks: snacks\n\
        Compensation: $140k - $180k\n\
        What we offer: remote\n\
        Benefits: gym";

    fn job() -> JobRecord {
        JobRecord {
            title: "Backend Engineer".to_string(),
            company: "Ledger".to_string(),
            location: "Remote".to_string(),
            description: DESCRIPTION.to_string(),
            url: "https://wellfound.com/jobs/1".to_string(),
            source: "Wellfound".to_string(),
        }
    }

    #[test]
    fn test_summary_fields() {
        let summary = summarize_job(&job());
        assert_eq!(summary.title, "Backend Engineer");
        assert_eq!(summary.experience_level, "Senior level");
        assert_eq!(
            summary.requirements,
            vec!["5+ years experience, React, Node.js".to_string()]
        );
        assert_eq!(summary.responsibilities, vec!["design APIs".to_string()]);
        assert!(summary.key_skills.contains(&"react".to_string()));
        assert!(summary.salary.iter().any(|s| s.contains("$140k")));
        assert!(summary.company_info.company_type.contains(&"Startup".to_string()));
    }

    #[test]
    fn test_benefits_capped_at_three() {
        let summary = summarize_job(&job());
        assert_eq!(summary.benefits.len(), TOP_SNIPPETS);
        assert_eq!(summary.benefits[0], "equity");
        assert_eq!(summary.benefits[1], "gym");
    }

    #[test]
    fn test_experience_defaults_to_not_specified() {
        let mut job = job();
        job.description = "Write code.".to_string();
        assert_eq!(summarize_job(&job).experience_level, "Not specified");
    }
}
