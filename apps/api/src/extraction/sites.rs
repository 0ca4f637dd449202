//! Supported career sites and their selector fallback chains.
//!
//! Each field lists CSS selectors in priority order. The first selector that
//! resolves to an element with non-empty trimmed text wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSite {
    LinkedIn,
    Wellfound,
    Indeed,
}

impl JobSite {
    /// Display name stored in `JobRecord::source`.
    pub fn display_name(&self) -> &'static str {
        match self {
            JobSite::LinkedIn => "LinkedIn",
            JobSite::Wellfound => "Wellfound",
            JobSite::Indeed => "Indeed",
        }
    }
}

/// URL substrings that mark a job page, in match order.
pub const JOB_URL_PATTERNS: &[(&str, JobSite)] = &[
    ("linkedin.com/jobs/", JobSite::LinkedIn),
    ("wellfound.com/jobs/", JobSite::Wellfound),
    ("indeed.com/viewjob", JobSite::Indeed),
    ("indeed.com/job/", JobSite::Indeed),
];

/// Returns the site for a job page URL, or `None` if the URL is not on the allow-list.
pub fn detect_site(url: &str) -> Option<JobSite> {
    JOB_URL_PATTERNS
        .iter()
        .find(|(pattern, _)| url.contains(pattern))
        .map(|(_, site)| *site)
}

/// Ordered selector candidates per field for one site.
#[derive(Debug)]
pub struct ExtractionRules {
    pub title: &'static [&'static str],
    pub company: &'static [&'static str],
    pub location: &'static [&'static str],
    pub description: &'static [&'static str],
}

const LINKEDIN_RULES: ExtractionRules = ExtractionRules {
    title: &[
        ".job-details-jobs-unified-top-card__job-title",
        "[data-test-id=\"job-details-jobs-unified-top-card__job-title\"]",
        ".jobs-unified-top-card__job-title",
        "h1",
        ".jobs-unified-top-card__title",
    ],
    company: &[
        ".job-details-jobs-unified-top-card__company-name",
        "[data-test-id=\"job-details-jobs-unified-top-card__company-name\"]",
        ".jobs-unified-top-card__company-name",
        ".job-details-jobs-unified-top-card__subtitle-primary-grouping",
        ".jobs-unified-top-card__subtitle-primary-grouping a",
        ".jobs-unified-top-card__subtitle-primary-grouping span",
    ],
    location: &[
        ".job-details-jobs-unified-top-card__bullet",
        "[data-test-id=\"job-details-jobs-unified-top-card__bullet\"]",
        ".jobs-unified-top-card__bullet",
        ".jobs-unified-top-card__subtitle-primary-grouping .jobs-unified-top-card__bullet",
    ],
    description: &[
        ".jobs-description__content",
        "[data-test-id=\"job-details-jobs-unified-top-card__job-description\"]",
        ".jobs-box__html-content",
        ".jobs-description",
        ".jobs-box__html-content .jobs-description-content__text",
        ".jobs-description__content .jobs-box__html-content",
    ],
};

const WELLFOUND_RULES: ExtractionRules = ExtractionRules {
    title: &["h1", "[data-testid=\"job-title\"]"],
    company: &[
        "[data-testid=\"company-name\"]",
        ".company-name",
        "a[href*=\"/company/\"]",
    ],
    location: &["[data-testid=\"location\"]", ".location"],
    description: &[
        "[data-testid=\"job-description\"]",
        ".job-description",
        ".description",
    ],
};

const INDEED_RULES: ExtractionRules = ExtractionRules {
    title: &[
        "[data-testid=\"jobsearch-JobInfoHeader-title\"]",
        "h1",
        ".jobsearch-JobInfoHeader-title",
    ],
    company: &[
        "[data-testid=\"jobsearch-JobInfoHeader-companyName\"]",
        ".jobsearch-JobInfoHeader-companyName",
        "a[data-company-name]",
    ],
    location: &[
        "[data-testid=\"jobsearch-JobInfoHeader-locationText\"]",
        ".jobsearch-JobInfoHeader-locationText",
    ],
    description: &[
        "[data-testid=\"jobsearch-JobComponent-description\"]",
        ".jobsearch-JobComponent-description",
        "#jobDescriptionText",
    ],
};

pub fn rules_for(site: JobSite) -> &'static ExtractionRules {
    match site {
        JobSite::LinkedIn => &LINKEDIN_RULES,
        JobSite::Wellfound => &WELLFOUND_RULES,
        JobSite::Indeed => &INDEED_RULES,
    }
}
