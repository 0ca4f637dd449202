use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::extraction::sites::{detect_site, rules_for, JobSite};
use crate::extraction::ExtractionError;
use crate::models::job::JobRecord;

/// Parses `html` and extracts a job record for the page at `url`.
pub fn extract_from_html(html: &str, url: &str) -> Result<JobRecord, ExtractionError> {
    let site = detect_site(url).ok_or_else(|| ExtractionError::UnsupportedSite(url.to_string()))?;
    let document = Html::parse_document(html);
    extract_job(&document, site, url)
}

/// Runs the site's fallback chains against an already parsed document.
///
/// Title, company and description are required; location defaults to "".
pub fn extract_job(document: &Html, site: JobSite, url: &str) -> Result<JobRecord, ExtractionError> {
    let rules = rules_for(site);

    let title = first_text(document, rules.title).ok_or(ExtractionError::MissingField("title"))?;
    let company =
        first_text(document, rules.company).ok_or(ExtractionError::MissingField("company"))?;
    let description = first_text(document, rules.description)
        .ok_or(ExtractionError::MissingField("description"))?;
    let location = first_text(document, rules.location).unwrap_or_default();

    debug!(
        "Extracted {} job: {} at {} ({} description chars)",
        site.display_name(),
        title,
        company,
        description.chars().count()
    );

    Ok(JobRecord {
        title,
        company,
        location,
        description,
        url: url.to_string(),
        source: site.display_name().to_string(),
    })
}

/// Returns the trimmed text of the first candidate that resolves to non-empty text.
fn first_text(document: &Html, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        let selector = match Selector::parse(candidate) {
            Ok(s) => s,
            Err(e) => {
                warn!("Skipping invalid selector {candidate}: {e:?}");
                continue;
            }
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<String>();
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKEDIN_URL: &str = "https://www.linkedin.com/jobs/view/3791";
    const WELLFOUND_URL: &str = "https://wellfound.com/jobs/2841-backend-engineer";
    const INDEED_VIEWJOB_URL: &str = "https://www.indeed.com/viewjob?jk=abc123";
    const INDEED_JOB_URL: &str = "https://www.indeed.com/job/rust-developer-9f2";

    const LINKEDIN_PRIMARY: &str = r#"
        <html><body>
          <h1 class="job-details-jobs-unified-top-card__job-title"> Senior Rust Engineer </h1>
          <div class="job-details-jobs-unified-top-card__company-name">Ferrous Systems</div>
          <span class="job-details-jobs-unified-top-card__bullet">Berlin, Germany</span>
          <div class="jobs-description__content">Requirements: 5+ years experience, Rust, Tokio

About us: we ship compilers.</div>
        </body></html>"#;

    const LINKEDIN_FALLBACK: &str = r#"
        <html><body>
          <div class="jobs-unified-top-card__title">Platform Engineer</div>
          <div class="jobs-unified-top-card__subtitle-primary-grouping">
            <a href="/company/acme">Acme Corp</a>
          </div>
          <div class="jobs-box__html-content">Build the platform.</div>
        </body></html>"#;

    const WELLFOUND_PRIMARY: &str = r#"
        <html><body>
          <h1>Founding Engineer</h1>
          <div data-testid="company-name">Tiny Startup</div>
          <div data-testid="location">Remote</div>
          <div data-testid="job-description">Own the backend end to end.</div>
        </body></html>"#;

    const WELLFOUND_FALLBACK: &str = r#"
        <html><body>
          <span data-testid="job-title">Data Engineer</span>
          <a href="https://wellfound.com/company/pipes">Pipes Inc</a>
          <section class="description">Move data from here to there.</section>
        </body></html>"#;

    const INDEED_PRIMARY: &str = r#"
        <html><body>
          <h2 data-testid="jobsearch-JobInfoHeader-title">Backend Developer</h2>
          <div data-testid="jobsearch-JobInfoHeader-companyName">Widgets LLC</div>
          <div data-testid="jobsearch-JobInfoHeader-locationText">Austin, TX</div>
          <div data-testid="jobsearch-JobComponent-description">Write services in Go and Rust.</div>
        </body></html>"#;

    const INDEED_FALLBACK: &str = r#"
        <html><body>
          <h1>QA Analyst</h1>
          <a data-company-name="true">Quality Co</a>
          <div id="jobDescriptionText">Test all the things.</div>
        </body></html>"#;

    fn assert_complete(job: &JobRecord) {
        assert!(!job.title.is_empty());
        assert!(!job.company.is_empty());
        assert!(!job.description.is_empty());
    }

    #[test]
    fn test_primary_selectors_for_all_site_identifiers() {
        let cases = [
            (LINKEDIN_URL, LINKEDIN_PRIMARY, "LinkedIn"),
            (WELLFOUND_URL, WELLFOUND_PRIMARY, "Wellfound"),
            (INDEED_VIEWJOB_URL, INDEED_PRIMARY, "Indeed"),
            (INDEED_JOB_URL, INDEED_PRIMARY, "Indeed"),
        ];
        for (url, html, source) in cases {
            let job = extract_from_html(html, url).unwrap();
            assert_complete(&job);
            assert!(!job.location.is_empty(), "{url} should resolve a location");
            assert_eq!(job.source, source);
            assert_eq!(job.url, url);
        }
    }

    #[test]
    fn test_fallback_selectors_for_all_site_identifiers() {
        let cases = [
            (LINKEDIN_URL, LINKEDIN_FALLBACK),
            (WELLFOUND_URL, WELLFOUND_FALLBACK),
            (INDEED_VIEWJOB_URL, INDEED_FALLBACK),
            (INDEED_JOB_URL, INDEED_FALLBACK),
        ];
        for (url, html) in cases {
            let job = extract_from_html(html, url).unwrap();
            assert_complete(&job);
        }
    }

    #[test]
    fn test_linkedin_primary_values_are_trimmed() {
        let job = extract_from_html(LINKEDIN_PRIMARY, LINKEDIN_URL).unwrap();
        assert_eq!(job.title, "Senior Rust Engineer");
        assert_eq!(job.company, "Ferrous Systems");
        assert_eq!(job.location, "Berlin, Germany");
        // Line breaks inside the description survive for the section extractors.
        assert!(job.description.contains("Tokio\n\nAbout us"));
    }

    #[test]
    fn test_fallback_values() {
        let job = extract_from_html(LINKEDIN_FALLBACK, LINKEDIN_URL).unwrap();
        assert_eq!(job.title, "Platform Engineer");
        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.location, "");

        let job = extract_from_html(WELLFOUND_FALLBACK, WELLFOUND_URL).unwrap();
        assert_eq!(job.title, "Data Engineer");
        assert_eq!(job.company, "Pipes Inc");
        assert_eq!(job.description, "Move data from here to there.");
    }

    #[test]
    fn test_empty_primary_falls_through_to_next_candidate() {
        let html = r#"
            <div data-testid="jobsearch-JobInfoHeader-title">   </div>
            <h1>Site Reliability Engineer</h1>
            <div class="jobsearch-JobInfoHeader-companyName">Uptime Inc</div>
            <div class="jobsearch-JobComponent-description">Keep it up.</div>"#;
        let job = extract_from_html(html, INDEED_VIEWJOB_URL).unwrap();
        assert_eq!(job.title, "Site Reliability Engineer");
    }

    #[test]
    fn test_missing_company_fails_extraction() {
        let html = r#"<h1>Engineer</h1><div id="jobDescriptionText">Text</div>"#;
        let err = extract_from_html(html, INDEED_JOB_URL).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField("company")));
    }

    #[test]
    fn test_missing_description_fails_extraction() {
        let html = r#"<h1>Engineer</h1><div data-testid="company-name">Co</div>"#;
        let err = extract_from_html(html, WELLFOUND_URL).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField("description")));
    }

    #[test]
    fn test_unsupported_url_is_rejected() {
        let err = extract_from_html(WELLFOUND_PRIMARY, "https://example.com/careers").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedSite(_)));
    }
}
