//! Placeholder substitution, prompt assembly and offline drafting.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::models::job::JobRecord;
use crate::models::settings::Preferences;
use crate::outreach::prompts::{email_template, linkedin_dm_template, template_for};
use crate::summarizer::skills::extract_skills;

/// Characters of the job description sent to the model.
pub const PROMPT_DESCRIPTION_CHARS: usize = 1500;
pub const MAX_TALKING_POINTS: usize = 3;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder regex"));

/// Each pattern's first group is the kept text; anything after it is a
/// terminator that must follow but is not part of the point.
static TALKING_POINT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(we are working on .*?)[.,;]",
        r"(?i)(our .*? platform)",
        r"(?i)(we're building .*?)[.,;]",
        r"(?i)(our mission is to .*?)[.,;]",
        r"(?i)(using .*?)(?:[.,;]|to|for)",
        r"(?i)(built with .*?)[.,;]",
        r"(?i)(technology stack includes .*?)[.,;]",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("talking point regex"))
    .collect()
});

static ACHIEVEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)increased .*? by .*?",
        r"(?i)improved .*? by .*?",
        r"(?i)led .*? team",
        r"(?i)managed .*? project",
        r"(?i)developed .*? solution",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("achievement regex"))
    .collect()
});

const GENERIC_ACHIEVEMENT: &str = "I am confident that my technical skills and collaborative approach would make me a valuable addition to your team.";

/// Replaces `{key}` placeholders with non-empty values from `values`.
/// Placeholders without a value are left untouched.
pub fn fill_template(template: &str, values: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// User message for the model, in the template selected by the preferred tone.
pub fn build_prompt(job: &JobRecord, resume: &str, prefs: &Preferences) -> String {
    let resume = if resume.trim().is_empty() {
        "Not provided"
    } else {
        resume
    };

    let values = HashMap::from([
        ("title", job.title.clone()),
        ("company", job.company.clone()),
        ("location", job.location_or_unspecified().to_string()),
        ("description", job.description_excerpt(PROMPT_DESCRIPTION_CHARS)),
        ("resume", resume.to_string()),
        ("maxLength", prefs.max_message_length.to_string()),
        (
            "includeSalary",
            if prefs.include_salary { "Yes" } else { "No" }.to_string(),
        ),
    ]);

    fill_template(template_for(prefs.tone), &values)
}

/// Project and technology mentions from the description, pattern order, at most three.
pub fn extract_talking_points(description: &str) -> Vec<String> {
    let mut points = Vec::new();
    for pattern in TALKING_POINT_PATTERNS.iter() {
        let mut pos = 0;
        while let Some(caps) = pattern.captures_at(description, pos) {
            let Some(point) = caps.get(1) else { break };
            points.push(point.as_str().to_string());
            // Resume before the terminator; it is not part of the point.
            pos = point.end();
        }
    }
    points.truncate(MAX_TALKING_POINTS);
    points
}

pub fn company_paragraph(talking_points: &[String], company: &str) -> String {
    match talking_points.first() {
        Some(point) => format!(
            "I am particularly excited about {company}'s work on {}. This aligns perfectly with my interests and experience, and I would love to contribute to such innovative initiatives.",
            point.to_lowercase()
        ),
        None => format!(
            "I am particularly drawn to {company}'s innovative approach and the opportunity to work on cutting-edge projects."
        ),
    }
}

pub fn extract_achievements(resume: &str) -> Vec<String> {
    ACHIEVEMENT_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(resume).map(|m| m.as_str().to_string()))
        .collect()
}

pub fn achievement_paragraph(resume: &str) -> String {
    if resume.trim().is_empty() {
        return GENERIC_ACHIEVEMENT.to_string();
    }

    match extract_achievements(resume).first() {
        Some(achievement) => format!(
            "In my previous roles, I have successfully {}, demonstrating my ability to deliver results and drive positive outcomes.",
            achievement.to_lowercase()
        ),
        None => GENERIC_ACHIEVEMENT.to_string(),
    }
}

fn nth_or_empty(items: &[String], i: usize) -> String {
    items.get(i).cloned().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDraft {
    pub linkedin_message: String,
    pub email: String,
}

/// Drafts a DM and an email without calling the model.
///
/// Personal placeholders (`{name}`, `{recruiter_name}`, `{hiring_manager}`,
/// `{phone}`, `{email}`) are left for the user to fill in, as is any slot the
/// posting or resume had nothing for.
pub fn draft_locally(job: &JobRecord, resume: &str, prefs: &Preferences) -> LocalDraft {
    let skills = extract_skills(&job.description);
    let talking_points = extract_talking_points(&job.description);
    let achievements = extract_achievements(resume);

    let values = HashMap::from([
        ("title", job.title.clone()),
        ("company", job.company.clone()),
        ("key_skill_1", nth_or_empty(&skills, 0)),
        ("key_skill_2", nth_or_empty(&skills, 1)),
        (
            "company_specific_point",
            talking_points
                .first()
                .map(|p| p.to_lowercase())
                .unwrap_or_default(),
        ),
        (
            "company_specific_paragraph",
            company_paragraph(&talking_points, &job.company),
        ),
        ("achievement_paragraph", achievement_paragraph(resume)),
        ("relevant_experience_1", nth_or_empty(&achievements, 0).to_lowercase()),
        ("relevant_experience_2", nth_or_empty(&achievements, 1).to_lowercase()),
    ]);

    LocalDraft {
        linkedin_message: fill_template(linkedin_dm_template(prefs.tone), &values),
        email: fill_template(email_template(prefs.tone), &values),
    }
}
