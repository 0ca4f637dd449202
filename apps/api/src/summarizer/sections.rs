//! Labeled-section snippets and salary/experience hints.
//!
//! A section snippet is the rest of the line following a label such as
//! `Requirements:`. It only counts when the line is followed by a blank line,
//! a line starting with a letter, or the end of the text; bulleted lists
//! under a bare heading therefore yield nothing. Matching is lexical only.

use std::sync::LazyLock;

use regex::Regex;

fn label_patterns(labels: &[&str]) -> Vec<Regex> {
    labels
        .iter()
        .map(|label| Regex::new(&format!(r"(?i){label}[:\s]+")).expect("valid regex"))
        .collect()
}

static REQUIREMENT_LABELS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    label_patterns(&[
        "requirements?",
        "qualifications?",
        "what you'll need",
        "you should have",
        "minimum requirements?",
    ])
});

static RESPONSIBILITY_LABELS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    label_patterns(&[
        "responsibilities?",
        "what you'll do",
        "key responsibilities?",
        "duties?",
    ])
});

static BENEFIT_LABELS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    label_patterns(&["benefits?", "perks?", "what we offer", "compensation"])
});

static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\d+[\s-]+years?[\s-]+experience",
        r"(?i)senior[\s-]+level",
        r"(?i)junior[\s-]+level",
        r"(?i)entry[\s-]+level",
        r"(?i)mid[\s-]+level",
        r"(?i)lead[\s-]+developer",
        r"(?i)principal[\s-]+engineer",
        r"(?i)staff[\s-]+engineer",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

const AMOUNT: &str = r"\d{1,3}(?:,\d{3})*(?:k|K)?";

static SALARY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(r"\${AMOUNT}[\s-]+(?:\${AMOUNT})?"),
        format!(r"{AMOUNT}[\s-]+{AMOUNT}[\s-]+usd"),
        format!(r"(?i)salary[\s-]+range[\s-]+\${AMOUNT}[\s-]+\${AMOUNT}"),
        format!(r"(?i)compensation[\s-]+\${AMOUNT}[\s-]+\${AMOUNT}"),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Whether a section line ending at byte `end` is properly terminated.
fn line_terminated(text: &str, end: usize) -> bool {
    let rest = &text[end..];
    if rest.is_empty() {
        return true;
    }
    let mut chars = rest.chars();
    chars.next() == Some('\n')
        && matches!(chars.next(), Some(c) if c == '\n' || c.is_ascii_alphabetic())
}

/// Snippets for every occurrence of `label`, in text order.
fn label_snippets(text: &str, label: &Regex) -> Vec<String> {
    let mut snippets = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(m) = label.find_at(text, pos) else {
            break;
        };

        let line_end = text[m.end()..]
            .find('\n')
            .map(|i| m.end() + i)
            .unwrap_or(text.len());

        if line_terminated(text, line_end) {
            let snippet = text[m.end()..line_end].trim();
            if !snippet.is_empty() {
                snippets.push(snippet.to_string());
            }
            pos = line_end;
        } else {
            // Retry just past the start of this label occurrence.
            pos = m.start()
                + text[m.start()..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
        }
    }

    snippets
}

fn collect_sections(text: &str, labels: &[Regex]) -> Vec<String> {
    labels
        .iter()
        .flat_map(|label| label_snippets(text, label))
        .collect()
}

fn collect_matches(text: &str, patterns: &[Regex]) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|p| p.find_iter(text).map(|m| m.as_str().trim().to_string()))
        .collect()
}

pub fn extract_requirements(description: &str) -> Vec<String> {
    collect_sections(description, &REQUIREMENT_LABELS)
}

pub fn extract_responsibilities(description: &str) -> Vec<String> {
    collect_sections(description, &RESPONSIBILITY_LABELS)
}

pub fn extract_benefits(description: &str) -> Vec<String> {
    collect_sections(description, &BENEFIT_LABELS)
}

/// Seniority phrases such as "3 years experience" or "senior level".
pub fn extract_experience_level(description: &str) -> Vec<String> {
    collect_matches(description, &EXPERIENCE_PATTERNS)
}

/// Salary figures and ranges such as "$120k - $150k".
pub fn extract_salary_info(description: &str) -> Vec<String> {
    collect_matches(description, &SALARY_PATTERNS)
}
