//! Company hints: industry words, size phrases and organisation type.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const INDUSTRIES: &[&str] = &[
    "technology", "software", "fintech", "healthcare", "ecommerce", "education", "finance",
    "banking", "insurance", "real estate", "media", "entertainment", "gaming", "automotive",
    "aerospace", "manufacturing", "retail", "consulting", "marketing", "advertising",
    "telecommunications", "energy", "biotechnology", "pharmaceuticals", "non-profit",
    "government", "startup", "enterprise",
];

const COMPANY_TYPES: &[(&str, &str)] = &[
    ("startup", "Startup"),
    ("enterprise", "Enterprise"),
    ("agency", "Agency"),
    ("consulting", "Consulting"),
    ("non-profit", "Non-profit"),
    ("government", "Government"),
];

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid regex"));

static SIZE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\d+[\s-]+employees?",
        r"(?i)startup",
        r"(?i)small[\s-]+team",
        r"(?i)large[\s-]+company",
        r"(?i)fortune[\s-]+500",
        r"(?i)unicorn",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub industry: Vec<String>,
    pub size: Vec<String>,
    #[serde(rename = "type")]
    pub company_type: Vec<String>,
}

/// Up to three industries, matched with the same loose containment as skills.
pub fn extract_industry(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();
    let words: Vec<&str> = WORD.find_iter(&lower).map(|m| m.as_str()).collect();

    INDUSTRIES
        .iter()
        .filter(|industry| {
            words
                .iter()
                .any(|word| word.contains(**industry) || industry.contains(word))
        })
        .take(3)
        .map(|s| s.to_string())
        .collect()
}

pub fn extract_company_size(description: &str) -> Vec<String> {
    SIZE_PATTERNS
        .iter()
        .flat_map(|p| p.find_iter(description).map(|m| m.as_str().to_string()))
        .collect()
}

pub fn extract_company_type(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();
    COMPANY_TYPES
        .iter()
        .filter(|(needle, _)| lower.contains(needle))
        .map(|(_, label)| label.to_string())
        .collect()
}

pub fn extract_company_info(description: &str) -> CompanyInfo {
    CompanyInfo {
        industry: extract_industry(description),
        size: extract_company_size(description),
        company_type: extract_company_type(description),
    }
}
