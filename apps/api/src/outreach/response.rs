//! Post-processing of the model's reply into display sections.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+").expect("numbered item regex"));

/// The reply as shown to the user.
///
/// The text is split at every `<digits>. ` marker, including markers inside a
/// section, so a reply whose DM contains its own numbered list is misaligned.
/// Fewer than three non-blank pieces falls back to the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum RenderedOutreach {
    #[serde(rename_all = "camelCase")]
    Sections {
        job_summary: String,
        linked_in_message: String,
        email_cover_letter: String,
    },
    Raw { text: String },
}

pub fn parse_outreach(text: &str) -> RenderedOutreach {
    let sections: Vec<&str> = NUMBERED_ITEM
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    match sections.as_slice() {
        [summary, dm, email, ..] => RenderedOutreach::Sections {
            job_summary: summary.to_string(),
            linked_in_message: dm.to_string(),
            email_cover_letter: email.to_string(),
        },
        _ => RenderedOutreach::Raw {
            text: text.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_sections() {
        let rendered = parse_outreach("1. Summary here\n2. Hi there\n3. Dear team");
        assert_eq!(
            rendered,
            RenderedOutreach::Sections {
                job_summary: "Summary here".to_string(),
                linked_in_message: "Hi there".to_string(),
                email_cover_letter: "Dear team".to_string(),
            }
        );
    }

    #[test]
    fn test_fewer_than_three_is_raw() {
        let text = "1. Only a summary\n2. And a DM";
        assert_eq!(
            parse_outreach(text),
            RenderedOutreach::Raw {
                text: text.to_string()
            }
        );
    }

    #[test]
    fn test_leading_text_counts_as_a_section() {
        let rendered = parse_outreach("Here you go:\n1. Summary\n2. DM\n3. Email");
        let RenderedOutreach::Sections {
            job_summary,
            email_cover_letter,
            ..
        } = rendered
        else {
            panic!("expected sections");
        };
        assert_eq!(job_summary, "Here you go:");
        assert_eq!(email_cover_letter, "DM");
    }

    #[test]
    fn test_embedded_list_shifts_sections() {
        let rendered = parse_outreach(
            "1. Summary\n2. Hi! I offer:\n1. Rust\n2. Go\n3. Email body",
        );
        let RenderedOutreach::Sections {
            linked_in_message,
            email_cover_letter,
            ..
        } = rendered
        else {
            panic!("expected sections");
        };
        assert_eq!(linked_in_message, "Hi! I offer:");
        assert_eq!(email_cover_letter, "Rust");
    }

    #[test]
    fn test_serialized_layout_tag() {
        let value = serde_json::to_value(parse_outreach("no list at all")).unwrap();
        assert_eq!(value["layout"], "raw");
        assert_eq!(value["text"], "no list at all");

        let value = serde_json::to_value(parse_outreach("1. a 2. b 3. c")).unwrap();
        assert_eq!(value["layout"], "sections");
        assert_eq!(value["linkedInMessage"], "b");
    }
}
