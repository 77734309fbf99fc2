//! JD Parser — pulls a skill list and an experience-years estimate out of raw job text.
//!
//! Deterministic: fixed keyword vocabulary plus a single years pattern. No LLM call.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Years assumed when the text never states a requirement.
pub const DEFAULT_EXPERIENCE_YEARS: u32 = 3;

/// Skills recognised in free text. Matched as lowercase substrings.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "C++",
    "C#",
    "Go",
    "Rust",
    "PHP",
    "React",
    "Vue",
    "Angular",
    "Django",
    "Flask",
    "Spring",
    "FastAPI",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Elasticsearch",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Terraform",
    "Git",
    "CI/CD",
    "Jenkins",
    "GitHub Actions",
    "REST APIs",
    "GraphQL",
    "Microservices",
    "ML",
    "AI",
    "TensorFlow",
    "PyTorch",
];

static YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+?\s*years?").expect("years pattern is valid"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobText {
    /// Sorted, deduplicated.
    pub skills: Vec<String>,
    pub years: u32,
}

/// Scans job text for known skills and the first "N years" / "N+ years" mention.
pub fn parse_job_text(text: &str) -> ParsedJobText {
    let lowered = text.to_lowercase();

    let mut skills: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| lowered.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();
    skills.sort();
    skills.dedup();

    let years = YEARS_PATTERN
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(DEFAULT_EXPERIENCE_YEARS);

    ParsedJobText { skills, years }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_skills_and_years() {
        let parsed = parse_job_text("Looking for Python and JavaScript expert with 5+ years");
        assert_eq!(parsed.years, 5);
        assert!(parsed.skills.contains(&"Python".to_string()));
        assert!(parsed.skills.contains(&"JavaScript".to_string()));
        // "javascript" contains "java" — literal substring semantics
        assert!(parsed.skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_vocabulary_has_38_distinct_skills() {
        let distinct: std::collections::HashSet<_> = SKILL_VOCABULARY.iter().collect();
        assert_eq!(SKILL_VOCABULARY.len(), 38);
        assert_eq!(distinct.len(), 38);
    }

    #[test]
    fn test_defaults_years_when_absent() {
        let parsed = parse_job_text("DevOps engineer: Docker, Kubernetes, AWS, Terraform");
        assert_eq!(parsed.years, DEFAULT_EXPERIENCE_YEARS);
        for skill in ["Docker", "Kubernetes", "AWS", "Terraform"] {
            assert!(parsed.skills.contains(&skill.to_string()), "missing {skill}");
        }
    }

    #[test]
    fn test_singular_year_and_no_plus() {
        assert_eq!(parse_job_text("at least 1 year of Rust").years, 1);
        assert_eq!(parse_job_text("10 years in industry").years, 10);
    }

    #[test]
    fn test_first_years_mention_wins() {
        assert_eq!(parse_job_text("2 years Go, 7 years overall").years, 2);
    }

    #[test]
    fn test_output_is_sorted() {
        let parsed = parse_job_text("terraform, docker, aws");
        let mut sorted = parsed.skills.clone();
        sorted.sort();
        assert_eq!(parsed.skills, sorted);
    }

    #[test]
    fn test_empty_text() {
        let parsed = parse_job_text("");
        assert!(parsed.skills.is_empty());
        assert_eq!(parsed.years, DEFAULT_EXPERIENCE_YEARS);
    }
}
