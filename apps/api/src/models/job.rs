use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::jd_parser::parse_job_text;

/// A job posting as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub experience_years: u32,
    #[serde(default)]
    pub seniority_level: String,
}

impl JobPosting {
    /// Builds a posting from free text: required skills and the experience
    /// requirement come from the keyword/years scan, preferred skills stay empty.
    pub fn from_description(title: &str, company: &str, seniority_level: &str, text: &str) -> Self {
        let parsed = parse_job_text(text);
        Self {
            title: title.to_string(),
            company: company.to_string(),
            description: text.to_string(),
            required_skills: parsed.skills,
            preferred_skills: Vec::new(),
            experience_years: parsed.years,
            seniority_level: seniority_level.to_string(),
        }
    }

    /// Union of required and preferred skills, deduplicated case-sensitively,
    /// first occurrence wins.
    pub fn all_skills(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.required_skills
            .iter()
            .chain(self.preferred_skills.iter())
            .filter(|s| seen.insert(s.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_skills_dedups_case_sensitively() {
        let job = JobPosting {
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            preferred_skills: vec!["SQL".to_string(), "sql".to_string(), "AWS".to_string()],
            ..Default::default()
        };
        assert_eq!(job.all_skills(), vec!["Python", "SQL", "sql", "AWS"]);
    }

    #[test]
    fn test_from_description_uses_parsed_skills_and_years() {
        let job = JobPosting::from_description(
            "Backend Engineer",
            "Acme",
            "Mid",
            "We need Rust and PostgreSQL, 4+ years in production systems.",
        );
        assert_eq!(job.experience_years, 4);
        assert!(job.required_skills.contains(&"Rust".to_string()));
        assert!(job.required_skills.contains(&"PostgreSQL".to_string()));
        assert!(job.preferred_skills.is_empty());
        assert_eq!(job.company, "Acme");
    }
}
