//! Skill Matcher — partitions a job's skill lists against a profile's skills.
//!
//! Identity is literal, case-insensitive equality. Duplicates inside a job list are
//! kept: every entry of `required_skills` / `preferred_skills` lands in exactly one
//! bucket, in input order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{JobPosting, Profile};

/// The four-bucket partition of a job's skills for one analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub matched_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub missing_required: Vec<String>,
    pub missing_preferred: Vec<String>,
}

impl SkillMatchResult {
    pub fn required_total(&self) -> usize {
        self.matched_required.len() + self.missing_required.len()
    }

    /// Missing required followed by missing preferred.
    pub fn skill_gaps(&self) -> Vec<&str> {
        self.missing_required
            .iter()
            .chain(self.missing_preferred.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn has_gaps(&self) -> bool {
        !self.missing_required.is_empty() || !self.missing_preferred.is_empty()
    }
}

/// Matches the profile's skills against the job's required and preferred lists.
pub fn match_skills(profile: &Profile, job: &JobPosting) -> SkillMatchResult {
    let owned: HashSet<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched_required, missing_required) = partition(&job.required_skills, &owned);
    let (matched_preferred, missing_preferred) = partition(&job.preferred_skills, &owned);

    SkillMatchResult {
        matched_required,
        matched_preferred,
        missing_required,
        missing_preferred,
    }
}

fn partition(skills: &[String], owned: &HashSet<String>) -> (Vec<String>, Vec<String>) {
    skills
        .iter()
        .cloned()
        .partition(|skill| owned.contains(&skill.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile_with(skills: &[&str]) -> Profile {
        Profile {
            name: "Test User".to_string(),
            current_role: "Developer".to_string(),
            years_experience: 5,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn job_with(required: &[&str], preferred: &[&str]) -> JobPosting {
        JobPosting {
            title: "Senior Python Developer".to_string(),
            company: "TestCorp".to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            experience_years: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let result = match_skills(&profile_with(&["Python"]), &job_with(&["python"], &[]));
        assert_eq!(result.matched_required, vec!["python"]);
        assert!(result.missing_required.is_empty());
    }

    #[test]
    fn test_buckets_keep_job_casing_and_order() {
        let result = match_skills(
            &profile_with(&["python", "react", "docker"]),
            &job_with(&["Python", "JavaScript", "React"], &["Docker", "Kubernetes"]),
        );
        assert_eq!(result.matched_required, vec!["Python", "React"]);
        assert_eq!(result.missing_required, vec!["JavaScript"]);
        assert_eq!(result.matched_preferred, vec!["Docker"]);
        assert_eq!(result.missing_preferred, vec!["Kubernetes"]);
    }

    #[test]
    fn test_duplicate_job_skills_are_not_deduplicated() {
        let result = match_skills(&profile_with(&["SQL"]), &job_with(&["SQL", "sql"], &["Go", "Go"]));
        assert_eq!(result.matched_required, vec!["SQL", "sql"]);
        assert_eq!(result.missing_preferred, vec!["Go", "Go"]);
    }

    #[test]
    fn test_empty_lists_produce_empty_buckets() {
        let result = match_skills(&profile_with(&[]), &job_with(&[], &[]));
        assert_eq!(result, SkillMatchResult::default());
        assert_eq!(result.required_total(), 0);
        assert!(!result.has_gaps());
    }

    #[test]
    fn test_skill_gaps_lists_required_before_preferred() {
        let result = match_skills(&profile_with(&[]), &job_with(&["Rust"], &["Kafka"]));
        assert_eq!(result.skill_gaps(), vec!["Rust", "Kafka"]);
        assert!(result.has_gaps());
    }

    proptest! {
        #[test]
        fn prop_every_job_skill_lands_in_exactly_one_bucket(
            owned in prop::collection::vec("[a-dA-D]{1,2}", 0..6),
            required in prop::collection::vec("[a-dA-D]{1,2}", 0..6),
            preferred in prop::collection::vec("[a-dA-D]{1,2}", 0..6),
        ) {
            let profile = Profile { skills: owned, ..Default::default() };
            let job = JobPosting {
                required_skills: required.clone(),
                preferred_skills: preferred.clone(),
                ..Default::default()
            };
            let result = match_skills(&profile, &job);

            prop_assert_eq!(
                result.matched_required.len() + result.missing_required.len(),
                required.len()
            );
            prop_assert_eq!(
                result.matched_preferred.len() + result.missing_preferred.len(),
                preferred.len()
            );

            let mut required_seen = result.matched_required.clone();
            required_seen.extend(result.missing_required.iter().cloned());
            required_seen.sort();
            let mut required_sorted = required;
            required_sorted.sort();
            prop_assert_eq!(required_seen, required_sorted);
        }
    }
}
