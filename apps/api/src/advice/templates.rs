//! Rule-based advice. Pure string interpolation over the match result and inputs;
//! identical inputs always produce byte-identical output.

use serde::{Deserialize, Serialize};

use crate::matching::skills::SkillMatchResult;
use crate::models::{JobPosting, Profile};

const GENERIC_STACK_PHRASE: &str = "this stack";

/// Likely interview questions plus preparation tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewPrep {
    pub likely_questions: Vec<String>,
    pub preparation_tips: Vec<String>,
}

fn head(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn strong_points(profile: &Profile, job: &JobPosting, skills: &SkillMatchResult) -> Vec<String> {
    let mut points = Vec::new();

    if !skills.matched_required.is_empty() {
        points.push(format!(
            "You have {} of the required skills: {}",
            skills.matched_required.len(),
            head(&skills.matched_required, 3)
        ));
    }

    if profile.years_experience > job.experience_years {
        points.push(format!(
            "You have {} more years of experience than required ({} vs {} required)",
            profile.years_experience - job.experience_years,
            profile.years_experience,
            job.experience_years
        ));
    }

    if let Some(role) = relevant_previous_role(profile, job) {
        points.push(format!("Previous experience in similar role: {role}"));
    }

    points
}

/// First previous role containing the job title's first word, case-insensitively.
/// A blank title has no first word and never matches.
fn relevant_previous_role<'a>(profile: &'a Profile, job: &JobPosting) -> Option<&'a str> {
    let keyword = job.title.split_whitespace().next()?.to_lowercase();
    profile
        .previous_roles
        .iter()
        .find(|role| role.to_lowercase().contains(&keyword))
        .map(String::as_str)
}

pub fn improvement_areas(
    profile: &Profile,
    job: &JobPosting,
    skills: &SkillMatchResult,
) -> Vec<String> {
    let mut areas = Vec::new();

    if !skills.missing_required.is_empty() {
        areas.push(format!(
            "Learn these required skills to be a stronger candidate: {}",
            head(&skills.missing_required, 3)
        ));
    }

    if !skills.missing_preferred.is_empty() {
        areas.push(format!(
            "Consider learning these preferred skills: {}",
            head(&skills.missing_preferred, 2)
        ));
    }

    if profile.years_experience < job.experience_years {
        areas.push(format!(
            "You're {} years short of the experience requirement. \
             Highlight quick wins and learning ability in your cover letter.",
            job.experience_years - profile.years_experience
        ));
    }

    areas
}

pub fn talking_points(profile: &Profile, job: &JobPosting, skills: &SkillMatchResult) -> Vec<String> {
    let mut points = Vec::new();

    if !skills.matched_required.is_empty() {
        points.push(format!(
            "In your cover letter, emphasize your expertise in: {}",
            head(&skills.matched_required, 2)
        ));
    }

    points.push(format!(
        "Frame your current {} experience to show relevance to {}",
        profile.current_role, job.title
    ));
    points.push(format!(
        "Research {}'s recent projects - mention in interview how you can contribute",
        job.company
    ));

    points
}

pub fn interview_prep(profile: &Profile, job: &JobPosting, skills: &SkillMatchResult) -> InterviewPrep {
    let lead_skill = skills
        .matched_required
        .first()
        .map(String::as_str)
        .unwrap_or(GENERIC_STACK_PHRASE);

    let likely_questions = vec![
        format!("Tell us about your experience with {lead_skill}"),
        format!("Describe a challenging project in {}", profile.current_role),
        format!("Why are you interested in joining {}?", job.company),
    ];

    let gaps = skills.skill_gaps();
    let preparation_tips = match gaps.first() {
        None => vec![
            format!(
                "Prepare examples using STAR method for {}",
                head(&skills.matched_required, 2)
            ),
            "Prepare 2-3 questions about the role and team".to_string(),
            format!("Research {}'s recent news/product launches", job.company),
        ],
        Some(first_gap) => vec![
            format!("Be honest about learning {first_gap} - show willingness to learn"),
            "Prepare examples using STAR method for your strongest matched skills".to_string(),
            "Prepare 2-3 questions about the role and team".to_string(),
        ],
    };

    InterviewPrep {
        likely_questions,
        preparation_tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::skills::match_skills;

    fn profile() -> Profile {
        Profile {
            name: "John Smith".to_string(),
            current_role: "Senior Software Engineer".to_string(),
            years_experience: 6,
            skills: ["Python", "JavaScript", "React", "Node.js", "SQL", "Docker", "AWS"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            previous_roles: vec![
                "Software Engineer".to_string(),
                "Senior Developer".to_string(),
            ],
            education: "BS Computer Science".to_string(),
            certifications: vec!["AWS Solutions Architect".to_string()],
        }
    }

    fn job() -> JobPosting {
        JobPosting {
            title: "Senior Full Stack Engineer".to_string(),
            company: "TechCorp Inc".to_string(),
            description: "Looking for experienced full stack engineer".to_string(),
            required_skills: ["Python", "React", "Node.js", "SQL", "Docker"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            preferred_skills: ["AWS", "Kubernetes", "TypeScript"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            experience_years: 5,
            seniority_level: "Senior".to_string(),
        }
    }

    #[test]
    fn test_strong_points_full_set() {
        let (p, j) = (profile(), job());
        let points = strong_points(&p, &j, &match_skills(&p, &j));
        assert_eq!(
            points,
            vec![
                "You have 5 of the required skills: Python, React, Node.js",
                "You have 1 more years of experience than required (6 vs 5 required)",
                "Previous experience in similar role: Senior Developer",
            ]
        );
    }

    #[test]
    fn test_strong_points_skip_unmet_conditions() {
        let mut p = profile();
        p.skills.clear();
        p.years_experience = 5;
        p.previous_roles = vec!["Intern".to_string()];
        let j = job();
        assert!(strong_points(&p, &j, &match_skills(&p, &j)).is_empty());
    }

    #[test]
    fn test_blank_title_never_matches_previous_role() {
        let p = profile();
        let mut j = job();
        j.title = "   ".to_string();
        assert!(relevant_previous_role(&p, &j).is_none());
    }

    #[test]
    fn test_improvement_areas_caps_skill_lists() {
        let mut p = profile();
        p.skills.clear();
        p.years_experience = 2;
        let j = job();
        let areas = improvement_areas(&p, &j, &match_skills(&p, &j));
        assert_eq!(areas.len(), 3);
        assert_eq!(
            areas[0],
            "Learn these required skills to be a stronger candidate: Python, React, Node.js"
        );
        assert_eq!(areas[1], "Consider learning these preferred skills: AWS, Kubernetes");
        assert!(areas[2].starts_with("You're 3 years short of the experience requirement."));
    }

    #[test]
    fn test_improvement_areas_empty_when_fully_qualified() {
        let mut p = profile();
        p.skills.extend(["Kubernetes".to_string(), "TypeScript".to_string()]);
        let j = job();
        assert!(improvement_areas(&p, &j, &match_skills(&p, &j)).is_empty());
    }

    #[test]
    fn test_talking_points_always_include_role_and_company() {
        let mut p = profile();
        p.skills.clear();
        let j = job();
        let points = talking_points(&p, &j, &match_skills(&p, &j));
        assert_eq!(
            points,
            vec![
                "Frame your current Senior Software Engineer experience to show relevance to Senior Full Stack Engineer",
                "Research TechCorp Inc's recent projects - mention in interview how you can contribute",
            ]
        );
    }

    #[test]
    fn test_talking_points_emphasize_two_matched_skills() {
        let (p, j) = (profile(), job());
        let points = talking_points(&p, &j, &match_skills(&p, &j));
        assert_eq!(points.len(), 3);
        assert_eq!(
            points[0],
            "In your cover letter, emphasize your expertise in: Python, React"
        );
    }

    #[test]
    fn test_interview_prep_with_gaps() {
        let (p, j) = (profile(), job());
        let prep = interview_prep(&p, &j, &match_skills(&p, &j));
        assert_eq!(
            prep.likely_questions,
            vec![
                "Tell us about your experience with Python",
                "Describe a challenging project in Senior Software Engineer",
                "Why are you interested in joining TechCorp Inc?",
            ]
        );
        assert_eq!(
            prep.preparation_tips[0],
            "Be honest about learning Kubernetes - show willingness to learn"
        );
    }

    #[test]
    fn test_interview_prep_without_gaps() {
        let mut p = profile();
        p.skills.extend(["Kubernetes".to_string(), "TypeScript".to_string()]);
        let j = job();
        let prep = interview_prep(&p, &j, &match_skills(&p, &j));
        assert_eq!(
            prep.preparation_tips,
            vec![
                "Prepare examples using STAR method for Python, React",
                "Prepare 2-3 questions about the role and team",
                "Research TechCorp Inc's recent news/product launches",
            ]
        );
    }

    #[test]
    fn test_interview_prep_generic_phrase_when_nothing_matched() {
        let mut p = profile();
        p.skills.clear();
        let j = job();
        let prep = interview_prep(&p, &j, &match_skills(&p, &j));
        assert_eq!(
            prep.likely_questions[0],
            "Tell us about your experience with this stack"
        );
        assert_eq!(
            prep.preparation_tips[0],
            "Be honest about learning Python - show willingness to learn"
        );
    }
}
