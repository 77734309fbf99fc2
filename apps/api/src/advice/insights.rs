//! Career insights beyond the core advice lists: cover-letter opening, fit narrative,
//! learning roadmap, salary negotiation tips and a company research brief. These are the template versions;
//! the LLM-backed writer substitutes them when a provider answers.

use serde::{Deserialize, Serialize};

use crate::matching::scoring::FitRating;

pub const DEFAULT_ROADMAP_PRIORITY: &str = "high";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub roadmap: String,
    pub skills: Vec<String>,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerInsights {
    pub cover_letter_opening: String,
    pub fit_narrative: String,
    pub learning_roadmap: LearningRoadmap,
    pub salary_tips: Vec<String>,
    pub company_research_brief: String,
}

pub fn cover_letter_opening(job_title: &str, company: &str) -> String {
    format!(
        "I am excited to apply for the {job_title} position at {company}. \
         With my professional background and passion for this role, \
         I am confident I can make a meaningful contribution to your team."
    )
}

pub fn fit_narrative(score: f64) -> String {
    match FitRating::from_score(score) {
        FitRating::Excellent => "You're an excellent fit for this role. Your skills strongly align \
            with the requirements, and you should apply with confidence.",
        FitRating::Good => "You're a good fit for this role with strong alignment on key skills. \
            Consider addressing the noted skill gaps to be even more competitive.",
        FitRating::Possible => "There's potential here, but you may want to develop some key skills \
            first. The role is achievable with focused learning.",
        FitRating::Challenging => "This role requires different skill focus. Consider roles more \
            aligned with your current profile, or invest time in learning the required skills.",
    }
    .to_string()
}

pub fn learning_roadmap(skills: &[String]) -> LearningRoadmap {
    LearningRoadmap {
        roadmap: format!(
            "Focus on learning: {}. Break each skill into achievable milestones. \
             Start with fundamentals, then practice with projects.",
            skills.join(", ")
        ),
        skills: skills.to_vec(),
        priority: DEFAULT_ROADMAP_PRIORITY.to_string(),
    }
}

pub fn salary_tips() -> Vec<String> {
    [
        "Research market rates for your role on Glassdoor, Levels.fyi, and Payscale",
        "Wait until they ask about salary - let them anchor first",
        "Justify your ask with specific achievements and market data",
        "Negotiate other benefits: PTO, remote work, signing bonus, stock options",
        "Don't accept the first offer - professional negotiations are expected",
    ]
    .iter()
    .map(|tip| tip.to_string())
    .collect()
}

pub fn company_research_brief(company: &str) -> String {
    format!("Research {company}'s recent news and product launches")
}
