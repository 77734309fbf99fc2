//! Analysis Orchestrator — one `AnalysisResult` per (profile, job) pair.
//!
//! Flow: match_skills → calculate_score → FitRating → advice writer → assemble.
//! With `TemplateAdviceWriter` the result is fully deterministic.
//! Batch analysis is repeated independent calls; ranking by score is a convenience.

pub mod handlers;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advice::insights::CareerInsights;
use crate::advice::templates::InterviewPrep;
use crate::advice::writer::{Advice, AdviceContext, AdviceWriter};
use crate::matching::scoring::{calculate_score, round_one_decimal, FitRating};
use crate::matching::skills::{match_skills, SkillMatchResult};
use crate::models::{JobPosting, Profile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// 0–100, rounded to one decimal.
    pub percentage: f64,
    pub rating: FitRating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub job_title: String,
    pub company: String,
    pub match_score: MatchScore,
    pub skill_analysis: SkillMatchResult,
    pub strong_points: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub cover_letter_tips: Vec<String>,
    pub interview_preparation: InterviewPrep,
    pub recommendation: String,
    pub advice_backend: String,
}

/// Runs analyses through whichever `AdviceWriter` it was built with.
#[derive(Clone)]
pub struct Analyzer {
    writer: Arc<dyn AdviceWriter>,
}

impl Analyzer {
    pub fn new(writer: Arc<dyn AdviceWriter>) -> Self {
        Self { writer }
    }

    pub fn backend(&self) -> &'static str {
        self.writer.backend()
    }

    pub async fn analyze(&self, profile: &Profile, job: &JobPosting) -> AnalysisResult {
        let skills = match_skills(profile, job);
        let score = calculate_score(&skills, profile.years_experience, job.experience_years);
        debug!(
            "Scored {} at {} for {}: {score:.1}",
            job.title, job.company, profile.name
        );

        let ctx = AdviceContext {
            profile,
            job,
            skills: &skills,
            score,
        };
        let advice = self.writer.write_advice(&ctx).await;

        assemble(job, skills, score, advice, self.writer.backend())
    }

    /// Analyses every job independently, best score first. Ties keep input order.
    pub async fn analyze_many(&self, profile: &Profile, jobs: &[JobPosting]) -> Vec<AnalysisResult> {
        let mut results = Vec::with_capacity(jobs.len());
        for job in jobs {
            results.push(self.analyze(profile, job).await);
        }
        rank_by_score(&mut results);
        results
    }

    pub async fn insights(&self, profile: &Profile, job: &JobPosting) -> CareerInsights {
        let skills = match_skills(profile, job);
        let score = calculate_score(&skills, profile.years_experience, job.experience_years);
        let ctx = AdviceContext {
            profile,
            job,
            skills: &skills,
            score,
        };
        self.writer.insights(&ctx).await
    }
}

fn assemble(
    job: &JobPosting,
    skills: SkillMatchResult,
    score: f64,
    advice: Advice,
    backend: &str,
) -> AnalysisResult {
    let rating = FitRating::from_score(score);
    AnalysisResult {
        job_title: job.title.clone(),
        company: job.company.clone(),
        match_score: MatchScore {
            percentage: round_one_decimal(score),
            rating,
        },
        skill_analysis: skills,
        strong_points: advice.strong_points,
        improvement_areas: advice.improvement_areas,
        cover_letter_tips: advice.talking_points,
        interview_preparation: advice.interview_prep,
        recommendation: rating.recommendation().to_string(),
        advice_backend: backend.to_string(),
    }
}

/// Sorts by descending percentage; stable, so equal scores keep their order.
pub fn rank_by_score(results: &mut [AnalysisResult]) {
    results.sort_by(|a, b| b.match_score.percentage.total_cmp(&a.match_score.percentage));
}
