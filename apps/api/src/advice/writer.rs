//! Advice writers — the capability the orchestrator depends on for generated text.
//!
//! `TemplateAdviceWriter` is deterministic and needs no network.
//! `LlmAdviceWriter` asks a `TextGenerator` for each artifact and, on any error or
//! unusable reply, returns the template output for that artifact unchanged.
//! Substitution is per artifact: a reply is used whole or not at all.
//!
//! `AppState` holds an `Arc<dyn AdviceWriter>`, chosen once at startup from config.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::advice::insights::{self, CareerInsights, LearningRoadmap, DEFAULT_ROADMAP_PRIORITY};
use crate::advice::prompts::{
    COMPANY_RESEARCH_PROMPT, COVER_LETTER_PROMPT, FIT_NARRATIVE_PROMPT, IMPROVEMENT_AREAS_PROMPT, INTERVIEW_PREP_PROMPT,
    LEARNING_ROADMAP_PROMPT, SALARY_TIPS_PROMPT, STRONG_POINTS_PROMPT, TALKING_POINTS_PROMPT,
};
use crate::advice::templates::{self, InterviewPrep};
use crate::llm_client::prompts::{
    CAREER_ADVISOR_SYSTEM, JSON_ONLY_INSTRUCTION, PIPE_LIST_INSTRUCTION,
};
use crate::llm_client::{parse_json_reply, split_pipe_list, LlmError, TextGenerator};
use crate::matching::skills::SkillMatchResult;
use crate::models::{JobPosting, Profile};

const MAX_LIST_ITEMS: usize = 5;
const MAX_SALARY_TIPS: usize = 5;

/// Everything a writer may draw on for one (profile, job) pair.
#[derive(Debug, Clone, Copy)]
pub struct AdviceContext<'a> {
    pub profile: &'a Profile,
    pub job: &'a JobPosting,
    pub skills: &'a SkillMatchResult,
    pub score: f64,
}

/// The four core advice artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub strong_points: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub talking_points: Vec<String>,
    pub interview_prep: InterviewPrep,
}

#[async_trait]
pub trait AdviceWriter: Send + Sync {
    async fn strong_points(&self, ctx: &AdviceContext<'_>) -> Vec<String>;
    async fn improvement_areas(&self, ctx: &AdviceContext<'_>) -> Vec<String>;
    async fn talking_points(&self, ctx: &AdviceContext<'_>) -> Vec<String>;
    async fn interview_prep(&self, ctx: &AdviceContext<'_>) -> InterviewPrep;
    async fn insights(&self, ctx: &AdviceContext<'_>) -> CareerInsights;

    /// "template" | "llm" — reported in results for transparency.
    fn backend(&self) -> &'static str;

    async fn write_advice(&self, ctx: &AdviceContext<'_>) -> Advice {
        Advice {
            strong_points: self.strong_points(ctx).await,
            improvement_areas: self.improvement_areas(ctx).await,
            talking_points: self.talking_points(ctx).await,
            interview_prep: self.interview_prep(ctx).await,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateAdviceWriter — default, no provider configured
// ────────────────────────────────────────────────────────────────────────────

pub struct TemplateAdviceWriter;

fn template_insights(ctx: &AdviceContext<'_>) -> CareerInsights {
    CareerInsights {
        cover_letter_opening: insights::cover_letter_opening(&ctx.job.title, &ctx.job.company),
        fit_narrative: insights::fit_narrative(ctx.score),
        learning_roadmap: insights::learning_roadmap(&missing_skills(ctx.skills)),
        salary_tips: insights::salary_tips(),
        company_research_brief: insights::company_research_brief(&ctx.job.company),
    }
}

#[async_trait]
impl AdviceWriter for TemplateAdviceWriter {
    async fn strong_points(&self, ctx: &AdviceContext<'_>) -> Vec<String> {
        templates::strong_points(ctx.profile, ctx.job, ctx.skills)
    }

    async fn improvement_areas(&self, ctx: &AdviceContext<'_>) -> Vec<String> {
        templates::improvement_areas(ctx.profile, ctx.job, ctx.skills)
    }

    async fn talking_points(&self, ctx: &AdviceContext<'_>) -> Vec<String> {
        templates::talking_points(ctx.profile, ctx.job, ctx.skills)
    }

    async fn interview_prep(&self, ctx: &AdviceContext<'_>) -> InterviewPrep {
        templates::interview_prep(ctx.profile, ctx.job, ctx.skills)
    }

    async fn insights(&self, ctx: &AdviceContext<'_>) -> CareerInsights {
        template_insights(ctx)
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAdviceWriter — external provider with per-artifact template fallback
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAdviceWriter {
    generator: Arc<dyn TextGenerator>,
}

#[derive(Deserialize)]
struct InterviewPrepReply {
    likely_questions: Vec<String>,
    preparation_tips: Vec<String>,
}

impl LlmAdviceWriter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    async fn ask_text(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
        self.generator
            .generate_text(prompt, CAREER_ADVISOR_SYSTEM, temperature)
            .await
    }

    async fn ask_list(&self, prompt: &str, temperature: f32) -> Result<Vec<String>, LlmError> {
        let prompt = format!("{prompt}\n\n{PIPE_LIST_INSTRUCTION}");
        let text = self.ask_text(&prompt, temperature).await?;
        let items = split_pipe_list(&text, MAX_LIST_ITEMS);
        if items.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(items)
    }

    async fn cover_letter(&self, ctx: &AdviceContext<'_>) -> Result<String, LlmError> {
        let strengths = templates::strong_points(ctx.profile, ctx.job, ctx.skills);
        let prompt = COVER_LETTER_PROMPT
            .replace("{candidate}", &ctx.profile.name)
            .replace("{current_role}", &ctx.profile.current_role)
            .replace("{job_title}", &ctx.job.title)
            .replace("{company}", &ctx.job.company)
            .replace("{strong_points}", &join_or_none(&strengths, 3))
            .replace("{skills}", &join_or_none(&ctx.profile.skills, 5));
        self.ask_text(&prompt, 0.7).await
    }

    async fn fit_narrative(&self, ctx: &AdviceContext<'_>) -> Result<String, LlmError> {
        let profile_summary = format!(
            "{}, {} with {} years of experience. Skills: {}",
            ctx.profile.name,
            ctx.profile.current_role,
            ctx.profile.years_experience,
            join_or_none(&ctx.profile.skills, usize::MAX)
        );
        let job_summary = format!(
            "{} at {}. Requires {} years. Required skills: {}",
            ctx.job.title,
            ctx.job.company,
            ctx.job.experience_years,
            join_or_none(&ctx.job.required_skills, usize::MAX)
        );
        let prompt = FIT_NARRATIVE_PROMPT
            .replace("{profile_summary}", &profile_summary)
            .replace("{job_summary}", &job_summary)
            .replace("{score}", &format!("{:.1}", ctx.score));
        self.ask_text(&prompt, 0.7).await
    }

    async fn learning_roadmap(&self, skills: &[String]) -> Result<LearningRoadmap, LlmError> {
        let prompt = LEARNING_ROADMAP_PROMPT
            .replace("{skills}", &skills.join(", "))
            .replace("{priority}", DEFAULT_ROADMAP_PRIORITY);
        let roadmap = self.ask_text(&prompt, 0.5).await?;
        Ok(LearningRoadmap {
            roadmap,
            skills: skills.to_vec(),
            priority: DEFAULT_ROADMAP_PRIORITY.to_string(),
        })
    }

    async fn company_research_brief(&self, job: &JobPosting) -> Result<String, LlmError> {
        let prompt = COMPANY_RESEARCH_PROMPT
            .replace("{company}", &job.company)
            .replace("{seniority_level}", &job.seniority_level);
        self.ask_text(&prompt, 0.6).await
    }

    async fn salary_tips(&self, ctx: &AdviceContext<'_>) -> Result<Vec<String>, LlmError> {
        let prompt = SALARY_TIPS_PROMPT
            .replace("{job_title}", &ctx.job.title)
            .replace("{years}", &ctx.profile.years_experience.to_string());
        let text = self.ask_text(&prompt, 0.6).await?;
        let tips: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(MAX_SALARY_TIPS)
            .map(str::to_string)
            .collect();
        if tips.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(tips)
    }
}

#[async_trait]
impl AdviceWriter for LlmAdviceWriter {
    async fn strong_points(&self, ctx: &AdviceContext<'_>) -> Vec<String> {
        let prompt = STRONG_POINTS_PROMPT
            .replace("{candidate}", &ctx.profile.name)
            .replace("{current_role}", &ctx.profile.current_role)
            .replace("{years}", &ctx.profile.years_experience.to_string())
            .replace("{previous_roles}", &join_or_none(&ctx.profile.previous_roles, usize::MAX))
            .replace("{job_title}", &ctx.job.title)
            .replace("{company}", &ctx.job.company)
            .replace("{years_required}", &ctx.job.experience_years.to_string())
            .replace("{matched_required}", &join_or_none(&ctx.skills.matched_required, usize::MAX))
            .replace("{matched_preferred}", &join_or_none(&ctx.skills.matched_preferred, usize::MAX));
        or_template("strong_points", self.ask_list(&prompt, 0.7).await, || {
            templates::strong_points(ctx.profile, ctx.job, ctx.skills)
        })
    }

    async fn improvement_areas(&self, ctx: &AdviceContext<'_>) -> Vec<String> {
        let prompt = IMPROVEMENT_AREAS_PROMPT
            .replace("{current_role}", &ctx.profile.current_role)
            .replace("{years}", &ctx.profile.years_experience.to_string())
            .replace("{job_title}", &ctx.job.title)
            .replace("{company}", &ctx.job.company)
            .replace("{years_required}", &ctx.job.experience_years.to_string())
            .replace("{missing_required}", &join_or_none(&ctx.skills.missing_required, usize::MAX))
            .replace("{missing_preferred}", &join_or_none(&ctx.skills.missing_preferred, usize::MAX));
        or_template("improvement_areas", self.ask_list(&prompt, 0.6).await, || {
            templates::improvement_areas(ctx.profile, ctx.job, ctx.skills)
        })
    }

    async fn talking_points(&self, ctx: &AdviceContext<'_>) -> Vec<String> {
        let prompt = TALKING_POINTS_PROMPT
            .replace("{candidate}", &ctx.profile.name)
            .replace("{current_role}", &ctx.profile.current_role)
            .replace("{job_title}", &ctx.job.title)
            .replace("{company}", &ctx.job.company)
            .replace("{description}", &ctx.job.description)
            .replace("{matched_required}", &join_or_none(&ctx.skills.matched_required, usize::MAX))
            .replace("{missing}", &join_or_none(&missing_skills(ctx.skills), usize::MAX));
        or_template("talking_points", self.ask_list(&prompt, 0.6).await, || {
            templates::talking_points(ctx.profile, ctx.job, ctx.skills)
        })
    }

    async fn interview_prep(&self, ctx: &AdviceContext<'_>) -> InterviewPrep {
        let prompt = INTERVIEW_PREP_PROMPT
            .replace("{current_role}", &ctx.profile.current_role)
            .replace("{job_title}", &ctx.job.title)
            .replace("{company}", &ctx.job.company)
            .replace("{matched_required}", &join_or_none(&ctx.skills.matched_required, usize::MAX))
            .replace("{missing}", &join_or_none(&missing_skills(ctx.skills), usize::MAX))
            .replace("{job_skills}", &join_or_none(&ctx.job.all_skills(), usize::MAX));
        let prompt = format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}");

        let reply = self
            .ask_text(&prompt, 0.6)
            .await
            .and_then(|text| parse_json_reply::<InterviewPrepReply>(&text))
            .and_then(|reply| {
                if reply.likely_questions.is_empty() || reply.preparation_tips.is_empty() {
                    Err(LlmError::EmptyContent)
                } else {
                    Ok(InterviewPrep {
                        likely_questions: reply.likely_questions,
                        preparation_tips: reply.preparation_tips,
                    })
                }
            });

        or_template("interview_prep", reply, || {
            templates::interview_prep(ctx.profile, ctx.job, ctx.skills)
        })
    }

    async fn insights(&self, ctx: &AdviceContext<'_>) -> CareerInsights {
        let fallback = template_insights(ctx);
        let missing = missing_skills(ctx.skills);

        let cover_letter_opening =
            or_template("cover_letter_opening", self.cover_letter(ctx).await, || {
                fallback.cover_letter_opening.clone()
            });
        let fit_narrative = or_template("fit_narrative", self.fit_narrative(ctx).await, || {
            fallback.fit_narrative.clone()
        });
        // Nothing to learn, nothing to ask for.
        let learning_roadmap = if !ctx.skills.has_gaps() {
            fallback.learning_roadmap.clone()
        } else {
            or_template("learning_roadmap", self.learning_roadmap(&missing).await, || {
                fallback.learning_roadmap.clone()
            })
        };
        let salary_tips = or_template("salary_tips", self.salary_tips(ctx).await, || {
            fallback.salary_tips.clone()
        });
        let company_research_brief = or_template(
            "company_research_brief",
            self.company_research_brief(ctx.job).await,
            || fallback.company_research_brief.clone(),
        );

        CareerInsights {
            cover_letter_opening,
            fit_narrative,
            learning_roadmap,
            salary_tips,
            company_research_brief,
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Uses the generated artifact, or logs the failure and falls back to the template.
fn or_template<T>(artifact: &str, generated: Result<T, LlmError>, template: impl FnOnce() -> T) -> T {
    match generated {
        Ok(value) => value,
        Err(e) => {
            warn!("LLM {artifact} failed, using template: {e}");
            template()
        }
    }
}

fn missing_skills(skills: &SkillMatchResult) -> Vec<String> {
    skills.skill_gaps().into_iter().map(str::to_string).collect()
}

fn join_or_none(items: &[String], limit: usize) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
