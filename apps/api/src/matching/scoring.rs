//! Score Calculator and rating bands.
//!
//! score = clamp(matched_required / required_total * 100 + experience_adjustment, 0, 100)
//! where the adjustment is +10 when the candidate meets the experience requirement and
//! -5 per missing year otherwise. A job with no required skills scores 0.

use serde::{Deserialize, Serialize};

use crate::matching::skills::SkillMatchResult;

pub const EXPERIENCE_BONUS: f64 = 10.0;
pub const PENALTY_PER_MISSING_YEAR: f64 = 5.0;

const EXCELLENT_THRESHOLD: f64 = 80.0;
const GOOD_THRESHOLD: f64 = 60.0;
const POSSIBLE_THRESHOLD: f64 = 40.0;

/// Computes the 0–100 fit score from the required-skill buckets and experience years.
pub fn calculate_score(skills: &SkillMatchResult, profile_years: u32, job_years: u32) -> f64 {
    let required_total = skills.required_total();
    if required_total == 0 {
        return 0.0;
    }

    let base = skills.matched_required.len() as f64 / required_total as f64 * 100.0;
    let adjustment = experience_adjustment(profile_years, job_years);

    (base + adjustment).clamp(0.0, 100.0)
}

/// +10 when the profile meets the requirement, otherwise -5 per missing year (unbounded).
pub fn experience_adjustment(profile_years: u32, job_years: u32) -> f64 {
    if profile_years >= job_years {
        EXPERIENCE_BONUS
    } else {
        -(f64::from(job_years - profile_years) * PENALTY_PER_MISSING_YEAR)
    }
}

/// Qualitative rating band for a score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitRating {
    #[serde(rename = "Excellent Fit")]
    Excellent,
    #[serde(rename = "Good Fit")]
    Good,
    #[serde(rename = "Possible Fit")]
    Possible,
    #[serde(rename = "Challenging Fit")]
    Challenging,
}

impl FitRating {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= EXCELLENT_THRESHOLD => FitRating::Excellent,
            s if s >= GOOD_THRESHOLD => FitRating::Good,
            s if s >= POSSIBLE_THRESHOLD => FitRating::Possible,
            _ => FitRating::Challenging,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitRating::Excellent => "Excellent Fit",
            FitRating::Good => "Good Fit",
            FitRating::Possible => "Possible Fit",
            FitRating::Challenging => "Challenging Fit",
        }
    }

    /// Advisory sentence for the band.
    pub fn recommendation(&self) -> &'static str {
        match self {
            FitRating::Excellent => {
                "Strong candidate - Apply with confidence! Emphasize matched skills."
            }
            FitRating::Good => "Good candidate - Apply. Work on highlighted missing skills.",
            FitRating::Possible => {
                "Consider applying - Close some skill gaps first if possible."
            }
            FitRating::Challenging => {
                "Challenging fit - Consider gaining more skills before applying."
            }
        }
    }
}

impl std::fmt::Display for FitRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rounds to one decimal place for display. Ties go to the even digit.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
