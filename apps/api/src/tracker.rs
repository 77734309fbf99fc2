//! Application tracker — an in-process log of analysed/applied jobs.
//! Lives in `AppState` behind a mutex; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::scoring::round_one_decimal;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub match_score: f64,
    pub applied: bool,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SuccessPattern {
    Empty {
        message: String,
    },
    Summary {
        total_applications: usize,
        applied_count: usize,
        average_match_score_applied: f64,
        average_match_score_all: f64,
    },
}

#[derive(Debug, Default)]
pub struct ApplicationTracker {
    applications: Vec<ApplicationRecord>,
}

impl ApplicationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_application(
        &mut self,
        job_title: &str,
        company: &str,
        match_score: f64,
        applied: bool,
    ) -> ApplicationRecord {
        let record = ApplicationRecord {
            id: Uuid::new_v4(),
            job_title: job_title.to_string(),
            company: company.to_string(),
            match_score,
            applied,
            logged_at: Utc::now(),
        };
        self.applications.push(record.clone());
        record
    }

    pub fn success_pattern(&self) -> SuccessPattern {
        if self.applications.is_empty() {
            return SuccessPattern::Empty {
                message: "No applications logged yet".to_string(),
            };
        }

        let applied: Vec<f64> = self
            .applications
            .iter()
            .filter(|a| a.applied)
            .map(|a| a.match_score)
            .collect();
        let all: Vec<f64> = self.applications.iter().map(|a| a.match_score).collect();

        SuccessPattern::Summary {
            total_applications: all.len(),
            applied_count: applied.len(),
            average_match_score_applied: mean(&applied).map(round_one_decimal).unwrap_or(0.0),
            average_match_score_all: mean(&all).map(round_one_decimal).unwrap_or(0.0),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
