use axum::Json;
use serde::Deserialize;

use crate::advice::interview::{question_set, QuestionSet};

#[derive(Debug, Deserialize)]
pub struct InterviewQuestionsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

/// POST /api/v1/interview/questions
pub async fn handle_interview_questions(
    Json(request): Json<InterviewQuestionsRequest>,
) -> Json<QuestionSet> {
    Json(question_set(&request.skills))
}
