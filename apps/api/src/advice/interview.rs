//! Mock-interview question banks.

use serde::Serialize;

const GENERIC_TECHNICAL_QUESTION: &str = "Tell me about your most challenging project";

/// Canned technical questions, keyed by exact skill name.
const TECHNICAL_QUESTIONS: &[(&str, &str)] = &[
    ("Python", "Explain the difference between lists and tuples in Python"),
    ("JavaScript", "What are closures in JavaScript and why are they important?"),
    ("React", "What is the purpose of useEffect in React hooks?"),
    ("SQL", "Explain the difference between JOIN and UNION in SQL"),
    ("Docker", "What are the advantages of using Docker containers?"),
    ("AWS", "What is the difference between EC2 and Lambda?"),
    ("Design Patterns", "Explain the Observer pattern and provide an example"),
];

const BEHAVIORAL_QUESTIONS: &[&str] = &[
    "Tell me about a time you had to deal with a difficult team member",
    "Describe a situation where you had to learn a new technology quickly",
    "Give an example of when you had to adapt your approach to solve a problem",
    "Tell me about your greatest achievement in your career",
    "How do you handle failure or making mistakes at work?",
];

#[derive(Debug, Clone, Serialize)]
pub struct QuestionSet {
    pub technical: Vec<String>,
    pub behavioral: Vec<String>,
}

/// Questions for up to the first three skills that have a bank entry.
/// Falls back to one generic question when none do.
pub fn technical_questions(skills: &[String]) -> Vec<String> {
    let questions: Vec<String> = skills
        .iter()
        .take(3)
        .filter_map(|skill| {
            TECHNICAL_QUESTIONS
                .iter()
                .find(|(name, _)| name == skill)
                .map(|(_, question)| question.to_string())
        })
        .collect();

    if questions.is_empty() {
        vec![GENERIC_TECHNICAL_QUESTION.to_string()]
    } else {
        questions
    }
}

pub fn behavioral_questions() -> Vec<String> {
    BEHAVIORAL_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

pub fn question_set(skills: &[String]) -> QuestionSet {
    QuestionSet {
        technical: technical_questions(skills),
        behavioral: behavioral_questions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_only_first_three_skills_considered() {
        let questions = technical_questions(&skills(&["Python", "Rust", "SQL", "Docker"]));
        assert_eq!(questions.len(), 2);
        assert!(questions[0].contains("Python"));
        assert!(questions[1].contains("SQL"));
    }

    #[test]
    fn test_lookup_is_exact_case() {
        let questions = technical_questions(&skills(&["python"]));
        assert_eq!(questions, vec![GENERIC_TECHNICAL_QUESTION]);
    }

    #[test]
    fn test_empty_skills_get_generic_question() {
        assert_eq!(technical_questions(&[]), vec![GENERIC_TECHNICAL_QUESTION]);
    }

    #[test]
    fn test_behavioral_questions_are_fixed() {
        let set = question_set(&skills(&["AWS"]));
        assert_eq!(set.behavioral.len(), 5);
        assert_eq!(set.technical, vec!["What is the difference between EC2 and Lambda?"]);
    }
}
