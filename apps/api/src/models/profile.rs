use serde::{Deserialize, Serialize};

/// A candidate's profile as supplied by the caller.
///
/// `skills` keep their original casing; identity for matching is case-insensitive.
/// Missing optional fields (empty education, no certifications) are valid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub current_role: String,
    pub years_experience: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub previous_roles: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}
