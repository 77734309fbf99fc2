use serde::Serialize;

use crate::models::Profile;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileHealthReport {
    /// 0 – 100
    pub completeness: u32,
    pub suggestions: Vec<String>,
}

/// Tiered points: the first threshold the value reaches wins.
fn tier(value: usize, tiers: &[(usize, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(min, _)| value >= *min)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub fn compute_completeness(profile: &Profile) -> u32 {
    let mut score = 0;

    // Basic info
    if !profile.name.is_empty() {
        score += 5;
    }
    if !profile.current_role.is_empty() {
        score += 5;
    }
    if !profile.education.is_empty() {
        score += 5;
    }
    if !profile.certifications.is_empty() {
        score += 5;
    }

    score += tier(profile.skills.len(), &[(5, 15), (3, 10), (1, 5)]);
    score += tier(profile.years_experience as usize, &[(5, 15), (2, 10), (1, 5)]);
    score += tier(profile.previous_roles.len(), &[(3, 15), (2, 10), (1, 5)]);
    score += tier(profile.certifications.len(), &[(2, 20), (1, 10)]);

    score.min(100)
}

pub fn improvement_suggestions(profile: &Profile) -> Vec<String> {
    let mut suggestions = Vec::new();

    if profile.skills.len() < 5 {
        suggestions.push("Add more skills to your profile (aim for at least 5)".to_string());
    }
    if profile.certifications.is_empty() {
        suggestions
            .push("Consider adding relevant certifications to strengthen your profile".to_string());
    }
    if profile.education.is_empty() {
        suggestions.push("Add or update your education information".to_string());
    }
    if profile.previous_roles.len() < 2 {
        suggestions.push("Highlight more previous roles in your profile".to_string());
    }

    suggestions
}

pub fn profile_health(profile: &Profile) -> ProfileHealthReport {
    ProfileHealthReport {
        completeness: compute_completeness(profile),
        suggestions: improvement_suggestions(profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item{i}")).collect()
    }

    #[test]
    fn test_complete_profile_caps_at_100() {
        let profile = Profile {
            name: "A".to_string(),
            current_role: "B".to_string(),
            years_experience: 8,
            skills: strings(6),
            previous_roles: strings(3),
            education: "MSc".to_string(),
            certifications: strings(2),
        };
        // 20 basic + 15 + 15 + 15 + 20 = 85
        assert_eq!(compute_completeness(&profile), 85);
        assert!(improvement_suggestions(&profile).is_empty());
    }

    #[test]
    fn test_empty_profile_scores_zero_with_all_suggestions() {
        let report = profile_health(&Profile::default());
        assert_eq!(report.completeness, 0);
        assert_eq!(report.suggestions.len(), 4);
    }

    #[test]
    fn test_middle_tiers() {
        let profile = Profile {
            name: "A".to_string(),
            current_role: String::new(),
            years_experience: 2,
            skills: strings(3),
            previous_roles: strings(2),
            education: String::new(),
            certifications: strings(1),
        };
        // name 5 + cert 5 + skills 10 + years 10 + roles 10 + certs 10
        assert_eq!(compute_completeness(&profile), 50);
        let suggestions = improvement_suggestions(&profile);
        assert_eq!(
            suggestions,
            vec![
                "Add more skills to your profile (aim for at least 5)",
                "Add or update your education information",
            ]
        );
    }

    #[test]
    fn test_lowest_nonzero_tiers() {
        let profile = Profile {
            years_experience: 1,
            skills: strings(1),
            previous_roles: strings(1),
            ..Default::default()
        };
        assert_eq!(compute_completeness(&profile), 15);
    }
}
