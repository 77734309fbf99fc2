// Prompt templates for the LLM-backed advice writer.
// Placeholders are `{name}` and are filled with `str::replace` before sending.

/// Replace: {candidate}, {current_role}, {years}, {job_title}, {company}, {years_required},
///          {matched_required}, {matched_preferred}, {previous_roles}
pub const STRONG_POINTS_PROMPT: &str = r#"List the 3 strongest selling points this candidate has for the role.

CANDIDATE: {candidate} ({current_role}, {years} years of experience)
PREVIOUS ROLES: {previous_roles}
TARGET ROLE: {job_title} at {company} ({years_required} years required)
MATCHED REQUIRED SKILLS: {matched_required}
MATCHED PREFERRED SKILLS: {matched_preferred}

Each point must be one sentence and reference a concrete detail above."#;

/// Replace: {current_role}, {years}, {job_title}, {company}, {years_required},
///          {missing_required}, {missing_preferred}
pub const IMPROVEMENT_AREAS_PROMPT: &str = r#"List up to 3 concrete areas this candidate should improve before applying.

CANDIDATE: {current_role}, {years} years of experience
TARGET ROLE: {job_title} at {company} ({years_required} years required)
MISSING REQUIRED SKILLS: {missing_required}
MISSING PREFERRED SKILLS: {missing_preferred}

Prioritise required skills over preferred ones. Be actionable."#;

/// Replace: {candidate}, {current_role}, {job_title}, {company}, {description},
///          {matched_required}, {missing}
pub const TALKING_POINTS_PROMPT: &str = r#"Generate 5 specific talking points for a cover letter and interview for this job.

CANDIDATE BACKGROUND:
{candidate}, currently {current_role}

JOB REQUIREMENTS:
{job_title} at {company}
{description}

MATCHED SKILLS: {matched_required}
MISSING SKILLS: {missing}

Provide talking points that:
1. Highlight matched skills with specific examples
2. Address missing skills professionally (show willingness to learn)
3. Show understanding of job requirements
4. Are specific and memorable"#;

/// Replace: {current_role}, {job_title}, {company}, {job_skills}, {matched_required}, {missing}
pub const INTERVIEW_PREP_PROMPT: &str = r#"Prepare this candidate for an interview.

CANDIDATE: currently {current_role}
TARGET ROLE: {job_title} at {company}
SKILLS THE ROLE ASKS FOR: {job_skills}
MATCHED SKILLS: {matched_required}
SKILL GAPS: {missing}

Return a JSON object with this EXACT schema:
{
  "likely_questions": ["question 1", "question 2", "question 3"],
  "preparation_tips": ["tip 1", "tip 2", "tip 3"]
}"#;

/// Replace: {candidate}, {current_role}, {job_title}, {company}, {strong_points}, {skills}
pub const COVER_LETTER_PROMPT: &str = r#"Write a compelling cover letter opening paragraph (2-3 sentences) for:
- Candidate: {candidate} ({current_role})
- Target Role: {job_title} at {company}
- Key Strengths: {strong_points}
- Key Skills: {skills}

Make it personalized, confident, and specific to the role. Focus on what they can contribute."#;

/// Replace: {profile_summary}, {job_summary}, {score}
pub const FIT_NARRATIVE_PROMPT: &str = r#"Provide a brief, insightful narrative (3-4 sentences) analyzing the job fit:

CANDIDATE:
{profile_summary}

JOB:
{job_summary}

MATCH SCORE: {score}%

Be honest but encouraging. Highlight key alignment points and growth opportunities."#;

/// Replace: {skills}, {priority}
pub const LEARNING_ROADMAP_PROMPT: &str = r#"Create a learning roadmap for someone who needs to learn these skills:
{skills}

Priority: {priority}

For each skill, provide:
1. Why it matters
2. Learning resources (courses, tutorials, books)
3. Practice projects
4. Expected learning time

Format concisely for practical use."#;

/// Replace: {job_title}, {years}
pub const SALARY_TIPS_PROMPT: &str = r#"Generate 5 practical salary negotiation tips for:
- Role: {job_title}
- Experience: {years} years

Tips should address:
1. How to research fair market rate
2. When/how to bring up compensation
3. How to justify your ask
4. How to negotiate beyond salary
5. Red flags to watch for

Return one tip per line, no other text."#;

/// Replace: {company}, {seniority_level}
pub const COMPANY_RESEARCH_PROMPT: &str = r#"Based on general knowledge, provide 3-4 talking points about {company} that would be impressive in an interview for a {seniority_level} candidate:

Focus on:
- Recent company news/launches
- Industry position
- Culture indicators
- Growth areas

This should help demonstrate genuine interest in the company.
Be specific but use only well-known information."#;
