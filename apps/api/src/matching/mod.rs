// Skill matching, scoring and rating. Pure functions, no I/O.

pub mod jd_parser;
pub mod scoring;
pub mod skills;
