//! Skill-to-job matching: expands the selected skills through the inverted
//! job index and scores every distinct title by skill coverage.

use std::cmp::Ordering;

use crate::models::career::{JobIndex, JobMatch};
use crate::models::selection::SelectionSet;

/// Maximum number of matches returned to the caller.
pub const MAX_MATCHES: usize = 10;

/// Scores every distinct job title reachable from the selected skills.
///
/// Algorithm:
/// 1. Walk the selected skills in selection order; an unknown id maps to no
///    titles, not an error.
/// 2. The first time a title is seen, credit it with every selected skill
///    whose list contains it, not only the skill that surfaced it.
/// 3. score = matching skills / selected skills * 100.
/// 4. Stable sort descending by score, truncate to `MAX_MATCHES`.
///
/// An empty selection yields an empty list, which callers render as a valid
/// zero-result state rather than an error.
pub fn match_jobs(selected: &SelectionSet, index: &JobIndex) -> Vec<JobMatch> {
    if selected.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<JobMatch> = Vec::new();
    for skill in selected.iter() {
        for title in index.jobs_for(skill) {
            if matches.iter().any(|m| &m.title == title) {
                continue;
            }
            let matching_skills: Vec<String> = selected
                .iter()
                .filter(|s| index.jobs_for(s).iter().any(|t| t == title))
                .map(str::to_string)
                .collect();
            let score = (matching_skills.len() as f64 / selected.len() as f64) * 100.0;
            matches.push(JobMatch {
                title: title.clone(),
                matching_skills,
                score,
            });
        }
    }

    // Stable: equal scores keep their encounter order
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches.truncate(MAX_MATCHES);
    matches
}
