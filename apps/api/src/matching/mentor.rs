//! Mentor matching: weighted-sum scoring of the fixed roster against the
//! user's self-reported concerns.
//!
//! Default backend: `KeywordWeightMatcher` (pure, deterministic, fully
//! testable). `AppState` carries an `Arc<dyn MentorMatcher>` so a smarter
//! backend can be swapped in without touching the endpoint or handler code.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::mentor::MentorProfile;
use crate::models::selection::SelectionSet;

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across all matcher backends)
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of a mentor match. `mentor` is `None` only when the concern set
/// or the roster is empty; an all-zero score still elects the first mentor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorMatch {
    pub mentor: Option<MentorProfile>,
    pub score: Option<f64>,
    pub matcher_backend: String, // "keyword-weight" today
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait MentorMatcher: Send + Sync {
    async fn best_match(
        &self,
        concerns: &SelectionSet,
        mentors: &[MentorProfile],
    ) -> Result<MentorMatch, AppError>;
}

/// Weighted-sum matcher over the mentor keyword tables.
pub struct KeywordWeightMatcher;

#[async_trait]
impl MentorMatcher for KeywordWeightMatcher {
    async fn best_match(
        &self,
        concerns: &SelectionSet,
        mentors: &[MentorProfile],
    ) -> Result<MentorMatch, AppError> {
        let hit = compute_best_match(concerns, mentors);
        Ok(MentorMatch {
            mentor: hit.map(|(mentor, _)| mentor.clone()),
            score: hit.map(|(_, score)| score),
            matcher_backend: "keyword-weight".to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Sums the mentor's weight for every selected concern.
/// A concern missing from the mentor's table contributes 0.
pub fn score_mentor(mentor: &MentorProfile, concerns: &SelectionSet) -> f64 {
    concerns
        .iter()
        .map(|concern| mentor.keyword_weights.get(concern).copied().unwrap_or(0.0))
        .sum()
}

/// Picks the roster entry with the highest score.
///
/// The first mentor to reach the maximum wins; later equal scores do not
/// displace the incumbent. An empty concern set or an empty roster yields
/// `None` (the operation stays total; the portal disables the action
/// client-side when nothing is selected).
pub fn compute_best_match<'a>(
    concerns: &SelectionSet,
    mentors: &'a [MentorProfile],
) -> Option<(&'a MentorProfile, f64)> {
    if concerns.is_empty() {
        return None;
    }

    let mut best: Option<(&MentorProfile, f64)> = None;
    for mentor in mentors {
        let score = score_mentor(mentor, concerns);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mentor, score)),
        }
    }
    best
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceData;
    use crate::models::mentor::MatchStrategy;
    use std::collections::HashMap;

    fn make_mentor(id: &str, weight_entries: &[(&str, f64)]) -> MentorProfile {
        let keyword_weights: HashMap<String, f64> = weight_entries
            .iter()
            .map(|(tag, w)| (tag.to_string(), *w))
            .collect();
        MentorProfile {
            id: id.to_string(),
            name: format!("Mentor {id}"),
            profession: "Counselor".to_string(),
            keyword_weights,
            match_strategy: MatchStrategy {
                primary_focus: vec![],
                secondary_focus: vec![],
            },
            bio: String::new(),
            specialties: vec![],
            available_times: vec![],
            testimonials: vec![],
        }
    }

    fn selection(ids: &[&str]) -> SelectionSet {
        SelectionSet::from(ids.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_lonely_matches_emily_rodriguez() {
        let data = ReferenceData::builtin();
        let (mentor, score) =
            compute_best_match(&selection(&["lonely"]), &data.mentors).unwrap();
        assert_eq!(mentor.name, "Emily Rodriguez");
        assert!((score - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_depression_and_anxiety_match_michael_chen() {
        let data = ReferenceData::builtin();
        let (mentor, score) =
            compute_best_match(&selection(&["depression", "anxiety"]), &data.mentors).unwrap();
        assert_eq!(mentor.name, "Michael Chen");
        assert!((score - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_winner_has_no_strictly_greater_rival() {
        let data = ReferenceData::builtin();
        let concerns = selection(&["anxiety", "tech-addiction", "communication"]);
        let (_, best_score) = compute_best_match(&concerns, &data.mentors).unwrap();
        for mentor in &data.mentors {
            assert!(score_mentor(mentor, &concerns) <= best_score);
        }
    }

    #[test]
    fn test_tie_keeps_first_mentor_in_roster_order() {
        let mentors = vec![
            make_mentor("first", &[("stress", 0.5)]),
            make_mentor("second", &[("stress", 0.5)]),
        ];
        let (mentor, _) = compute_best_match(&selection(&["stress"]), &mentors).unwrap();
        assert_eq!(mentor.id, "first");
    }

    #[test]
    fn test_missing_weight_counts_as_zero() {
        let mentors = vec![
            make_mentor("none", &[]),
            make_mentor("some", &[("grief", 0.3)]),
        ];
        let (mentor, score) = compute_best_match(&selection(&["grief"]), &mentors).unwrap();
        assert_eq!(mentor.id, "some");
        assert!((score - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_concern_elects_first_mentor_at_zero() {
        let data = ReferenceData::builtin();
        let (mentor, score) =
            compute_best_match(&selection(&["unmapped-concern"]), &data.mentors).unwrap();
        assert_eq!(mentor.id, data.mentors[0].id);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_single_mentor_is_trivially_matched() {
        let mentors = vec![make_mentor("only", &[])];
        let (mentor, score) = compute_best_match(&selection(&["anything"]), &mentors).unwrap();
        assert_eq!(mentor.id, "only");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_concerns_yield_no_match() {
        let data = ReferenceData::builtin();
        assert!(compute_best_match(&SelectionSet::new(), &data.mentors).is_none());
    }

    #[test]
    fn test_empty_roster_yields_no_match() {
        assert!(compute_best_match(&selection(&["lonely"]), &[]).is_none());
    }

    #[test]
    fn test_rematch_with_unchanged_selection_is_stable() {
        // "Find another mentor" keeps the previous selection; rerunning the
        // survey untouched must reproduce the same match.
        let data = ReferenceData::builtin();
        let concerns = selection(&["depression", "anxiety"]);
        let first = compute_best_match(&concerns, &data.mentors).unwrap();
        let second = compute_best_match(&concerns, &data.mentors).unwrap();
        assert_eq!(first.0.id, second.0.id);
        assert_eq!(first.1, second.1);
    }

    #[tokio::test]
    async fn test_keyword_weight_backend_labels_itself() {
        let data = ReferenceData::builtin();
        let result = KeywordWeightMatcher
            .best_match(&selection(&["lonely"]), &data.mentors)
            .await
            .unwrap();
        assert_eq!(result.matcher_backend, "keyword-weight");
        assert_eq!(result.mentor.unwrap().name, "Emily Rodriguez");
        assert_eq!(result.score, Some(0.9));
    }

    #[tokio::test]
    async fn test_keyword_weight_backend_neutral_on_empty_selection() {
        let data = ReferenceData::builtin();
        let result = KeywordWeightMatcher
            .best_match(&SelectionSet::new(), &data.mentors)
            .await
            .unwrap();
        assert!(result.mentor.is_none());
        assert!(result.score.is_none());
    }
}
