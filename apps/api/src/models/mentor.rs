use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Focus areas a mentor advertises for pairing. Carried through to the
/// presentation layer; the keyword-weight matcher does not consult it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStrategy {
    pub primary_focus: Vec<String>,
    pub secondary_focus: Vec<String>,
}

/// A mentor on the fixed roster. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorProfile {
    pub id: String,
    pub name: String,
    pub profession: String,
    /// Additive affinity per concern tag. A tag missing here scores 0.
    pub keyword_weights: HashMap<String, f64>,
    pub match_strategy: MatchStrategy,
    pub bio: String,
    pub specialties: Vec<String>,
    pub available_times: Vec<String>,
    pub testimonials: Vec<String>,
}

/// One selectable option of the concern survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyOption {
    pub id: String,
    pub label: String,
}

/// The single-step survey the portal shows before mentor matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub prompt: String,
    pub options: Vec<SurveyOption>,
}
