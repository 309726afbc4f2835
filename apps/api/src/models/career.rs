use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A selectable skill with its display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub label: String,
}

/// The fixed skill checklist, grouped the way the portal renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategories {
    pub technical: Vec<Skill>,
    pub business: Vec<Skill>,
    pub soft: Vec<Skill>,
}

impl SkillCategories {
    /// All skills across the three groups, in display order.
    pub fn iter_all(&self) -> impl Iterator<Item = &Skill> {
        self.technical
            .iter()
            .chain(self.business.iter())
            .chain(self.soft.iter())
    }
}

/// Inverted index from skill id to the job titles associated with it.
/// A title may appear under several skills; the matcher deduplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobIndex(HashMap<String, Vec<String>>);

impl JobIndex {
    /// Titles for a skill. An unknown id maps to no titles, not an error.
    pub fn jobs_for(&self, skill_id: &str) -> &[String] {
        self.0.get(skill_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<HashMap<String, Vec<String>>> for JobIndex {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

/// One scored entry of a job-match result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    /// Unique within one result list.
    pub title: String,
    /// The selected skills whose job lists contain this title, in selection order.
    pub matching_skills: Vec<String>,
    /// Percentage of the selected skills this title covers. Always in (0, 100].
    pub score: f64,
}
