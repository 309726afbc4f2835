//! Reference data provider: the static tables every matcher reads.
//!
//! Loaded once at startup and injected read-only into handlers and tests;
//! nothing in the service refetches or mutates these tables afterwards.

mod seed;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::career::{JobIndex, SkillCategories};
use crate::models::impulse::ImpulseCategory;
use crate::models::mentor::{MentorProfile, SurveyQuestion};

/// The full set of static tables consumed by the matching endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub mentors: Vec<MentorProfile>,
    pub survey: SurveyQuestion,
    pub impulse_categories: Vec<ImpulseCategory>,
    pub skill_categories: SkillCategories,
    pub job_index: JobIndex,
}

impl ReferenceData {
    /// The built-in dataset shipped with the service.
    pub fn builtin() -> Self {
        seed::builtin()
    }

    /// Loads a replacement dataset from a JSON file (PORTAL_DATA_PATH).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference data file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Reference data file {} is not valid JSON", path.display()))
    }
}
