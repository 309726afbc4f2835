use serde::{Deserialize, Serialize};

/// An impulse-control support category: static descriptive content the
/// portal renders in its detail dialogs. Lookup never scores these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpulseCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub details: Vec<String>,
    /// What the paired wearable does for this category.
    pub device_feature: String,
    pub support_resources: Vec<String>,
}
