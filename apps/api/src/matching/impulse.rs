//! Impulse support catalog lookup. A pure filter over the category table;
//! no scoring involved.

use crate::models::impulse::ImpulseCategory;
use crate::models::selection::SelectionSet;

/// Returns the selected categories in catalog order, regardless of the order
/// they were selected in. Unknown ids are silently ignored.
pub fn lookup<'a>(
    selected: &SelectionSet,
    categories: &'a [ImpulseCategory],
) -> Vec<&'a ImpulseCategory> {
    categories
        .iter()
        .filter(|category| selected.contains(&category.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceData;

    fn selection(ids: &[&str]) -> SelectionSet {
        SelectionSet::from(ids.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_unknown_id_is_silently_ignored() {
        let data = ReferenceData::builtin();
        let found = lookup(
            &selection(&["drug-addiction", "unknown-id"]),
            &data.impulse_categories,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Drug Addiction");
    }

    #[test]
    fn test_results_follow_catalog_order_not_selection_order() {
        let data = ReferenceData::builtin();
        let found = lookup(
            &selection(&["social-media", "drug-addiction"]),
            &data.impulse_categories,
        );
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Drug Addiction", "Social Media Addiction"]);
    }

    #[test]
    fn test_empty_selection_returns_nothing() {
        let data = ReferenceData::builtin();
        assert!(lookup(&SelectionSet::new(), &data.impulse_categories).is_empty());
    }

    #[test]
    fn test_full_selection_returns_whole_catalog() {
        let data = ReferenceData::builtin();
        let found = lookup(
            &selection(&["drug-addiction", "gambling", "social-media"]),
            &data.impulse_categories,
        );
        assert_eq!(found.len(), data.impulse_categories.len());
    }
}
