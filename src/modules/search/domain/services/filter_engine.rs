use crate::modules::directory::domain::UniversityRecord;
use crate::modules::search::domain::value_objects::{FilterCategory, FilterSelection};

/// Keywords the category filter treats as "public".
///
/// Narrower than the classifier's list, and "private" here means none of
/// these match; both behaviours are relied on by the filter controls.
pub const FILTER_PUBLIC_KEYWORDS: [&str; 4] = ["state", "public", "national", "government"];

pub struct FilterEngine;

impl FilterEngine {
    /// Stable filter: relative order of `records` is kept.
    pub fn apply(records: &[UniversityRecord], selection: &FilterSelection) -> Vec<UniversityRecord> {
        let state_needle = selection
            .state_province
            .as_deref()
            .map(|s| s.to_lowercase());

        records
            .iter()
            .filter(|r| match &state_needle {
                Some(needle) => Self::matches_state(r, needle),
                None => true,
            })
            .filter(|r| Self::matches_category(r.name(), selection.category))
            .cloned()
            .collect()
    }

    fn matches_state(record: &UniversityRecord, needle: &str) -> bool {
        record
            .state_province()
            .map(|state| state.to_lowercase().contains(needle))
            .unwrap_or(false)
    }

    pub fn matches_category(name: &str, category: FilterCategory) -> bool {
        match category {
            FilterCategory::All => true,
            FilterCategory::Public => Self::has_public_keyword(name),
            FilterCategory::Private => !Self::has_public_keyword(name),
        }
    }

    fn has_public_keyword(name: &str) -> bool {
        let name = name.to_lowercase();
        FILTER_PUBLIC_KEYWORDS.iter().any(|k| name.contains(k))
    }
}
