use crate::modules::directory::domain::UniversityRecord;
use crate::modules::search::domain::value_objects::FacetSet;
use std::collections::BTreeSet;

pub struct FacetDeriver;

impl FacetDeriver {
    /// Distinct non-blank states, ascending.
    pub fn derive_states(records: &[UniversityRecord]) -> FacetSet {
        let states: BTreeSet<String> = records
            .iter()
            .filter_map(|r| r.state_province())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        FacetSet::from_sorted(states.into_iter().collect())
    }
}
