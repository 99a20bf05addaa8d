use serde::Serialize;

/// Sorted, distinct state/province values of a result set
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FacetSet(Vec<String>);

impl FacetSet {
    /// Callers must pass sorted, deduplicated, non-blank values.
    pub(crate) fn from_sorted(values: Vec<String>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.binary_search_by(|probe| probe.as_str().cmp(value)).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
