//! Presentation-neutral view models built from session data.

use crate::modules::directory::domain::UniversityRecord;
use crate::modules::search::domain::{Classifier, FacetSet, InstitutionType};
use serde::Serialize;
use std::fmt;

pub const NOT_SPECIFIED: &str = "Not specified";

/// Everything a result card shows for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniversityCard {
    pub name: String,
    pub country: String,
    pub state_province: Option<String>,
    pub domain: Option<String>,
    pub website: Option<String>,
    pub institution_type: InstitutionType,
}

impl UniversityCard {
    pub fn from_record(record: &UniversityRecord) -> Self {
        Self {
            name: record.name().to_string(),
            country: record.country().unwrap_or(NOT_SPECIFIED).to_string(),
            state_province: record.state_province().map(str::to_string),
            domain: record.primary_domain().map(str::to_string),
            website: record.website().map(str::to_string),
            institution_type: Classifier::classify(record.name()),
        }
    }

    pub fn from_records(records: &[UniversityRecord]) -> Vec<Self> {
        records.iter().map(Self::from_record).collect()
    }
}

/// Result count line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultsSummary {
    Ready,
    All { total: usize },
    Partial { shown: usize, total: usize },
}

impl ResultsSummary {
    pub fn new(shown: usize, total: usize) -> Self {
        if total == 0 {
            ResultsSummary::Ready
        } else if shown == total {
            ResultsSummary::All { total }
        } else {
            ResultsSummary::Partial { shown, total }
        }
    }
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultsSummary::Ready => write!(f, "Ready to search universities worldwide"),
            ResultsSummary::All { total } => write!(f, "Found {} universities", total),
            ResultsSummary::Partial { shown, total } => {
                write!(f, "Showing {} of {} universities", shown, total)
            }
        }
    }
}

/// Label for the "any state" entry of the state selector
pub fn facet_label(facets: &FacetSet) -> String {
    if facets.is_empty() {
        "No state data available".to_string()
    } else {
        format!("All States/Provinces ({} available)", facets.len())
    }
}
