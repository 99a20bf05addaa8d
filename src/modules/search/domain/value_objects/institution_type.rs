use serde::{Deserialize, Serialize};
use std::fmt;

/// Heuristic ownership label derived from an institution's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionType {
    Public,
    Private,
    Unknown,
}

impl InstitutionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstitutionType::Public => "public",
            InstitutionType::Private => "private",
            InstitutionType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
