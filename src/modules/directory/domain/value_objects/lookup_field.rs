use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameter used when asking the directory for matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupField {
    /// Strict country match
    Country,
    /// Institution name match, used as the fallback
    Name,
}

impl LookupField {
    pub fn as_param(&self) -> &'static str {
        match self {
            LookupField::Country => "country",
            LookupField::Name => "name",
        }
    }
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}
