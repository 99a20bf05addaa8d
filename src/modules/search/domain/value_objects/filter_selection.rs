use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ownership filter offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    #[default]
    All,
    Public,
    Private,
}

impl FilterCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::All => "all",
            FilterCategory::Public => "public",
            FilterCategory::Private => "private",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterCategory::All),
            "public" => Ok(FilterCategory::Public),
            "private" => Ok(FilterCategory::Private),
            other => Err(AppError::ValidationError(format!(
                "Invalid category '{}'. Must be one of: all, public, private",
                other
            ))),
        }
    }
}

/// Current state + category refinement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub state_province: Option<String>,
    pub category: FilterCategory,
}

impl FilterSelection {
    pub fn new(state_province: Option<String>, category: FilterCategory) -> Self {
        Self::default()
            .with_category(category)
            .with_state_option(state_province)
    }

    /// Blank values clear the state refinement.
    pub fn with_state(self, state_province: impl Into<String>) -> Self {
        self.with_state_option(Some(state_province.into()))
    }

    pub fn with_state_option(mut self, state_province: Option<String>) -> Self {
        self.state_province = state_province
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn with_category(mut self, category: FilterCategory) -> Self {
        self.category = category;
        self
    }

    /// True for `{none, all}`, which leaves a result set untouched.
    pub fn is_unfiltered(&self) -> bool {
        self.state_province.is_none() && self.category == FilterCategory::All
    }
}
