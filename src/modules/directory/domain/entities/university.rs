use serde::Serialize;

/// A normalized directory entry.
///
/// Records are only built by the directory mappers and never mutated
/// afterwards; the presentation layer decides how to render absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniversityRecord {
    name: String,
    country: Option<String>,
    state_province: Option<String>,
    domains: Vec<String>,
    web_pages: Vec<String>,
}

impl UniversityRecord {
    /// Returns `None` when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        country: Option<String>,
        state_province: Option<String>,
        domains: Vec<String>,
        web_pages: Vec<String>,
    ) -> Option<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name,
            country: non_blank(country),
            state_province: non_blank(state_province),
            domains: domains.into_iter().filter_map(|d| non_blank(Some(d))).collect(),
            web_pages: web_pages
                .into_iter()
                .filter_map(|p| non_blank(Some(p)))
                .collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn state_province(&self) -> Option<&str> {
        self.state_province.as_deref()
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn web_pages(&self) -> &[String] {
        &self.web_pages
    }

    /// Canonical website: the first listed web page.
    pub fn website(&self) -> Option<&str> {
        self.web_pages.first().map(String::as_str)
    }

    pub fn primary_domain(&self) -> Option<&str> {
        self.domains.first().map(String::as_str)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Ordered records returned by the most recent successful lookup.
pub type SearchResultSet = Vec<UniversityRecord>;
