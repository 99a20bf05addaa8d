pub const COUNTRY_SUGGESTIONS: [&str; 20] = [
    "India",
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Japan",
    "China",
    "Brazil",
    "South Africa",
    "Pakistan",
    "Bangladesh",
    "Nepal",
    "Sri Lanka",
    "Netherlands",
    "Sweden",
    "Norway",
    "Denmark",
    "Switzerland",
];

/// Countries whose name contains `input`, case-insensitively.
pub fn suggest_countries(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    COUNTRY_SUGGESTIONS
        .iter()
        .copied()
        .filter(|country| country.to_lowercase().contains(&needle))
        .collect()
}
