use crate::modules::search::domain::value_objects::InstitutionType;

pub const PUBLIC_INDICATORS: [&str; 6] = [
    "state",
    "public",
    "national",
    "government",
    "municipal",
    "federal",
];

pub const PRIVATE_INDICATORS: [&str; 4] = ["private", "institute", "college", "academy"];

/// Name-based public/private labelling
pub struct Classifier;

impl Classifier {
    /// Case-insensitive substring match; a public indicator wins over any
    /// private one.
    pub fn classify(name: &str) -> InstitutionType {
        let name = name.to_lowercase();

        if PUBLIC_INDICATORS.iter().any(|k| name.contains(k)) {
            InstitutionType::Public
        } else if PRIVATE_INDICATORS.iter().any(|k| name.contains(k)) {
            InstitutionType::Private
        } else {
            InstitutionType::Unknown
        }
    }
}
