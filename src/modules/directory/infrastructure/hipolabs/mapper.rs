use super::models::HipolabsUniversity;
use crate::modules::directory::domain::{SearchResultSet, UniversityRecord};
use crate::modules::directory::infrastructure::http_client::CommonHttpHandler;
use crate::shared::errors::{AppError, AppResult};
use serde_json::Value;

/// Converts Hipolabs payloads into domain records
pub struct HipolabsMapper;

impl HipolabsMapper {
    /// Parse a response body.
    ///
    /// `null` counts as an empty list. Entries that fail to decode are
    /// skipped; anything other than an array or `null` is an upstream error.
    pub fn parse_body(body: &str) -> AppResult<Vec<HipolabsUniversity>> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            AppError::upstream(
                None,
                format!(
                    "Failed to parse directory response: {}. Response: {}",
                    e,
                    CommonHttpHandler::excerpt(body)
                ),
            )
        })?;

        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => Ok(items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    match serde_json::from_value::<HipolabsUniversity>(item) {
                        Ok(entry) => Some(entry),
                        Err(e) => {
                            log::warn!("Skipping malformed directory entry #{}: {}", index, e);
                            None
                        }
                    }
                })
                .collect()),
            other => Err(AppError::upstream(
                None,
                format!(
                    "Unexpected directory response shape: expected a list, got {}",
                    CommonHttpHandler::excerpt(&other.to_string())
                ),
            )),
        }
    }

    pub fn to_domain(source: HipolabsUniversity) -> Option<UniversityRecord> {
        let record = UniversityRecord::new(
            source.name.unwrap_or_default(),
            source.country,
            source.state_province,
            source.domains.unwrap_or_default(),
            source.web_pages.unwrap_or_default(),
        );
        if record.is_none() {
            log::debug!("Dropping directory entry without a name");
        }
        record
    }

    pub fn to_domain_list(sources: Vec<HipolabsUniversity>) -> SearchResultSet {
        sources.into_iter().filter_map(Self::to_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "University of Delhi",
            "country": "India",
            "alpha_two_code": "IN",
            "state-province": "Delhi",
            "domains": ["du.ac.in"],
            "web_pages": ["http://www.du.ac.in/"]
        },
        {
            "name": "Indian Institute of Science",
            "country": "India",
            "alpha_two_code": "IN",
            "state-province": null,
            "domains": ["iisc.ac.in"],
            "web_pages": ["https://www.iisc.ac.in/"]
        }
    ]"#;

    #[test]
    fn test_parse_hyphenated_state_key() {
        let parsed = HipolabsMapper::parse_body(SAMPLE).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].state_province.as_deref(), Some("Delhi"));
        assert_eq!(parsed[1].state_province, None);
    }

    #[test]
    fn test_to_domain_list_preserves_order() {
        let records = HipolabsMapper::to_domain_list(HipolabsMapper::parse_body(SAMPLE).unwrap());
        let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["University of Delhi", "Indian Institute of Science"]);
        assert_eq!(records[0].website(), Some("http://www.du.ac.in/"));
    }

    #[test]
    fn test_null_body_is_empty() {
        assert!(HipolabsMapper::parse_body("null").unwrap().is_empty());
        assert!(HipolabsMapper::parse_body("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let parsed = HipolabsMapper::parse_body(r#"[{"name": "Bare University"}]"#).unwrap();
        let record = HipolabsMapper::to_domain(parsed[0].clone()).unwrap();
        assert_eq!(record.country(), None);
        assert!(record.domains().is_empty());
        assert!(record.web_pages().is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let body = r#"[{"name": 42}, {"name": "Real University", "domains": ["real.edu"]}, {"country": "Nowhere"}]"#;
        let records = HipolabsMapper::to_domain_list(HipolabsMapper::parse_body(body).unwrap());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Real University");
    }

    #[test]
    fn test_object_body_is_upstream_error() {
        let err = HipolabsMapper::parse_body(r#"{"error": "oops"}"#).unwrap_err();
        assert!(matches!(err, AppError::UpstreamError { status: None, .. }));
    }

    #[test]
    fn test_invalid_json_is_upstream_error() {
        let err = HipolabsMapper::parse_body("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::UpstreamError { .. }));
    }
}
