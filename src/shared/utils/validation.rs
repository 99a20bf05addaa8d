use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Trim a country query and reject blank input.
    pub fn validate_country_query(query: &str) -> Result<String, AppError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(
                "Country name cannot be empty".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}
