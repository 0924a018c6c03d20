use super::*;

impl ParamStore {
    /// Get a string value and validate it's one of the allowed spellings.
    pub fn get_string_enum(&mut self, path: &str, allowed_values: &[&str]) -> Result<String, AxonError> {
        let value: String = self.get(path)?;

        if !allowed_values.iter().any(|&v| v == value) {
            return Err(AxonError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                line: 0,
                column: 0,
                hint: Some(format!("Expected one of: {}", allowed_values.join(", "))),
                code: Some(451),
            });
        }

        Ok(value)
    }

    /// Check that the mapping at `path` carries every required key, e.g. the
    /// parameters a population model declares mandatory.
    pub fn require_keys(&mut self, path: &str, required: &[&str]) -> Result<(), AxonError> {
        let keys = self.get_keys(path)?;
        let missing: Vec<&str> = required
            .iter()
            .filter(|k| !keys.iter().any(|have| have == *k))
            .copied()
            .collect();

        if !missing.is_empty() {
            return Err(AxonError::ValidationError {
                message: format!(
                    "Mapping '{}' is missing required keys: {}",
                    path,
                    missing.join(", ")
                ),
                line: 0,
                column: 0,
                hint: None,
                code: Some(450),
            });
        }

        Ok(())
    }
}
