use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Every required field that was blank in one form check.
///
/// The field names are kept so a caller can mark each offending input,
/// not just the first one found.
pub struct FormErrors {
    missing: Vec<String>,
}

impl FormErrors {
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn contains(&self, field: &str) -> bool {
        self.missing.iter().any(|name| name == field)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required fields are empty: {}", self.missing.join(", "))
    }
}

impl std::error::Error for FormErrors {}

/// Check that every required `(field, value)` pair is non-blank after
/// trimming. On failure the error names all blank fields.
pub fn check_required(fields: &[(&str, &str)]) -> Result<(), FormErrors> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| (*name).to_owned())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormErrors { missing })
    }
}
