use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    NotMsisdn { input: String },
    TooManyRecipients { max: usize, actual: usize },
    LimitOutOfRange { min: u32, max: u32, actual: u32 },
    UnsupportedFileType { file_name: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => {
                write!(f, "invalid phone number: {input} (expected 10-15 digits)")
            }
            Self::NotMsisdn { input } => {
                write!(
                    f,
                    "not an MSISDN: {input} (expected + followed by 7-15 digits)"
                )
            }
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::LimitOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "report limit out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::UnsupportedFileType { file_name } => {
                write!(
                    f,
                    "unsupported file type: {file_name} (only .txt and .csv are accepted)"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "message" };
        assert_eq!(err.to_string(), "message must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "555".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid phone number: 555 (expected 10-15 digits)"
        );

        let err = ValidationError::NotMsisdn {
            input: "2547000".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "not an MSISDN: 2547000 (expected + followed by 7-15 digits)"
        );

        let err = ValidationError::TooManyRecipients {
            max: 100,
            actual: 101,
        };
        assert_eq!(err.to_string(), "too many recipients: 101 (max 100)");

        let err = ValidationError::LimitOutOfRange {
            min: 1,
            max: 1000,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "report limit out of range: 0 (expected 1..=1000)"
        );

        let err = ValidationError::UnsupportedFileType {
            file_name: "contacts.pdf".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported file type: contacts.pdf (only .txt and .csv are accepted)"
        );
    }
}
