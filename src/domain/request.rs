use crate::domain::validation::ValidationError;
use crate::domain::value::{BulkId, MessageText, PhoneNumber, ReportLimit, SenderId};

/// Upper bound on recipients per send, matching the gateway contract.
pub const SEND_MAX_RECIPIENTS: usize = 100;

/// File extensions accepted for phone-list uploads.
pub const UPLOAD_EXTENSIONS: [&str; 2] = ["txt", "csv"];

#[derive(Debug, Clone)]
/// A validated send request: non-empty recipients (at most
/// [`SEND_MAX_RECIPIENTS`]), a message, and an optional sender override.
pub struct SendSms {
    recipients: Vec<PhoneNumber>,
    message: MessageText,
    sender: Option<SenderId>,
}

impl SendSms {
    /// Build a validated send request.
    pub fn new(
        recipients: Vec<PhoneNumber>,
        message: MessageText,
        sender: Option<SenderId>,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: PhoneNumber::FIELD,
            });
        }
        if recipients.len() > SEND_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self {
            recipients,
            message,
            sender,
        })
    }

    /// Convenience constructor for a single recipient.
    pub fn single(
        recipient: PhoneNumber,
        message: MessageText,
        sender: Option<SenderId>,
    ) -> Result<Self, ValidationError> {
        Self::new(vec![recipient], message, sender)
    }

    pub fn recipients(&self) -> &[PhoneNumber] {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn sender(&self) -> Option<&SenderId> {
        self.sender.as_ref()
    }

    /// Replace an absent sender with `default`; an explicit sender wins.
    pub fn or_sender(mut self, default: Option<&SenderId>) -> Self {
        if self.sender.is_none() {
            self.sender = default.cloned();
        }
        self
    }
}

#[derive(Debug, Clone, Default)]
/// Query parameters for the delivery-reports endpoint.
pub struct ReportQuery {
    bulk_id: Option<BulkId>,
    limit: ReportLimit,
}

impl ReportQuery {
    /// Reports filtered to a single bulk send.
    pub fn for_bulk(bulk_id: BulkId) -> Self {
        Self {
            bulk_id: Some(bulk_id),
            limit: ReportLimit::default(),
        }
    }

    /// Override the report limit.
    pub fn with_limit(mut self, limit: ReportLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn bulk_id(&self) -> Option<&BulkId> {
        self.bulk_id.as_ref()
    }

    pub fn limit(&self) -> ReportLimit {
        self.limit
    }
}

#[derive(Debug, Clone)]
/// A phone-list file staged for upload.
///
/// Invariant: the file name carries a `.txt` or `.csv` extension
/// (case-insensitive). The contents are passed through untouched; parsing
/// happens server-side.
pub struct PhoneListUpload {
    file_name: String,
    contents: Vec<u8>,
}

impl PhoneListUpload {
    /// Multipart field name expected by the upload endpoint.
    pub const FIELD: &'static str = "file";

    /// Stage a file, rejecting unsupported extensions up front.
    pub fn new(file_name: impl Into<String>, contents: Vec<u8>) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        let trimmed = file_name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let lowered = trimmed.to_ascii_lowercase();
        let accepted = UPLOAD_EXTENSIONS
            .iter()
            .any(|ext| lowered.ends_with(&format!(".{ext}")));
        if !accepted {
            return Err(ValidationError::UnsupportedFileType {
                file_name: trimmed.to_owned(),
            });
        }

        Ok(Self {
            file_name: trimmed.to_owned(),
            contents,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.file_name, self.contents)
    }
}
