use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Canonical validated phone number, stored as bare digits.
///
/// Invariants: after stripping every non-digit character the input keeps
/// 10 to 15 digits. A bare 10-digit number without a leading `1` is
/// normalized by prepending `1` (NANP local numbers).
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Form field name expected by the web forms (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Minimum digit count accepted.
    pub const MIN_DIGITS: usize = 10;
    /// Maximum digit count accepted.
    pub const MAX_DIGITS: usize = 15;

    /// Parse and normalize a phone number.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let input = input.as_ref();
        if input.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let mut digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: input.trim().to_owned(),
            });
        }

        if digits.len() == Self::MIN_DIGITS && !digits.starts_with('1') {
            digits.insert(0, '1');
        }

        Ok(Self(digits))
    }

    /// Whether `input` passes the canonical rule, without constructing.
    pub fn is_valid(input: &str) -> bool {
        let digits = input.chars().filter(char::is_ascii_digit).count();
        (Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits)
    }

    /// The normalized digit string.
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Strict international number: `+` followed by 7 to 15 digits.
///
/// This is the form the SMS gateway accepts directly. Use [`PhoneNumber`]
/// for lenient form input; use this type when the caller already holds an
/// E.164-shaped value (or wants one via [`Msisdn::parse_with_region`]).
pub struct Msisdn(String);

impl Msisdn {
    /// Minimum digit count after the `+`.
    pub const MIN_DIGITS: usize = 7;
    /// Maximum digit count after the `+`.
    pub const MAX_DIGITS: usize = 15;

    /// Validate a strict `+<digits>` number.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let input = input.as_ref();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: PhoneNumber::FIELD,
            });
        }

        let not_msisdn = || ValidationError::NotMsisdn {
            input: trimmed.to_owned(),
        };
        let digits = trimmed.strip_prefix('+').ok_or_else(not_msisdn)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_msisdn());
        }
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(not_msisdn());
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Normalize free-form input to E.164 via the `phonenumber` crate,
    /// then apply the strict rule.
    ///
    /// `default_region` is used when the input lacks a country prefix.
    pub fn parse_with_region(
        default_region: Option<country::Id>,
        input: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let input = input.as_ref();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: PhoneNumber::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, trimmed).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            }
        })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Self::parse(e164)
    }

    /// The `+<digits>` value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Msisdn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body.
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name expected by the web forms (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Custom sender id attached to outgoing messages.
///
/// Invariant: non-empty after trimming.
pub struct SenderId(String);

impl SenderId {
    /// Form field name expected by the web forms (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Bulk id returned by a send and used to filter delivery reports.
///
/// Invariant: non-empty after trimming.
pub struct BulkId(String);

impl BulkId {
    /// Form field name expected by the web forms (`bulk_id`).
    pub const FIELD: &'static str = "bulk_id";

    /// Create a validated [`BulkId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated bulk id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Maximum number of delivery reports to fetch (`limit`).
///
/// Invariant: `1..=1000`. Defaults to 50.
pub struct ReportLimit(u32);

impl ReportLimit {
    /// Form field name expected by the web forms (`limit`).
    pub const FIELD: &'static str = "limit";

    /// Minimum allowed limit.
    pub const MIN: u32 = 1;
    /// Maximum allowed limit.
    pub const MAX: u32 = 1000;
    /// Limit applied when the form leaves the field blank.
    pub const DEFAULT: u32 = 50;

    /// Create a validated limit.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::LimitOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying limit.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for ReportLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_strips_separators_and_keeps_digits() {
        let pn = PhoneNumber::parse("+1 (555) 123-4567").unwrap();
        assert_eq!(pn.as_digits(), "15551234567");
    }

    #[test]
    fn phone_number_prepends_one_for_bare_ten_digit_numbers() {
        let pn = PhoneNumber::parse("5551234567").unwrap();
        assert_eq!(pn.as_digits(), "15551234567");
        assert_eq!(pn.as_digits().len(), 11);

        // A 10-digit number already starting with 1 is left alone.
        let pn = PhoneNumber::parse("1555123456").unwrap();
        assert_eq!(pn.as_digits(), "1555123456");
    }

    #[test]
    fn phone_number_rejects_out_of_range_digit_counts() {
        assert!(PhoneNumber::parse("555123").is_err());
        assert!(PhoneNumber::parse("123456789").is_err());
        assert!(PhoneNumber::parse("1234567890123456").is_err());
        assert!(matches!(
            PhoneNumber::parse("   "),
            Err(ValidationError::Empty {
                field: PhoneNumber::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_is_valid_matches_parse() {
        assert!(PhoneNumber::is_valid("254700000000"));
        assert!(PhoneNumber::is_valid("(555) 123-4567"));
        assert!(!PhoneNumber::is_valid("555-1234"));
        assert!(!PhoneNumber::is_valid("1234567890123456"));
    }

    #[test]
    fn msisdn_requires_plus_and_seven_to_fifteen_digits() {
        assert_eq!(
            Msisdn::parse(" +254700000000 ").unwrap().as_str(),
            "+254700000000"
        );
        assert!(Msisdn::parse("+1234567").is_ok());
        assert!(Msisdn::parse("+123456789012345").is_ok());

        assert!(Msisdn::parse("254700000000").is_err());
        assert!(Msisdn::parse("+123456").is_err());
        assert!(Msisdn::parse("+1234567890123456").is_err());
        assert!(Msisdn::parse("+2547abc0000").is_err());
        assert!(Msisdn::parse("+").is_err());
    }

    #[test]
    fn msisdn_parse_with_region_normalizes_to_e164() {
        let m = Msisdn::parse_with_region(Some(country::Id::US), "(925) 123-4567").unwrap();
        assert_eq!(m.as_str(), "+19251234567");

        let m = Msisdn::parse_with_region(None, "+7 925 123-45-67").unwrap();
        assert_eq!(m.as_str(), "+79251234567");

        assert!(Msisdn::parse_with_region(None, "not-a-number").is_err());
    }

    #[test]
    fn message_text_rejects_blank_but_preserves_whitespace() {
        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(matches!(
            MessageText::new("   "),
            Err(ValidationError::Empty {
                field: MessageText::FIELD
            })
        ));
    }

    #[test]
    fn sender_and_bulk_id_trim_and_reject_empty() {
        assert_eq!(SenderId::new(" INFO ").unwrap().as_str(), "INFO");
        assert!(SenderId::new("  ").is_err());

        assert_eq!(BulkId::new(" abc-123 ").unwrap().as_str(), "abc-123");
        assert!(BulkId::new("").is_err());
    }

    #[test]
    fn report_limit_enforces_range_and_defaults_to_fifty() {
        assert!(ReportLimit::new(ReportLimit::MIN).is_ok());
        assert!(ReportLimit::new(ReportLimit::MAX).is_ok());
        assert!(ReportLimit::new(0).is_err());
        assert!(ReportLimit::new(ReportLimit::MAX + 1).is_err());
        assert_eq!(ReportLimit::default().value(), 50);
    }
}
