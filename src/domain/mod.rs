//! Domain layer: strong types with validation and invariants (no I/O).

mod contacts;
mod form;
mod request;
mod response;
mod validation;
mod value;

pub use contacts::{ContactSet, parse_contact_lines};
pub use form::{FormErrors, check_required};
pub use request::{
    PhoneListUpload, ReportQuery, SEND_MAX_RECIPIENTS, SendSms, UPLOAD_EXTENSIONS,
};
pub use response::{
    BalanceInfo, DeliveryReport, DeliveryStatus, MessageStatus, Price, SendReceipt, UploadedPhones,
};
pub use validation::ValidationError;
pub use value::{BulkId, MessageText, Msisdn, PhoneNumber, ReportLimit, SenderId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_text_rejects_empty() {
        assert!(matches!(
            MessageText::new("   "),
            Err(ValidationError::Empty {
                field: MessageText::FIELD
            })
        ));
    }

    #[test]
    fn ten_digit_input_normalizes_to_eleven_digits() {
        let pn = PhoneNumber::parse("7005550101").unwrap();
        assert_eq!(pn.as_digits(), "17005550101");
    }

    #[test]
    fn canonical_and_strict_validators_disagree_where_documented() {
        // Bare digits pass the canonical rule but fail the strict one.
        assert!(PhoneNumber::parse("254700000000").is_ok());
        assert!(Msisdn::parse("254700000000").is_err());

        // Short international numbers pass the strict rule but fail the
        // canonical one.
        assert!(Msisdn::parse("+1234567").is_ok());
        assert!(PhoneNumber::parse("+1234567").is_err());
    }

    #[test]
    fn send_sms_recipient_limit_is_enforced() {
        let pn = PhoneNumber::parse("254700000000").unwrap();
        let msg = MessageText::new("hi").unwrap();
        let recipients = vec![pn; SEND_MAX_RECIPIENTS + 1];
        let err = SendSms::new(recipients, msg, None).unwrap_err();
        assert!(matches!(err, ValidationError::TooManyRecipients { .. }));
    }

    #[test]
    fn report_limit_range_is_enforced() {
        assert!(ReportLimit::new(0).is_err());
        assert!(ReportLimit::new(1).is_ok());
        assert!(ReportLimit::new(1000).is_ok());
        assert!(ReportLimit::new(1001).is_err());
    }

    #[test]
    fn contact_set_prefers_uploaded_numbers() {
        let mut contacts = ContactSet::new();
        contacts.set_manual_lines("254711111111");
        contacts.load_uploaded(["254700000001"]);
        assert_eq!(contacts.effective()[0].as_digits(), "254700000001");
    }
}
