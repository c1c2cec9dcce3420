use serde::{Deserialize, Serialize};

use super::{Envelope, TransportError};
use crate::domain::{MessageStatus, PhoneNumber, SendReceipt, SendSms, SenderId};

#[derive(Debug, Serialize)]
struct SendBody<'a> {
    phone_numbers: Vec<&'a str>,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender: Option<&'a str>,
}

/// Encode the JSON body for `POST /api/send-sms`.
pub fn encode_send_body(request: &SendSms) -> Result<String, TransportError> {
    let body = SendBody {
        phone_numbers: request
            .recipients()
            .iter()
            .map(PhoneNumber::as_digits)
            .collect(),
        message: request.message().as_str(),
        sender: request.sender().map(SenderId::as_str),
    };
    Ok(serde_json::to_string(&body)?)
}

#[derive(Debug, Clone, Deserialize)]
struct SendWire {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    bulk_id: Option<String>,
    #[serde(default)]
    successful: Option<u32>,
    #[serde(default)]
    failed: Option<u32>,
    #[serde(default)]
    total_sent: Option<u32>,
    #[serde(default)]
    messages: Vec<MessageWire>,
}

// Per-message entries are the gateway response passed through verbatim,
// hence the camelCase keys while the envelope itself is snake_case.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageWire {
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    status: Option<MessageStatusWire>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageStatusWire {
    #[serde(default)]
    group_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Decode the `POST /api/send-sms` response.
///
/// Count fields missing from the envelope are derived from the message
/// list (accepted means status group `PENDING`).
pub fn decode_send_response(json: &str) -> Result<Envelope<SendReceipt>, TransportError> {
    let wire: SendWire = serde_json::from_str(json)?;

    let data = if wire.success {
        let messages: Vec<MessageStatus> = wire
            .messages
            .into_iter()
            .map(|entry| {
                let (group, description) = match entry.status {
                    Some(status) => (status.group_name, status.description),
                    None => (None, None),
                };
                MessageStatus {
                    recipient: entry.to,
                    message_id: entry.message_id,
                    group,
                    description,
                }
            })
            .collect();

        let total_sent = wire.total_sent.unwrap_or(messages.len() as u32);
        let successful = wire
            .successful
            .unwrap_or_else(|| messages.iter().filter(|m| m.is_accepted()).count() as u32);
        let failed = wire
            .failed
            .unwrap_or_else(|| total_sent.saturating_sub(successful));

        Some(SendReceipt {
            bulk_id: wire.bulk_id,
            successful,
            failed,
            total_sent,
            messages,
        })
    } else {
        None
    };

    Ok(Envelope {
        success: wire.success,
        error: wire.error,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageText;

    fn request(sender: Option<&str>) -> SendSms {
        SendSms::new(
            vec![
                PhoneNumber::parse("254700000001").unwrap(),
                PhoneNumber::parse("5551234567").unwrap(),
            ],
            MessageText::new("hello there").unwrap(),
            sender.map(|s| SenderId::new(s).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn encode_uses_normalized_digits_and_omits_absent_sender() {
        let body = encode_send_body(&request(None)).unwrap();
        assert_eq!(
            body,
            r#"{"phone_numbers":["254700000001","15551234567"],"message":"hello there"}"#
        );
    }

    #[test]
    fn encode_includes_sender_when_present() {
        let body = encode_send_body(&request(Some("INFO"))).unwrap();
        assert!(body.ends_with(r#""sender":"INFO"}"#));
    }

    #[test]
    fn decode_success_with_explicit_counts() {
        let json = r#"
        {
          "success": true,
          "total_sent": 2,
          "successful": 1,
          "failed": 1,
          "bulk_id": "bulk-42",
          "messages": [
            {"to": "254700000001", "messageId": "m1", "status": {"groupName": "PENDING"}},
            {"to": "15551234567", "messageId": "m2", "status": {"groupName": "REJECTED", "description": "no route"}}
          ]
        }
        "#;

        let envelope = decode_send_response(json).unwrap();
        assert!(envelope.success);
        let receipt = envelope.data.unwrap();
        assert_eq!(receipt.bulk_id.as_deref(), Some("bulk-42"));
        assert_eq!(receipt.total_sent, 2);
        assert_eq!(receipt.successful, 1);
        assert_eq!(receipt.failed, 1);
        assert_eq!(receipt.messages.len(), 2);
        assert!(receipt.messages[0].is_accepted());
        assert_eq!(
            receipt.messages[1].description.as_deref(),
            Some("no route")
        );
    }

    #[test]
    fn decode_derives_counts_from_messages_when_absent() {
        let json = r#"
        {
          "success": true,
          "messages": [
            {"to": "254700000001", "status": {"groupName": "PENDING"}},
            {"to": "254700000002", "status": {"groupName": "PENDING"}},
            {"to": "254700000003", "status": {"groupName": "REJECTED"}}
          ]
        }
        "#;

        let receipt = decode_send_response(json).unwrap().data.unwrap();
        assert_eq!(receipt.total_sent, 3);
        assert_eq!(receipt.successful, 2);
        assert_eq!(receipt.failed, 1);
    }

    #[test]
    fn decode_failure_keeps_error_and_no_data() {
        let envelope =
            decode_send_response(r#"{"success": false, "error": "Message is required"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Message is required"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn decode_treats_missing_success_flag_as_failure() {
        let envelope = decode_send_response(r#"{"error": "No phone numbers provided"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(
            envelope.error.as_deref(),
            Some("No phone numbers provided")
        );
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(decode_send_response("{ not json }").is_err());
    }
}
