//! Typed client-side core for a bulk SMS web application.
//!
//! The design is layered: a domain layer of strong types, a transport
//! layer for wire-format quirks, a small client layer orchestrating
//! requests, a renderer turning responses into HTML fragments, and a
//! notification queue for transient user-facing messages.
//!
//! ```rust,no_run
//! use smsfront::{MessageText, PhoneNumber, SendSms, SmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsfront::SmsError> {
//!     let client = SmsClient::new("https://sms.example.com");
//!     let phone = PhoneNumber::parse("+1 (555) 019-2345")?;
//!     let msg = MessageText::new("hello")?;
//!     let request = SendSms::single(phone, msg, None)?;
//!     let receipt = client.send_sms(request).await?;
//!     println!("accepted {}/{}", receipt.successful, receipt.total_sent);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod notify;
pub mod render;
mod transport;

pub use client::{SmsClient, SmsClientBuilder, SmsError};
pub use domain::{
    BalanceInfo, BulkId, ContactSet, DeliveryReport, DeliveryStatus, FormErrors, MessageStatus,
    MessageText, Msisdn, PhoneListUpload, PhoneNumber, Price, ReportLimit, ReportQuery,
    SendReceipt, SendSms, SenderId, UploadedPhones, ValidationError, check_required,
};
pub use notify::{Kind, Notification, NotificationId, Notifier};
