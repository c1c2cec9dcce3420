#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a successful send call.
///
/// `successful` counts messages the gateway accepted for delivery (status
/// group `PENDING`); `failed` is the remainder of `total_sent`.
pub struct SendReceipt {
    pub bulk_id: Option<String>,
    pub successful: u32,
    pub failed: u32,
    pub total_sent: u32,
    pub messages: Vec<MessageStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-recipient result inside a send receipt.
pub struct MessageStatus {
    pub recipient: Option<String>,
    pub message_id: Option<String>,
    pub group: Option<String>,
    pub description: Option<String>,
}

impl MessageStatus {
    /// Accepted-for-delivery means the gateway queued the message.
    pub fn is_accepted(&self) -> bool {
        self.group.as_deref() == Some("PENDING")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery status reported by the gateway.
///
/// Unknown statuses are preserved verbatim in [`DeliveryStatus::Other`].
pub enum DeliveryStatus {
    Delivered,
    Pending,
    Expired,
    Rejected,
    Undeliverable,
    Other(String),
}

impl DeliveryStatus {
    /// Map a wire status name to a variant.
    pub fn from_name(name: &str) -> Self {
        match name {
            "DELIVERED" => Self::Delivered,
            "PENDING" => Self::Pending,
            "EXPIRED" => Self::Expired,
            "REJECTED" => Self::Rejected,
            "UNDELIVERABLE" => Self::Undeliverable,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The wire status name.
    pub fn name(&self) -> &str {
        match self {
            Self::Delivered => "DELIVERED",
            Self::Pending => "PENDING",
            Self::Expired => "EXPIRED",
            Self::Rejected => "REJECTED",
            Self::Undeliverable => "UNDELIVERABLE",
            Self::Other(name) => name,
        }
    }

    /// Fixed badge-class lookup used by the reports table.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Delivered => "status-success",
            Self::Pending => "status-warning",
            Self::Expired | Self::Rejected | Self::Undeliverable => "status-error",
            Self::Other(_) => "status-secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One delivery report row. Every field is nullable on the wire.
pub struct DeliveryReport {
    pub recipient: Option<String>,
    pub status: Option<DeliveryStatus>,
    pub description: Option<String>,
    pub message_id: Option<String>,
    pub price: Option<Price>,
    pub sent_at: Option<String>,
    pub done_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-message price. The amount is kept as the decimal string the server
/// sent, so `0.50` never drifts to `0.5`.
pub struct Price {
    pub amount: String,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Account balance details. All fields are optional; the renderer supplies
/// fallbacks.
pub struct BalanceInfo {
    pub account_id: Option<String>,
    pub account_name: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Phone numbers extracted server-side from an uploaded file.
pub struct UploadedPhones {
    pub phone_numbers: Vec<String>,
    pub count: usize,
}
