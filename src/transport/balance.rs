use serde::Deserialize;

use super::money::WireDecimal;
use super::{Envelope, TransportError};
use crate::domain::BalanceInfo;

#[derive(Debug, Clone, Deserialize)]
struct BalanceWire {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    balance: Option<BalanceInfoWire>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceInfoWire {
    #[serde(default)]
    account_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    // The gateway reports the amount as `amount`; the web backend
    // historically forwarded it as `balance`. Accept both.
    #[serde(default, alias = "amount")]
    balance: Option<WireDecimal>,
    #[serde(default)]
    currency: Option<String>,
}

/// Decode the `GET /api/balance` response.
pub fn decode_balance_response(json: &str) -> Result<Envelope<BalanceInfo>, TransportError> {
    let wire: BalanceWire = serde_json::from_str(json)?;

    let data = if wire.success {
        let info = wire.balance.map_or_else(BalanceInfo::default, |inner| {
            BalanceInfo {
                account_id: inner.account_id,
                account_name: inner.name,
                amount: inner.balance.map(WireDecimal::into_string),
                currency: inner.currency,
            }
        });
        Some(info)
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

    #[test]
    fn decode_full_balance_payload() {
        let json = r#"
        {
          "success": true,
          "balance": {
            "accountId": "acc-7",
            "name": "Acme Alerts",
            "balance": 120.50,
            "currency": "EUR"
          }
        }
        "#;

        let info = decode_balance_response(json).unwrap().data.unwrap();
        assert_eq!(info.account_id.as_deref(), Some("acc-7"));
        assert_eq!(info.account_name.as_deref(), Some("Acme Alerts"));
        assert_eq!(info.amount.as_deref(), Some("120.50"));
        assert_eq!(info.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn decode_accepts_gateway_amount_key() {
        let json = r#"{"success": true, "balance": {"amount": "9.99", "currency": "USD"}}"#;
        let info = decode_balance_response(json).unwrap().data.unwrap();
        assert_eq!(info.amount.as_deref(), Some("9.99"));
        assert!(info.account_id.is_none());
    }

    #[test]
    fn decode_success_without_balance_object_yields_empty_info() {
        let info = decode_balance_response(r#"{"success": true}"#).unwrap().data.unwrap();
        assert_eq!(info, BalanceInfo::default());
    }

    #[test]
    fn decode_failure_keeps_server_message() {
        let envelope = decode_balance_response(
            r#"{"success": false, "error": "Balance checking requires additional API permissions."}"#,
        )
        .unwrap();
        assert!(!envelope.success);
        assert!(envelope.error.unwrap().starts_with("Balance checking"));
        assert!(envelope.data.is_none());
    }
}
