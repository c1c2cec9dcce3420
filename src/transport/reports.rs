use serde::Deserialize;

use super::money::WireDecimal;
use super::{Envelope, TransportError};
use crate::domain::{BulkId, DeliveryReport, DeliveryStatus, Price, ReportLimit, ReportQuery};

/// Encode the query string pairs for `GET /api/reports`.
pub fn encode_reports_query(query: &ReportQuery) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    if let Some(bulk_id) = query.bulk_id() {
        params.push((BulkId::FIELD.to_owned(), bulk_id.as_str().to_owned()));
    }
    params.push((
        ReportLimit::FIELD.to_owned(),
        query.limit().value().to_string(),
    ));
    params
}

#[derive(Debug, Clone, Deserialize)]
struct ReportsWire {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    reports: Vec<ReportWire>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportWire {
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    status: Option<ReportStatusWire>,
    #[serde(default)]
    price: Option<PriceWire>,
    #[serde(default)]
    sent_at: Option<String>,
    #[serde(default)]
    done_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportStatusWire {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceWire {
    #[serde(default)]
    price_per_message: Option<WireDecimal>,
    #[serde(default)]
    currency: Option<String>,
}

/// Decode the `GET /api/reports` response.
pub fn decode_reports_response(
    json: &str,
) -> Result<Envelope<Vec<DeliveryReport>>, TransportError> {
    let wire: ReportsWire = serde_json::from_str(json)?;

    let data = if wire.success {
        let reports = wire
            .reports
            .into_iter()
            .map(|entry| {
                let (status, description) = match entry.status {
                    Some(status) => (
                        status.name.as_deref().map(DeliveryStatus::from_name),
                        status.description,
                    ),
                    None => (None, None),
                };
                // A price without an amount renders as N/A, so drop it here.
                let price = entry.price.and_then(|price| {
                    price.price_per_message.map(|amount| Price {
                        amount: amount.into_string(),
                        currency: price.currency,
                    })
                });
                DeliveryReport {
                    recipient: entry.to,
                    status,
                    description,
                    message_id: entry.message_id,
                    price,
                    sent_at: entry.sent_at,
                    done_at: entry.done_at,
                }
            })
            .collect();
        Some(reports)
    } else {
        None
    };

    Ok(Envelope {
        success: wire.success,
        error: wire.error,
        data,
    })
}
