use serde::Deserialize;

use super::{Envelope, TransportError};
use crate::domain::UploadedPhones;

#[derive(Debug, Clone, Deserialize)]
struct UploadWire {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    phone_numbers: Vec<String>,
    #[serde(default)]
    count: Option<usize>,
}

/// Decode the `POST /api/upload-phones` response.
pub fn decode_upload_response(json: &str) -> Result<Envelope<UploadedPhones>, TransportError> {
    let wire: UploadWire = serde_json::from_str(json)?;

    let data = if wire.success {
        Some(UploadedPhones {
            count: wire.count.unwrap_or(wire.phone_numbers.len()),
            phone_numbers: wire.phone_numbers,
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
