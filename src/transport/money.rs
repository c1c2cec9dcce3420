use serde::Deserialize;
use serde::de::Error as DeError;

/// Decimal field that arrives as either a JSON string or JSON number.
///
/// Numeric tokens are kept verbatim so `10.00` stays `"10.00"` instead of
/// drifting to `"10.0"` through an f64 round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireDecimal(String);

impl WireDecimal {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for WireDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected a decimal as JSON string or number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WireDecimal;

    #[derive(serde::Deserialize)]
    struct Holder {
        amount: WireDecimal,
    }

    #[test]
    fn preserves_trailing_zeros_on_numbers() {
        let holder: Holder = serde_json::from_str(r#"{"amount": 10.00}"#).unwrap();
        assert_eq!(holder.amount.into_string(), "10.00");
    }

    #[test]
    fn accepts_strings_and_negative_numbers() {
        let holder: Holder = serde_json::from_str(r#"{"amount": "0.50"}"#).unwrap();
        assert_eq!(holder.amount.into_string(), "0.50");

        let holder: Holder = serde_json::from_str(r#"{"amount": -3.25}"#).unwrap();
        assert_eq!(holder.amount.into_string(), "-3.25");
    }

    #[test]
    fn rejects_non_decimal_tokens() {
        assert!(serde_json::from_str::<Holder>(r#"{"amount": true}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"amount": {}}"#).is_err());
    }
}
