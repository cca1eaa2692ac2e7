use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen: SocketAddr,
    pub budget: Duration,
}

/// Wire shape shared by the aggregation endpoint and every upstream source.
/// A payload without the `numbers` field decodes as empty instead of failing;
/// extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumbersPayload {
    #[serde(default)]
    pub numbers: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tolerates_extra_and_missing_fields() {
        let decoded: NumbersPayload =
            serde_json::from_str(r#"{"numbers": [1, 2], "extra": [99]}"#).unwrap();
        assert_eq!(decoded.numbers, vec![1, 2]);

        let empty: NumbersPayload = serde_json::from_str(r#"{"extra": true}"#).unwrap();
        assert!(empty.numbers.is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(serde_json::from_str::<NumbersPayload>(r#"{"numbers: 42"}"#).is_err());
    }
}
