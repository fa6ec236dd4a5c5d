//! `chrono::Duration`을 정수 초 단위로 직렬화하는 serde 어댑터.
//!
//! 소수 초는 0 방향으로 버립니다.
//!
//! ```rust,ignore
//! #[serde(with = "journal_core::duration_secs")]
//! pub avg_duration: Duration,
//! ```

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(duration.num_seconds())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = i64::deserialize(deserializer)?;
    Duration::try_seconds(seconds)
        .ok_or_else(|| serde::de::Error::custom(format!("duration out of range: {seconds}s")))
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        value: Duration,
    }

    #[test]
    fn test_truncates_fraction() {
        let holder = Holder {
            value: Duration::milliseconds(5_400_999),
        };
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"value":5400}"#);
    }

    #[test]
    fn test_deserialize_seconds() {
        let holder: Holder = serde_json::from_str(r#"{"value":108000}"#).unwrap();
        assert_eq!(holder.value, Duration::hours(30));
    }
}
