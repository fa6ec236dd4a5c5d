//! 매매일지 시스템의 에러 타입.
//!
//! 이 모듈은 워크스페이스 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 매매일지 에러.
#[derive(Debug, Error)]
pub enum JournalError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터 적재 에러
    #[error("데이터 에러: {0}")]
    Data(String),

    /// 청산 시각이 진입 시각보다 앞섬
    #[error("음수 보유 기간: {symbol} ({seconds}초)")]
    InvalidDuration {
        /// 거래 심볼
        symbol: String,
        /// 보유 기간 (초, 음수)
        seconds: i64,
    },

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 매매일지 작업을 위한 Result 타입.
pub type JournalResult<T> = Result<T, JournalError>;

impl JournalError {
    /// 입력 데이터 문제로 발생한 에러인지 확인합니다.
    ///
    /// 입력 에러는 재시도로 해결되지 않으며 원본 파일을 고쳐야 합니다.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            JournalError::Data(_) | JournalError::InvalidDuration { .. } | JournalError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for JournalError {
    fn from(err: config::ConfigError) -> Self {
        JournalError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors() {
        let err = JournalError::InvalidDuration {
            symbol: "EURUSD".to_string(),
            seconds: -60,
        };
        assert!(err.is_input_error());
        assert!(err.to_string().contains("EURUSD"));

        let data_err = JournalError::Data("missing column".to_string());
        assert!(data_err.is_input_error());
    }

    #[test]
    fn test_non_input_errors() {
        let config_err = JournalError::Config("bad delimiter".to_string());
        assert!(!config_err.is_input_error());

        let json_err: JournalError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(json_err, JournalError::Serialization(_)));
        assert!(!json_err.is_input_error());
    }

    #[test]
    fn test_config_error_conversion() {
        let err: JournalError = crate::JournalConfig::load("no/such/journal.toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, JournalError::Config(_)));
        assert!(err.to_string().starts_with("설정 에러"));
    }
}
