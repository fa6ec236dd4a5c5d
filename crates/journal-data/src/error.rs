//! 적재 모듈 오류 타입.

use journal_core::JournalError;
use thiserror::Error;

/// 거래 기록 적재 오류.
///
/// 행 단위 오류가 하나라도 있으면 전체 적재가 거부됩니다 (부분 결과 없음).
#[derive(Debug, Error)]
pub enum LoadError {
    /// 필수 컬럼 누락
    #[error("Schema error: missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// 값 파싱 실패 (row는 헤더 다음 행을 1로 하는 데이터 행 번호)
    #[error("Parse error at row {row}: invalid {column} value '{value}' ({reason})")]
    Parse {
        row: u64,
        column: &'static str,
        value: String,
        reason: String,
    },

    /// 청산 시각이 진입 시각보다 앞섬
    #[error("Invalid duration at row {row}: {symbol} has negative duration {seconds}s")]
    InvalidDuration { row: u64, symbol: String, seconds: i64 },

    /// CSV 리더 오류 (I/O, 따옴표 오류, 필드 수 불일치)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 적재 설정 오류
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoadError {
    /// 오류가 발생한 데이터 행 번호.
    pub fn row(&self) -> Option<u64> {
        match self {
            LoadError::Parse { row, .. } | LoadError::InvalidDuration { row, .. } => Some(*row),
            LoadError::Csv(err) => err.position().map(|pos| pos.record()),
            LoadError::Schema { .. } | LoadError::Config(_) => None,
        }
    }
}

impl From<LoadError> for JournalError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Config(message) => JournalError::Config(message),
            other => JournalError::Data(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
