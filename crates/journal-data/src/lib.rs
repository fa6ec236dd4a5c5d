//! 거래 기록 적재 및 검증.
//!
//! 이 crate는 다음을 제공합니다:
//! - CSV 거래 내역을 검증된 `Trade` 목록으로 변환하는 `RecordLoader`
//! - 여러 날짜/시각 표기를 처리하는 `DateTimeParser`
//! - 스키마/파싱/보유 기간 에러 분류 (`LoadError`)

pub mod datetime;
pub mod error;
pub mod loader;

pub use datetime::DateTimeParser;
pub use error::{LoadError, Result};
pub use loader::{RecordLoader, REQUIRED_COLUMNS};
