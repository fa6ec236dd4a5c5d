//! # Journal Core
//!
//! 매매일지 캘린더의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 워크스페이스 전반에서 사용되는 기본 타입을 제공합니다:
//! - 청산된 거래 기록 (`Trade`, `ClosedTrade`)
//! - 일별 요약 및 연승/연패 결과
//! - 캘린더 이벤트 및 차트 행
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
