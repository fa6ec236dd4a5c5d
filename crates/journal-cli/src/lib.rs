//! 매매일지 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 일별 요약 출력
//! - 연승/연패 표 및 CSV 내보내기
//! - 캘린더 이벤트 및 전체 리포트 JSON 내보내기
//! - 설정 로드

pub mod commands;

pub use commands::*;
