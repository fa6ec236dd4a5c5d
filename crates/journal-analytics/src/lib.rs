//! 매매일지 성과 분석.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 청산 일자별 성과 요약 ([`DailySummarizer`])
//! - 종목별 연승/연패 분석 ([`StreakAnalyzer`])
//! - 캘린더 이벤트 변환 ([`EventFormatter`])
//! - 전체 파이프라인 결과 묶음 ([`PerformanceReport`])
//!
//! 모든 연산은 동기식 순수 함수이며 입력 순서와 무관하게 같은 결과를 냅니다.

pub mod calendar;
pub mod daily;
pub mod report;
pub mod streak;

pub use calendar::{format_duration_hms, EventFormatter};
pub use daily::DailySummarizer;
pub use report::PerformanceReport;
pub use streak::StreakAnalyzer;
