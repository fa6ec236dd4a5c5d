//! 매매일지 분석을 위한 도메인 모델.

mod calendar;
mod daily;
mod streak;
mod trade;

pub use calendar::*;
pub use daily::*;
pub use streak::*;
pub use trade::*;
