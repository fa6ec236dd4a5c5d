//! 일별 성과 요약.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 청산 일자 하나에 대한 성과 요약.
///
/// 거래가 있었던 날짜에 대해서만 생성됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// 청산 일자
    pub date: NaiveDate,
    /// 순손익 (해당 일자 청산 거래의 손익 합계)
    pub net_profit_loss: Decimal,
    /// 최대 낙폭 (보고된 값이 하나도 없으면 None)
    pub max_drawdown: Option<Decimal>,
    /// 평균 보유 기간 (직렬화 시 정수 초)
    #[serde(with = "crate::types::duration_secs")]
    pub avg_duration: Duration,
    /// 해당 일자 거래 수
    pub trade_count: usize,
}
