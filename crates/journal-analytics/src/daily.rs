//! 일별 성과 요약기.
//!
//! 청산 일자(시각 무시)별로 거래를 묶어 순손익, 최대 낙폭, 평균 보유 기간을 계산합니다.
//!
//! # 예시
//!
//! ```rust,ignore
//! use journal_analytics::DailySummarizer;
//!
//! let summaries = DailySummarizer::summarize(&trades)?;
//! for day in &summaries {
//!     println!("{} {}", day.date, day.net_profit_loss);
//! }
//! ```

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use journal_core::{ClosedTrade, DailySummary, JournalError, JournalResult};
use rust_decimal::Decimal;
use tracing::debug;

/// 일자별 누적값.
#[derive(Debug, Clone)]
struct DayAccumulator {
    net_profit_loss: Decimal,
    max_drawdown: Option<Decimal>,
    total_duration: Duration,
    trade_count: usize,
}

impl Default for DayAccumulator {
    fn default() -> Self {
        Self {
            net_profit_loss: Decimal::ZERO,
            max_drawdown: None,
            total_duration: Duration::zero(),
            trade_count: 0,
        }
    }
}

impl DayAccumulator {
    fn add<T: ClosedTrade>(&mut self, trade: &T, date: NaiveDate) -> JournalResult<()> {
        let duration = trade.checked_duration()?;

        self.net_profit_loss = self
            .net_profit_loss
            .checked_add(trade.profit())
            .ok_or_else(|| JournalError::InvalidInput(format!("{date} 순손익 합계 범위 초과")))?;
        self.total_duration = self
            .total_duration
            .checked_add(&duration)
            .ok_or_else(|| JournalError::InvalidInput(format!("{date} 보유 기간 합계 범위 초과")))?;
        self.trade_count += 1;

        // 미보고 낙폭은 최대값 계산에서 제외
        if let Some(drawdown) = trade.drawdown() {
            self.max_drawdown = Some(match self.max_drawdown {
                Some(current) => current.max(drawdown),
                None => drawdown,
            });
        }

        Ok(())
    }

    fn finish(self, date: NaiveDate) -> DailySummary {
        DailySummary {
            date,
            net_profit_loss: self.net_profit_loss,
            max_drawdown: self.max_drawdown,
            avg_duration: mean_duration(self.total_duration, self.trade_count),
            trade_count: self.trade_count,
        }
    }
}

/// 평균 보유 기간.
fn mean_duration(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::zero();
    }
    match i32::try_from(count) {
        Ok(n) => total / n,
        Err(_) => Duration::seconds(total.num_seconds() / count as i64),
    }
}

/// 일별 성과 요약기.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailySummarizer;

impl DailySummarizer {
    /// 거래 목록을 청산 일자별 요약으로 변환합니다.
    ///
    /// 결과는 날짜 오름차순이며, 거래가 없는 날짜는 포함되지 않습니다.
    /// 빈 입력은 빈 결과를 반환합니다.
    ///
    /// 보유 기간이 음수인 거래가 있으면 `JournalError::InvalidDuration`,
    /// 일자별 합계가 `Decimal` 범위를 넘으면 `JournalError::InvalidInput`을 반환합니다.
    pub fn summarize<T: ClosedTrade>(trades: &[T]) -> JournalResult<Vec<DailySummary>> {
        let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

        for trade in trades {
            let date = trade.close_date();
            days.entry(date).or_default().add(trade, date)?;
        }

        debug!(trades = trades.len(), days = days.len(), "Summarized trades by close date");

        Ok(days
            .into_iter()
            .map(|(date, acc)| acc.finish(date))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use journal_core::Trade;
    use rust_decimal_macros::dec;

    fn trade(
        symbol: &str,
        open: (u32, u32, u32),
        close: (u32, u32, u32),
        profit: Decimal,
        drawdown: Option<Decimal>,
    ) -> Trade {
        let at = |(day, hour, min): (u32, u32, u32)| {
            NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(hour, min, 0)
                .unwrap()
        };
        Trade::new(symbol, at(open), at(close), profit, drawdown).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let trades: Vec<Trade> = Vec::new();
        assert!(DailySummarizer::summarize(&trades).unwrap().is_empty());
    }

    #[test]
    fn test_groups_by_close_date() {
        let trades = vec![
            trade("EURUSD", (2, 9, 0), (2, 10, 0), dec!(10), Some(dec!(1))),
            // 전날 진입, 당일 청산 → 청산일에 귀속
            trade("GBPUSD", (1, 23, 0), (2, 1, 0), dec!(-4), Some(dec!(3))),
            trade("EURUSD", (1, 9, 0), (1, 9, 30), dec!(2.5), None),
        ];

        let summaries = DailySummarizer::summarize(&trades).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].date, date(1));
        assert_eq!(summaries[0].net_profit_loss, dec!(2.5));
        assert_eq!(summaries[0].max_drawdown, None);
        assert_eq!(summaries[0].avg_duration, Duration::minutes(30));
        assert_eq!(summaries[0].trade_count, 1);

        assert_eq!(summaries[1].date, date(2));
        assert_eq!(summaries[1].net_profit_loss, dec!(6));
        assert_eq!(summaries[1].max_drawdown, Some(dec!(3)));
        assert_eq!(summaries[1].avg_duration, Duration::minutes(90));
        assert_eq!(summaries[1].trade_count, 2);
    }

    #[test]
    fn test_absent_drawdown_ignored_in_max() {
        let trades = vec![
            trade("EURUSD", (3, 9, 0), (3, 10, 0), dec!(1), None),
            trade("EURUSD", (3, 11, 0), (3, 12, 0), dec!(1), Some(dec!(4.5))),
        ];

        let summaries = DailySummarizer::summarize(&trades).unwrap();
        assert_eq!(summaries[0].max_drawdown, Some(dec!(4.5)));
    }

    #[test]
    fn test_zero_drawdown_is_reported() {
        let trades = vec![trade("EURUSD", (3, 9, 0), (3, 10, 0), dec!(1), Some(dec!(0)))];
        assert_eq!(
            DailySummarizer::summarize(&trades).unwrap()[0].max_drawdown,
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_profit_overflow_is_error() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let trades = vec![
            trade("EURUSD", (4, 9, 0), (4, 10, 0), huge, None),
            trade("GBPUSD", (4, 9, 0), (4, 11, 0), huge, None),
        ];

        let err = DailySummarizer::summarize(&trades).unwrap_err();
        assert!(matches!(err, JournalError::InvalidInput(_)));
        assert!(err.is_input_error());
    }

    /// 검증 없이 만들어진 외부 거래 타입
    struct RawTrade {
        open: NaiveDateTime,
        close: NaiveDateTime,
    }

    impl ClosedTrade for RawTrade {
        fn symbol(&self) -> &str {
            "US30"
        }

        fn profit(&self) -> Decimal {
            dec!(1)
        }

        fn drawdown(&self) -> Option<Decimal> {
            None
        }

        fn open_time(&self) -> NaiveDateTime {
            self.open
        }

        fn close_time(&self) -> NaiveDateTime {
            self.close
        }
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let close = date(6).and_hms_opt(8, 0, 0).unwrap();
        let trades = vec![RawTrade {
            open: close + Duration::hours(2),
            close,
        }];

        match DailySummarizer::summarize(&trades).unwrap_err() {
            JournalError::InvalidDuration { symbol, seconds } => {
                assert_eq!(symbol, "US30");
                assert_eq!(seconds, -7200);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mean_duration_keeps_subsecond() {
        let total = Duration::seconds(10);
        assert_eq!(mean_duration(total, 4), Duration::milliseconds(2500));
        assert_eq!(mean_duration(total, 0), Duration::zero());
    }
}
