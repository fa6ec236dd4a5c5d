//! 청산된 포지션 기록.
//!
//! - `ClosedTrade` - 집계에 필요한 정보를 제공하는 trait
//! - `Trade` - 검증을 통과한 거래 기록

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::{JournalError, JournalResult};

/// 청산된 거래 정보를 제공하는 trait.
///
/// 일별 요약과 연승/연패 분석은 이 trait만 사용하므로,
/// 다른 거래 타입도 구현만 하면 같은 집계를 재사용할 수 있습니다.
pub trait ClosedTrade {
    /// 거래 심볼.
    fn symbol(&self) -> &str;

    /// 실현 손익 (음수 = 손실).
    fn profit(&self) -> Decimal;

    /// 보고된 낙폭.
    ///
    /// # Returns
    ///
    /// - `Some(dd)`: 낙폭이 보고된 거래
    /// - `None`: 미보고 (0과 구분됨)
    fn drawdown(&self) -> Option<Decimal>;

    /// 진입 시각.
    fn open_time(&self) -> NaiveDateTime;

    /// 청산 시각.
    fn close_time(&self) -> NaiveDateTime;

    /// 보유 기간.
    fn duration(&self) -> Duration {
        self.close_time().signed_duration_since(self.open_time())
    }

    /// 청산 일자 (시각 무시).
    fn close_date(&self) -> NaiveDate {
        self.close_time().date()
    }

    /// 검증된 보유 기간.
    ///
    /// 청산 시각이 진입 시각보다 앞서면 `JournalError::InvalidDuration`을 반환합니다.
    fn checked_duration(&self) -> JournalResult<Duration> {
        let duration = self.duration();
        if duration < Duration::zero() {
            return Err(JournalError::InvalidDuration {
                symbol: self.symbol().to_string(),
                seconds: duration.num_seconds(),
            });
        }
        Ok(duration)
    }
}

/// 검증된 거래 기록.
///
/// `Trade::new`로만 생성되며 보유 기간은 항상 0 이상입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    symbol: String,
    open_time: NaiveDateTime,
    close_time: NaiveDateTime,
    profit: Decimal,
    drawdown: Option<Decimal>,
    duration: Duration,
}

impl Trade {
    /// 새 거래 기록을 생성합니다.
    ///
    /// 청산 시각이 진입 시각보다 앞서면 `JournalError::InvalidDuration`을 반환합니다.
    pub fn new(
        symbol: impl Into<String>,
        open_time: NaiveDateTime,
        close_time: NaiveDateTime,
        profit: Decimal,
        drawdown: Option<Decimal>,
    ) -> JournalResult<Self> {
        let symbol = symbol.into();
        let duration = close_time.signed_duration_since(open_time);

        if duration < Duration::zero() {
            return Err(JournalError::InvalidDuration {
                symbol,
                seconds: duration.num_seconds(),
            });
        }

        Ok(Self {
            symbol,
            open_time,
            close_time,
            profit,
            drawdown,
            duration,
        })
    }
}

impl ClosedTrade for Trade {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn profit(&self) -> Decimal {
        self.profit
    }

    fn drawdown(&self) -> Option<Decimal> {
        self.drawdown
    }

    fn open_time(&self) -> NaiveDateTime {
        self.open_time
    }

    fn close_time(&self) -> NaiveDateTime {
        self.close_time
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}
