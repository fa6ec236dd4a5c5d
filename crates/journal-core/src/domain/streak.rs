//! 종목별 일간 승패 분류와 연승/연패 결과.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 일간 순손익의 부호로 정해지는 승패 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// 순손익 > 0
    Win,
    /// 순손익 < 0
    Loss,
    /// 순손익 = 0
    Neutral,
}

impl Classification {
    /// 순손익으로부터 분류를 결정합니다.
    pub fn from_net(net_profit_loss: Decimal) -> Self {
        if net_profit_loss > Decimal::ZERO {
            Self::Win
        } else if net_profit_loss < Decimal::ZERO {
            Self::Loss
        } else {
            Self::Neutral
        }
    }
}

/// (종목, 일자) 단위 순손익.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySymbolResult {
    /// 거래 심볼
    pub symbol: String,
    /// 청산 일자
    pub date: NaiveDate,
    /// 순손익
    pub net_profit_loss: Decimal,
}

impl DailySymbolResult {
    /// 이 결과의 승패 분류.
    pub fn classification(&self) -> Classification {
        Classification::from_net(self.net_profit_loss)
    }
}

/// 종목별 최장 연승/연패 (거래일 수).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    /// 거래 심볼
    pub symbol: String,
    /// 최장 연승 일수 (승리일이 없으면 0)
    pub max_win_streak: u32,
    /// 최장 연패 일수 (패배일이 없으면 0)
    pub max_loss_streak: u32,
    /// 거래가 있었던 서로 다른 일자 수
    pub trading_days: u32,
}

impl StreakResult {
    /// 지정한 유형의 연속 일수.
    pub fn days(&self, streak_type: StreakType) -> u32 {
        match streak_type {
            StreakType::MaxWinStreak => self.max_win_streak,
            StreakType::MaxLossStreak => self.max_loss_streak,
        }
    }
}

/// 차트 행의 연속 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreakType {
    MaxWinStreak,
    MaxLossStreak,
}

impl StreakType {
    /// 차트 범례에 표시할 이름.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MaxWinStreak => "Max Win Streak",
            Self::MaxLossStreak => "Max Loss Streak",
        }
    }
}

impl fmt::Display for StreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 막대 차트용 long-format 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    /// 거래 심볼
    pub symbol: String,
    /// 연속 유형
    pub streak_type: StreakType,
    /// 연속 일수
    pub days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_classification_sign_rule() {
        assert_eq!(Classification::from_net(dec!(0.01)), Classification::Win);
        assert_eq!(Classification::from_net(dec!(-0.01)), Classification::Loss);
        assert_eq!(Classification::from_net(dec!(0)), Classification::Neutral);
        assert_eq!(Classification::from_net(dec!(0.000)), Classification::Neutral);
    }

    #[test]
    fn test_streak_result_days() {
        let result = StreakResult {
            symbol: "EURUSD".to_string(),
            max_win_streak: 2,
            max_loss_streak: 1,
            trading_days: 4,
        };
        assert_eq!(result.days(StreakType::MaxWinStreak), 2);
        assert_eq!(result.days(StreakType::MaxLossStreak), 1);
        assert_eq!(StreakType::MaxLossStreak.to_string(), "Max Loss Streak");
    }
}
