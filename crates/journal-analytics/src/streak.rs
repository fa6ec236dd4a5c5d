//! 종목별 연승/연패 분석기.
//!
//! 종목마다 (종목, 청산 일자) 단위로 손익을 합산하고, 날짜순으로 정렬한 일간 결과에서
//! 같은 분류(승/패/무)가 연속된 최장 구간을 찾습니다.
//!
//! # 개념
//!
//! - **연속**: 거래가 있었던 날짜의 순서상 연속 (달력상 공백은 연속을 끊지 않음)
//! - **무승부(순손익 0)**: 연승/연패 어느 쪽에도 포함되지 않으며 진행 중인 구간을 끊음
//!
//! # 예시
//!
//! ```rust,ignore
//! use journal_analytics::StreakAnalyzer;
//!
//! let streaks = StreakAnalyzer::analyze(&trades)?;
//! let rows = StreakAnalyzer::chart_rows(&streaks);
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use journal_core::{
    symbol_span, ChartRow, Classification, ClosedTrade, DailySymbolResult, JournalError,
    JournalResult, StreakResult, StreakType,
};
use rust_decimal::Decimal;
use tracing::debug;

/// 종목별 연승/연패 분석기.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakAnalyzer;

impl StreakAnalyzer {
    /// (종목, 청산 일자)별 순손익을 계산합니다.
    ///
    /// 결과는 종목 오름차순, 같은 종목 안에서는 날짜 오름차순입니다.
    pub fn daily_symbol_results<T: ClosedTrade>(
        trades: &[T],
    ) -> JournalResult<Vec<DailySymbolResult>> {
        Ok(group_by_symbol(trades)?
            .into_iter()
            .flat_map(|(symbol, days)| {
                days.into_iter().map(move |(date, net_profit_loss)| DailySymbolResult {
                    symbol: symbol.to_string(),
                    date,
                    net_profit_loss,
                })
            })
            .collect())
    }

    /// 종목별 최장 연승/연패를 계산합니다.
    ///
    /// 거래가 하나 이상 있는 종목마다 결과 하나를 종목 오름차순으로 반환합니다.
    pub fn analyze<T: ClosedTrade>(trades: &[T]) -> JournalResult<Vec<StreakResult>> {
        Ok(group_by_symbol(trades)?
            .into_iter()
            .map(|(symbol, days)| {
                let _span = symbol_span!("streak", symbol).entered();

                // BTreeMap 순회 순서가 곧 날짜 오름차순
                let classes: Vec<Classification> =
                    days.values().copied().map(Classification::from_net).collect();
                let (max_win_streak, max_loss_streak) = Self::longest_runs(&classes);

                debug!(
                    trading_days = classes.len(),
                    max_win_streak, max_loss_streak, "Streaks computed"
                );

                StreakResult {
                    symbol: symbol.to_string(),
                    max_win_streak,
                    max_loss_streak,
                    trading_days: u32::try_from(classes.len()).unwrap_or(u32::MAX),
                }
            })
            .collect())
    }

    /// 분류 시퀀스에서 최장 승리 구간과 최장 패배 구간의 길이를 찾습니다.
    ///
    /// 첫 원소가 첫 구간을 시작하고, 분류가 바뀔 때마다 새 구간이 시작됩니다.
    pub fn longest_runs(classes: &[Classification]) -> (u32, u32) {
        let mut max_win = 0u32;
        let mut max_loss = 0u32;
        let mut current: Option<Classification> = None;
        let mut run = 0u32;

        for &class in classes {
            if current == Some(class) {
                run = run.saturating_add(1);
            } else {
                current = Some(class);
                run = 1;
            }

            match class {
                Classification::Win => max_win = max_win.max(run),
                Classification::Loss => max_loss = max_loss.max(run),
                Classification::Neutral => {}
            }
        }

        (max_win, max_loss)
    }

    /// 연승/연패 결과를 long-format 차트 행으로 펼칩니다.
    ///
    /// 모든 종목의 `MaxWinStreak` 행이 먼저, 그 다음 모든 종목의 `MaxLossStreak` 행이
    /// 나옵니다. 각 묶음 안에서는 입력 순서(종목 오름차순)를 유지합니다.
    pub fn chart_rows(streaks: &[StreakResult]) -> Vec<ChartRow> {
        [StreakType::MaxWinStreak, StreakType::MaxLossStreak]
            .into_iter()
            .flat_map(|streak_type| {
                streaks.iter().map(move |result| ChartRow {
                    symbol: result.symbol.clone(),
                    streak_type,
                    days: result.days(streak_type),
                })
            })
            .collect()
    }
}

type SymbolDays<'a> = BTreeMap<&'a str, BTreeMap<NaiveDate, Decimal>>;

/// 종목 → 일자 → 순손익.
fn group_by_symbol<T: ClosedTrade>(trades: &[T]) -> JournalResult<SymbolDays<'_>> {
    let mut symbols: SymbolDays<'_> = BTreeMap::new();

    for trade in trades {
        trade.checked_duration()?;

        let date = trade.close_date();
        let net = symbols
            .entry(trade.symbol())
            .or_default()
            .entry(date)
            .or_insert(Decimal::ZERO);
        *net = net.checked_add(trade.profit()).ok_or_else(|| {
            JournalError::InvalidInput(format!("{} {date} 순손익 합계 범위 초과", trade.symbol()))
        })?;
    }

    Ok(symbols)
}
