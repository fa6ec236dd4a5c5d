//! 성과 리포트.
//!
//! 적재 → 일별 요약/연승·연패 분석 → 이벤트 변환 전체 파이프라인 결과를 하나로 묶습니다.

use std::io::Read;
use std::path::Path;

use journal_core::{
    CalendarConfig, CalendarEvent, CalendarOptions, ChartRow, ClosedTrade, DailySummary,
    JournalConfig, JournalResult, StreakResult,
};
use journal_data::RecordLoader;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calendar::EventFormatter;
use crate::daily::DailySummarizer;
use crate::streak::StreakAnalyzer;

/// 캘린더와 연승/연패 차트에 필요한 모든 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// 일별 요약 (날짜 오름차순)
    pub daily_summaries: Vec<DailySummary>,
    /// 종목별 연승/연패 (종목 오름차순)
    pub streaks: Vec<StreakResult>,
    /// 막대 차트 행
    pub chart_rows: Vec<ChartRow>,
    /// 캘린더 이벤트
    pub events: Vec<CalendarEvent>,
    /// 캘린더 위젯 옵션
    pub calendar_options: CalendarOptions,
}

impl PerformanceReport {
    /// 메모리 내 거래 목록으로 리포트를 생성합니다.
    pub fn build<T: ClosedTrade>(trades: &[T], calendar: &CalendarConfig) -> JournalResult<Self> {
        let formatter = EventFormatter::new(calendar.clone());

        let daily_summaries = DailySummarizer::summarize(trades)?;
        let streaks = StreakAnalyzer::analyze(trades)?;
        let chart_rows = StreakAnalyzer::chart_rows(&streaks);
        let events = formatter.format(&daily_summaries);

        info!(
            trades = trades.len(),
            days = daily_summaries.len(),
            symbols = streaks.len(),
            "Performance report built"
        );

        Ok(Self {
            daily_summaries,
            streaks,
            chart_rows,
            events,
            calendar_options: formatter.options(false),
        })
    }

    /// CSV 리더에서 리포트를 생성합니다.
    pub fn from_reader<R: Read>(reader: R, config: &JournalConfig) -> JournalResult<Self> {
        let trades = RecordLoader::new(&config.loader)?.load_reader(reader)?;
        Self::build(&trades, &config.calendar)
    }

    /// CSV 파일에서 리포트를 생성합니다.
    pub fn from_path<P: AsRef<Path>>(path: P, config: &JournalConfig) -> JournalResult<Self> {
        let trades = RecordLoader::new(&config.loader)?.load_path(path)?;
        Self::build(&trades, &config.calendar)
    }

    /// 캘린더 옵션을 교체합니다 (예: 보기 초기화).
    pub fn with_calendar_options(mut self, options: CalendarOptions) -> Self {
        self.calendar_options = options;
        self
    }

    /// 전체 순손익.
    pub fn total_net_profit(&self) -> Decimal {
        self.daily_summaries
            .iter()
            .map(|summary| summary.net_profit_loss)
            .sum()
    }

    /// 보기 좋게 들여쓴 JSON 문자열.
    pub fn to_json_pretty(&self) -> JournalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
