//! 캘린더 이벤트 변환기.
//!
//! 일별 요약 하나를 하루짜리 이벤트 세 개(P/L, 최대 낙폭, 평균 보유 기간)로 변환합니다.

use chrono::Duration;
use journal_core::{CalendarConfig, CalendarEvent, CalendarOptions, DailySummary, DecimalExt};
use rust_decimal::Decimal;

/// 일별 요약 → 캘린더 이벤트 변환기.
#[derive(Debug, Clone, Default)]
pub struct EventFormatter {
    config: CalendarConfig,
}

impl EventFormatter {
    /// 색상 및 표시 설정으로 변환기를 생성합니다.
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// 요약 목록을 날짜 오름차순 이벤트 목록으로 변환합니다.
    ///
    /// 요약 하나당 이벤트 세 개가 P/L, 낙폭, 보유 기간 순서로 나옵니다.
    pub fn format(&self, summaries: &[DailySummary]) -> Vec<CalendarEvent> {
        let mut ordered: Vec<&DailySummary> = summaries.iter().collect();
        ordered.sort_by_key(|summary| summary.date);

        ordered
            .into_iter()
            .flat_map(|summary| self.format_day(summary))
            .collect()
    }

    /// 요약 하나를 이벤트 세 개로 변환합니다.
    pub fn format_day(&self, summary: &DailySummary) -> [CalendarEvent; 3] {
        let rounded = summary.net_profit_loss.round_half_even(2);
        // 색상은 표시되는 반올림 값 기준
        let pnl_color = if rounded < Decimal::ZERO {
            &self.config.loss_color
        } else {
            &self.config.gain_color
        };

        let drawdown = summary
            .max_drawdown
            .map(|dd| dd.to_fixed_string(2))
            .unwrap_or_else(|| self.config.missing_marker.clone());

        [
            CalendarEvent::all_day(
                format!("P/L: {}", summary.net_profit_loss.to_fixed_string(2)),
                pnl_color.as_str(),
                summary.date,
            ),
            CalendarEvent::all_day(
                format!("Max DD: {drawdown}"),
                self.config.neutral_color.as_str(),
                summary.date,
            ),
            CalendarEvent::all_day(
                format!("TD: {}", format_duration_hms(summary.avg_duration)),
                self.config.neutral_color.as_str(),
                summary.date,
            ),
        ]
    }

    /// 캘린더 위젯 옵션.
    ///
    /// `reset_view`가 참이면 설정된 초기화 뷰를 지정합니다.
    pub fn options(&self, reset_view: bool) -> CalendarOptions {
        CalendarOptions {
            nav_links: self.config.nav_links,
            initial_view: reset_view.then(|| self.config.reset_view.clone()),
        }
    }
}

/// 기간을 `HH:MM:SS`로 표시합니다.
///
/// 초 미만은 버리고, 시간은 100 이상이면 세 자리 이상이 됩니다.
/// 음수 기간은 `-` 부호를 붙여 그대로 표시합니다.
pub fn format_duration_hms(duration: Duration) -> String {
    let secs = duration.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let total = secs.unsigned_abs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}
