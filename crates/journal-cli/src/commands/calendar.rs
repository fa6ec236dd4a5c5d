//! 캘린더 이벤트 JSON 내보내기.

use anyhow::{Context, Result};
use journal_analytics::{DailySummarizer, EventFormatter};
use journal_core::{CalendarEvent, CalendarOptions, JournalConfig, JournalResult, Trade};
use serde::Serialize;
use std::path::PathBuf;

use super::output::write_output;

/// 캘린더 명령 설정.
#[derive(Debug)]
pub struct CalendarCliConfig {
    /// 거래 내역 CSV
    pub input: PathBuf,
    /// 보기 초기화 (multiMonthYear 등 설정된 뷰로 시작)
    pub reset_view: bool,
    /// 출력 파일 경로
    pub output: Option<PathBuf>,
}

/// 캘린더 위젯에 그대로 넘길 수 있는 이벤트 묶음.
#[derive(Debug, Serialize)]
pub struct CalendarExport {
    pub events: Vec<CalendarEvent>,
    pub options: CalendarOptions,
}

/// 캘린더 이벤트를 JSON으로 출력. 이벤트 수를 반환합니다.
pub fn run_calendar(config: CalendarCliConfig, journal: &JournalConfig) -> Result<usize> {
    let trades = super::load_trades(&config.input, journal)?;
    let export = build_calendar_export(&trades, journal, config.reset_view)?;

    let content =
        serde_json::to_string_pretty(&export).context("Failed to serialize to JSON")?;
    write_output(&content, config.output.as_deref())?;

    Ok(export.events.len())
}

/// 거래 목록으로 이벤트와 위젯 옵션을 만듭니다.
pub fn build_calendar_export(
    trades: &[Trade],
    journal: &JournalConfig,
    reset_view: bool,
) -> JournalResult<CalendarExport> {
    let formatter = EventFormatter::new(journal.calendar.clone());
    let summaries = DailySummarizer::summarize(trades)?;

    Ok(CalendarExport {
        events: formatter.format(&summaries),
        options: formatter.options(reset_view),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_data::RecordLoader;

    const CSV: &str = "Symbol,Open Date,Close Date,Profit,Drawdown\n\
        EURUSD,2024-01-01 09:00:00,2024-01-01 10:00:00,-3,\n";

    #[test]
    fn test_export_shape() {
        let trades = RecordLoader::default().load_str(CSV).unwrap();
        let export = build_calendar_export(&trades, &JournalConfig::default(), true).unwrap();
        let json = serde_json::to_value(&export).unwrap();

        assert_eq!(json["events"].as_array().unwrap().len(), 3);
        assert_eq!(json["events"][0]["title"], "P/L: -3.00");
        assert_eq!(json["events"][0]["color"], "#FF4B4B");
        assert_eq!(json["events"][1]["title"], "Max DD: N/A");
        assert_eq!(json["options"]["navLinks"], true);
        assert_eq!(json["options"]["initialView"], "multiMonthYear");
    }

    #[test]
    fn test_no_reset_view_omits_initial_view() {
        let trades = RecordLoader::default().load_str(CSV).unwrap();
        let export = build_calendar_export(&trades, &JournalConfig::default(), false).unwrap();
        let json = serde_json::to_value(&export).unwrap();

        assert!(json["options"].get("initialView").is_none());
    }
}
