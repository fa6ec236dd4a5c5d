//! 전체 성과 리포트 JSON 내보내기.

use anyhow::{Context, Result};
use journal_analytics::{EventFormatter, PerformanceReport};
use journal_core::{DecimalExt, JournalConfig};
use std::path::PathBuf;
use tracing::info;

use super::output::write_output;

/// 리포트 명령 설정.
#[derive(Debug)]
pub struct ReportConfig {
    /// 거래 내역 CSV
    pub input: PathBuf,
    /// 보기 초기화
    pub reset_view: bool,
    /// 출력 파일 경로
    pub output: Option<PathBuf>,
}

/// 리포트 생성 후 JSON으로 출력.
pub fn run_report(config: ReportConfig, journal: &JournalConfig) -> Result<PerformanceReport> {
    let trades = super::load_trades(&config.input, journal)?;
    let options = EventFormatter::new(journal.calendar.clone()).options(config.reset_view);
    let report =
        PerformanceReport::build(&trades, &journal.calendar)?.with_calendar_options(options);

    info!(
        "Report: {} days, {} symbols, net P/L {}",
        report.daily_summaries.len(),
        report.streaks.len(),
        report.total_net_profit().to_fixed_string(2)
    );

    let content = report
        .to_json_pretty()
        .context("Failed to serialize report")?;
    write_output(&content, config.output.as_deref())?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_report_written_to_file() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, "Symbol,Open Date,Close Date,Profit,Drawdown").unwrap();
        writeln!(input, "EURUSD,2024-01-01 09:00:00,2024-01-01 10:00:00,5,1").unwrap();
        writeln!(input, "EURUSD,2024-01-02 09:00:00,2024-01-02 10:00:00,-1,").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.json");

        let report = run_report(
            ReportConfig {
                input: input.path().to_path_buf(),
                reset_view: true,
                output: Some(output.clone()),
            },
            &JournalConfig::default(),
        )
        .unwrap();

        assert_eq!(report.events.len(), 6);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["streaks"][0]["max_win_streak"], 1);
        assert_eq!(json["streaks"][0]["max_loss_streak"], 1);
        assert_eq!(json["calendar_options"]["initialView"], "multiMonthYear");
    }
}
