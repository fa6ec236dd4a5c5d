//! 일별 요약 출력.

use anyhow::{Context, Result};
use journal_analytics::{format_duration_hms, DailySummarizer};
use journal_core::{DailySummary, DecimalExt, JournalConfig};
use std::path::PathBuf;

use super::output::{write_output, OutputFormat};

/// 일별 요약 명령 설정.
#[derive(Debug)]
pub struct SummaryConfig {
    /// 거래 내역 CSV
    pub input: PathBuf,
    /// 출력 형식
    pub format: OutputFormat,
    /// 출력 파일 경로
    pub output: Option<PathBuf>,
}

/// 일별 요약 계산 후 출력. 요약 일수를 반환합니다.
pub fn run_summary(config: SummaryConfig, journal: &JournalConfig) -> Result<usize> {
    let trades = super::load_trades(&config.input, journal)?;
    let summaries = DailySummarizer::summarize(&trades)?;

    let missing_marker = &journal.calendar.missing_marker;
    let content = match config.format {
        OutputFormat::Table => render_summary_table(&summaries, missing_marker),
        OutputFormat::Csv => render_summary_csv(&summaries, missing_marker)?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(&summaries).context("Failed to serialize to JSON")?
        }
    };

    write_output(&content, config.output.as_deref())?;
    Ok(summaries.len())
}

/// 테이블 형식 출력. 낙폭이 없는 날은 `missing_marker`로 표시합니다.
pub fn render_summary_table(summaries: &[DailySummary], missing_marker: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:>14} {:>12} {:>12} {:>7}\n",
        "DATE", "NET P/L", "MAX DD", "AVG TD", "TRADES"
    ));
    output.push_str(&"-".repeat(61));
    output.push('\n');

    for summary in summaries {
        output.push_str(&format!(
            "{:<12} {:>14} {:>12} {:>12} {:>7}\n",
            summary.date.format("%Y-%m-%d"),
            summary.net_profit_loss.to_fixed_string(2),
            summary
                .max_drawdown
                .map(|dd| dd.to_fixed_string(2))
                .unwrap_or_else(|| missing_marker.to_string()),
            format_duration_hms(summary.avg_duration),
            summary.trade_count
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} days", summaries.len()));

    output
}

/// CSV 형식 출력.
fn render_summary_csv(summaries: &[DailySummary], missing_marker: &str) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Date", "Net P/L", "Max DD", "Avg Duration", "Trades"])?;

    for summary in summaries {
        writer.write_record([
            summary.date.format("%Y-%m-%d").to_string(),
            summary.net_profit_loss.to_fixed_string(2),
            summary
                .max_drawdown
                .map(|dd| dd.to_fixed_string(2))
                .unwrap_or_else(|| missing_marker.to_string()),
            format_duration_hms(summary.avg_duration),
            summary.trade_count.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}
