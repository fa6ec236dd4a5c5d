//! 종목별 연승/연패 출력 및 CSV 내보내기.

use anyhow::{Context, Result};
use journal_analytics::StreakAnalyzer;
use journal_core::{ChartRow, JournalConfig, StreakResult};
use std::io::Write;
use std::path::PathBuf;

use super::output::{write_output, OutputFormat};

/// 연승/연패 명령 설정.
#[derive(Debug)]
pub struct StreaksConfig {
    /// 거래 내역 CSV
    pub input: PathBuf,
    /// 출력 형식
    pub format: OutputFormat,
    /// 출력 파일 경로
    pub output: Option<PathBuf>,
}

/// 연승/연패 계산 후 출력. 종목 수를 반환합니다.
pub fn run_streaks(config: StreaksConfig, journal: &JournalConfig) -> Result<usize> {
    let trades = super::load_trades(&config.input, journal)?;
    let streaks = StreakAnalyzer::analyze(&trades)?;
    let rows = StreakAnalyzer::chart_rows(&streaks);

    let content = match config.format {
        OutputFormat::Table => render_streak_table(&streaks),
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_streaks_csv(&rows, &mut buffer)?;
            String::from_utf8(buffer).context("CSV output is not UTF-8")?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&rows).context("Failed to serialize to JSON")?
        }
    };

    write_output(&content, config.output.as_deref())?;
    Ok(streaks.len())
}

/// 차트 행을 `Symbol,Streak Type,Days` CSV로 씁니다.
pub fn write_streaks_csv<W: Write>(rows: &[ChartRow], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["Symbol", "Streak Type", "Days"])?;

    for row in rows {
        writer.write_record([
            row.symbol.as_str(),
            row.streak_type.label(),
            row.days.to_string().as_str(),
        ])?;
    }

    writer.flush().context("Failed to flush CSV")?;
    Ok(())
}

/// 테이블 형식 출력.
fn render_streak_table(streaks: &[StreakResult]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:>10} {:>10} {:>8}\n",
        "SYMBOL", "MAX WIN", "MAX LOSS", "DAYS"
    ));
    output.push_str(&"-".repeat(43));
    output.push('\n');

    for streak in streaks {
        output.push_str(&format!(
            "{:<12} {:>10} {:>10} {:>8}\n",
            streak.symbol, streak.max_win_streak, streak.max_loss_streak, streak.trading_days
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} symbols", streaks.len()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::StreakType;

    fn streaks() -> Vec<StreakResult> {
        vec![
            StreakResult {
                symbol: "EURUSD".to_string(),
                max_win_streak: 2,
                max_loss_streak: 1,
                trading_days: 4,
            },
            StreakResult {
                symbol: "XAUUSD".to_string(),
                max_win_streak: 0,
                max_loss_streak: 0,
                trading_days: 1,
            },
        ]
    }

    #[test]
    fn test_write_streaks_csv() {
        let rows = StreakAnalyzer::chart_rows(&streaks());
        let mut buffer = Vec::new();
        write_streaks_csv(&rows, &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Symbol,Streak Type,Days\n\
             EURUSD,Max Win Streak,2\n\
             XAUUSD,Max Win Streak,0\n\
             EURUSD,Max Loss Streak,1\n\
             XAUUSD,Max Loss Streak,0\n"
        );
    }

    #[test]
    fn test_csv_quotes_symbols_with_commas() {
        let rows = vec![ChartRow {
            symbol: "BTC,USD".to_string(),
            streak_type: StreakType::MaxLossStreak,
            days: 3,
        }];
        let mut buffer = Vec::new();
        write_streaks_csv(&rows, &mut buffer).unwrap();

        assert!(String::from_utf8(buffer)
            .unwrap()
            .ends_with("\"BTC,USD\",Max Loss Streak,3\n"));
    }

    #[test]
    fn test_render_table() {
        let table = render_streak_table(&streaks());
        assert!(table.lines().nth(2).unwrap().starts_with("EURUSD"));
        assert!(table.ends_with("Total: 2 symbols"));
    }
}
