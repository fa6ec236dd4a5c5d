//! 매매일지 캘린더 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 일별 요약 표
//! journal summary history.csv
//!
//! # 연승/연패 CSV 내보내기
//! journal streaks history.csv -f csv -o streaks.csv
//!
//! # 캘린더 이벤트 (연간 보기로 초기화)
//! journal calendar history.csv --reset-view -o events.json
//!
//! # 전체 리포트
//! journal --config config/default.toml report history.csv -o report.json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use journal_cli::commands::{
    calendar::{run_calendar, CalendarCliConfig},
    load_config,
    output::OutputFormat,
    report::{run_report, ReportConfig},
    streaks::{run_streaks, StreaksConfig},
    summary::{run_summary, SummaryConfig},
};
use journal_core::{init_logging, LogConfig, LogFormat};

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Trading journal calendar - 일별 손익 캘린더와 연승/연패 분석", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (기본: config/default.toml, 없으면 기본값)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 청산 일자별 순손익, 최대 낙폭, 평균 보유 기간
    Summary {
        /// 거래 내역 CSV 파일
        input: PathBuf,

        /// 출력 형식 (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// 출력 파일 경로 (지정하지 않으면 stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 종목별 최장 연승/연패
    Streaks {
        /// 거래 내역 CSV 파일
        input: PathBuf,

        /// 출력 형식 (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// 출력 파일 경로 (지정하지 않으면 stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 캘린더 이벤트 JSON
    Calendar {
        /// 거래 내역 CSV 파일
        input: PathBuf,

        /// 설정된 초기화 뷰로 캘린더 시작
        #[arg(long, default_value = "false")]
        reset_view: bool,

        /// 출력 파일 경로 (지정하지 않으면 stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 요약, 연승/연패, 이벤트를 포함한 전체 리포트 JSON
    Report {
        /// 거래 내역 CSV 파일
        input: PathBuf,

        /// 설정된 초기화 뷰로 캘린더 시작
        #[arg(long, default_value = "false")]
        reset_view: bool,

        /// 출력 파일 경로 (지정하지 않으면 stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let journal = load_config(cli.config.as_deref())?;

    let mut log_config = LogConfig::from(&journal.logging);
    if let Some(format) = &cli.log_format {
        let format = format.parse::<LogFormat>().map_err(anyhow::Error::msg)?;
        log_config = log_config.with_format(format);
    }
    init_logging(log_config).map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let result = match cli.command {
        Commands::Summary {
            input,
            format,
            output,
        } => {
            let config = SummaryConfig {
                input,
                format: OutputFormat::parse(&format)?,
                output,
            };
            run_summary(config, &journal).map(|days| info!("Summarized {} days", days))
        }

        Commands::Streaks {
            input,
            format,
            output,
        } => {
            let config = StreaksConfig {
                input,
                format: OutputFormat::parse(&format)?,
                output,
            };
            run_streaks(config, &journal).map(|symbols| info!("Analyzed {} symbols", symbols))
        }

        Commands::Calendar {
            input,
            reset_view,
            output,
        } => {
            let config = CalendarCliConfig {
                input,
                reset_view,
                output,
            };
            run_calendar(config, &journal).map(|events| info!("Exported {} events", events))
        }

        Commands::Report {
            input,
            reset_view,
            output,
        } => {
            let config = ReportConfig {
                input,
                reset_view,
                output,
            };
            run_report(config, &journal).map(|_| info!("Report completed"))
        }
    };

    if let Err(e) = &result {
        error!("Command failed: {:#}", e);
    }

    result
}
