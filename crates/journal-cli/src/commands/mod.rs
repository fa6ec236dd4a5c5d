//! CLI 명령어 구현 모듈.

pub mod calendar;
pub mod output;
pub mod report;
pub mod streaks;
pub mod summary;

use anyhow::{Context, Result};
use journal_core::{JournalConfig, Trade};
use journal_data::RecordLoader;
use std::path::Path;
use tracing::{debug, info};

/// `--config`가 없을 때 찾는 설정 파일.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 설정 로드.
///
/// 경로가 지정되면 해당 파일을, 아니면 기본 설정 파일을 사용합니다.
/// 기본 파일도 없으면 기본값과 환경 변수만 사용합니다.
pub fn load_config(path: Option<&Path>) -> Result<JournalConfig> {
    match path {
        Some(path) => JournalConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => JournalConfig::load_default()
            .with_context(|| format!("Failed to load config: {}", DEFAULT_CONFIG_PATH)),
        None => {
            debug!("No config file, using defaults");
            JournalConfig::from_env().context("Failed to read configuration from environment")
        }
    }
}

/// 거래 내역 CSV 적재.
pub fn load_trades(path: &Path, config: &JournalConfig) -> Result<Vec<Trade>> {
    let loader = RecordLoader::new(&config.loader).context("Invalid loader configuration")?;
    let trades = loader
        .load_path(path)
        .with_context(|| format!("Failed to load trade history: {}", path.display()))?;

    info!("Loaded {} trades from {}", trades.len(), path.display());
    Ok(trades)
}
