//! 설정 관리.
//!
//! 기본값 → TOML 파일 → `JOURNAL__` 접두사 환경 변수 순서로 설정을 병합합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JournalConfig {
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 거래 기록 적재 설정
    pub loader: LoaderConfig,
    /// 캘린더 이벤트 설정
    pub calendar: CalendarConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 거래 기록 적재 설정.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// 필드 구분자 (ASCII 한 글자)
    pub delimiter: char,
    /// 기본 형식보다 먼저 시도할 추가 날짜/시각 형식 (chrono strftime)
    pub datetime_formats: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            datetime_formats: Vec::new(),
        }
    }
}

/// 캘린더 이벤트 설정.
///
/// 색상은 캘린더 위젯이 그대로 사용하는 CSS 색상 문자열입니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// 수익(0 포함) 일자의 P/L 이벤트 색상
    pub gain_color: String,
    /// 손실 일자의 P/L 이벤트 색상
    pub loss_color: String,
    /// 낙폭/보유 기간 이벤트 색상
    pub neutral_color: String,
    /// 낙폭 미보고 시 표시 문자열
    pub missing_marker: String,
    /// 날짜 이동 링크 표시 여부
    pub nav_links: bool,
    /// 보기 초기화 시 사용할 캘린더 뷰
    pub reset_view: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            gain_color: "#3DD56D".to_string(),
            loss_color: "#FF4B4B".to_string(),
            neutral_color: "#808080".to_string(),
            missing_marker: "N/A".to_string(),
            nav_links: true,
            reset_view: "multiMonthYear".to_string(),
        }
    }
}

impl JournalConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일에 없는 항목은 기본값을 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("JOURNAL")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }

    /// 설정 파일 없이 환경 변수만으로 설정을 로드합니다.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("JOURNAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
