//! CSV 거래 내역 적재기.
//!
//! 필수 컬럼: `Symbol`, `Open Date`, `Close Date`, `Profit`, `Drawdown` (이름 정확히 일치).
//! 그 외 컬럼은 무시합니다.
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! use journal_core::LoaderConfig;
//! use journal_data::RecordLoader;
//!
//! let loader = RecordLoader::new(&LoaderConfig::default())?;
//! let trades = loader.load_path("history.csv")?;
//! ```

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use journal_core::{JournalError, LoaderConfig, Trade};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::datetime::DateTimeParser;
use crate::error::{LoadError, Result};

/// 필수 컬럼 이름.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Symbol", "Open Date", "Close Date", "Profit", "Drawdown"];

/// 낙폭 미보고로 간주하는 값 (대소문자 구분).
const MISSING_MARKERS: &[&str] = &[
    "", "NaN", "nan", "-NaN", "-nan", "N/A", "NA", "#N/A", "<NA>", "NULL", "null", "None",
];

/// 필수 컬럼의 헤더 내 위치.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    symbol: usize,
    open_date: usize,
    close_date: usize,
    profit: usize,
    drawdown: usize,
}

impl ColumnIndex {
    /// 헤더에서 필수 컬럼 위치를 찾습니다. 누락된 컬럼은 모두 모아서 보고합니다.
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|header| header == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&name| position(name).is_none())
            .map(|&name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(LoadError::Schema { missing });
        }

        let require = |name: &str| position(name).ok_or_else(|| LoadError::Schema {
            missing: vec![name.to_string()],
        });

        Ok(Self {
            symbol: require("Symbol")?,
            open_date: require("Open Date")?,
            close_date: require("Close Date")?,
            profit: require("Profit")?,
            drawdown: require("Drawdown")?,
        })
    }
}

/// CSV 거래 내역을 검증된 `Trade` 목록으로 변환합니다.
///
/// 한 행이라도 실패하면 전체 적재가 실패합니다 (문제 행을 건너뛰지 않음).
#[derive(Debug, Clone)]
pub struct RecordLoader {
    delimiter: u8,
    parser: DateTimeParser,
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            parser: DateTimeParser::default(),
        }
    }
}

impl RecordLoader {
    /// 설정으로부터 적재기를 생성합니다.
    ///
    /// 구분자는 ASCII 한 글자여야 합니다.
    pub fn new(config: &LoaderConfig) -> Result<Self> {
        let delimiter = u8::try_from(config.delimiter)
            .ok()
            .filter(|byte| byte.is_ascii())
            .ok_or_else(|| {
                LoadError::Config(format!(
                    "delimiter must be a single ASCII character, got {:?}",
                    config.delimiter
                ))
            })?;

        Ok(Self {
            delimiter,
            parser: DateTimeParser::new(config.datetime_formats.clone()),
        })
    }

    /// 파일에서 거래 내역을 적재합니다.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Trade>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening trade history");
        let reader = self.reader_builder().from_path(path)?;
        self.read_trades(reader)
    }

    /// 임의의 리더에서 거래 내역을 적재합니다.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<Trade>> {
        self.read_trades(self.reader_builder().from_reader(reader))
    }

    /// 문자열에서 거래 내역을 적재합니다.
    pub fn load_str(&self, content: &str) -> Result<Vec<Trade>> {
        self.load_reader(content.as_bytes())
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::Fields);
        builder
    }

    fn read_trades<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<Vec<Trade>> {
        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;

        let mut trades = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = index as u64 + 1;
            trades.push(self.parse_row(&record, columns, row)?);
        }

        info!(trades = trades.len(), "Loaded trade history");
        Ok(trades)
    }

    fn parse_row(&self, record: &StringRecord, columns: ColumnIndex, row: u64) -> Result<Trade> {
        let symbol = field(record, columns.symbol);
        let open_time = self.parse_time(record, columns.open_date, "Open Date", row)?;
        let close_time = self.parse_time(record, columns.close_date, "Close Date", row)?;

        let raw_profit = field(record, columns.profit);
        let profit = parse_decimal(raw_profit).ok_or_else(|| LoadError::Parse {
            row,
            column: "Profit",
            value: raw_profit.to_string(),
            reason: if raw_profit.is_empty() {
                "missing value".to_string()
            } else {
                "not a decimal number".to_string()
            },
        })?;

        let raw_drawdown = field(record, columns.drawdown);
        let drawdown = if MISSING_MARKERS.contains(&raw_drawdown) {
            debug!(row, symbol, "Drawdown not reported");
            None
        } else {
            Some(parse_decimal(raw_drawdown).ok_or_else(|| LoadError::Parse {
                row,
                column: "Drawdown",
                value: raw_drawdown.to_string(),
                reason: "not a decimal number".to_string(),
            })?)
        };

        Trade::new(symbol, open_time, close_time, profit, drawdown).map_err(|err| match err {
            JournalError::InvalidDuration { symbol, seconds } => {
                LoadError::InvalidDuration { row, symbol, seconds }
            }
            other => LoadError::Parse {
                row,
                column: "Close Date",
                value: field(record, columns.close_date).to_string(),
                reason: other.to_string(),
            },
        })
    }

    fn parse_time(
        &self,
        record: &StringRecord,
        index: usize,
        column: &'static str,
        row: u64,
    ) -> Result<NaiveDateTime> {
        let raw = field(record, index);
        self.parser.parse(raw).ok_or_else(|| LoadError::Parse {
            row,
            column,
            value: raw.to_string(),
            reason: "unrecognized date-time format".to_string(),
        })
    }
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

/// 일반 표기와 지수 표기(`1.5e-3`)를 모두 허용합니다.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
