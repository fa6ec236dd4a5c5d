//! 거래 내역 파일의 날짜/시각 파싱.
//!
//! 거래소와 플랫폼마다 표기가 달라 여러 형식을 순서대로 시도합니다.
//! 월/일 순서가 모호한 슬래시 표기는 미국식(`%m/%d/%Y`)만 허용합니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// 기본 날짜+시각 형식 (앞에서부터 시도).
pub const DEFAULT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y.%m.%d %H:%M:%S",
    "%Y.%m.%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// 기본 날짜 전용 형식 (자정으로 해석).
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%m/%d/%Y"];

/// 날짜/시각 파서.
///
/// 사용자 지정 형식을 먼저 시도한 뒤 RFC 3339, 기본 형식 순으로 시도합니다.
#[derive(Debug, Clone, Default)]
pub struct DateTimeParser {
    custom_formats: Vec<String>,
}

impl DateTimeParser {
    /// 추가 형식을 지정하여 파서를 생성합니다.
    pub fn new(custom_formats: Vec<String>) -> Self {
        Self { custom_formats }
    }

    /// 문자열을 시각으로 변환합니다.
    ///
    /// 오프셋이 포함된 RFC 3339 값은 해당 오프셋의 현지 시각(벽시계 시각)을 사용하므로
    /// 청산 일자가 원본 파일에 적힌 날짜와 일치합니다.
    pub fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        for format in &self.custom_formats {
            if let Some(parsed) = parse_with(value, format) {
                return Some(parsed);
            }
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Some(parsed.naive_local());
        }

        DEFAULT_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .or_else(|| {
                DEFAULT_DATE_FORMATS
                    .iter()
                    .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    }
}

/// 단일 형식으로 시각 또는 날짜(자정) 파싱을 시도합니다.
fn parse_with(value: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, format)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
