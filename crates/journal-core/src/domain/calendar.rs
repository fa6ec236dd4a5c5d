//! 캘린더 위젯이 소비하는 이벤트 구조체.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 하루짜리 캘린더 이벤트.
///
/// `end`는 배타적 경계로 항상 `start` 다음 날입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// 표시 제목 (예: "P/L: 12.50")
    pub title: String,
    /// CSS 색상
    pub color: String,
    /// 시작일
    pub start: NaiveDate,
    /// 종료일 (배타적)
    pub end: NaiveDate,
}

impl CalendarEvent {
    /// `date` 하루 전체를 차지하는 이벤트를 생성합니다.
    ///
    /// 표현 가능한 마지막 날짜에서는 `end`가 `start`와 같아집니다.
    pub fn all_day(title: impl Into<String>, color: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
            start: date,
            end: date.succ_opt().unwrap_or(date),
        }
    }
}

/// 이벤트와 함께 전달되는 캘린더 위젯 옵션.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOptions {
    /// 날짜 이동 링크 표시 여부
    #[serde(rename = "navLinks")]
    pub nav_links: bool,
    /// 초기 뷰 (보기 초기화 시에만 설정)
    #[serde(rename = "initialView", default, skip_serializing_if = "Option::is_none")]
    pub initial_view: Option<String>,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            nav_links: true,
            initial_view: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_day_spans_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let event = CalendarEvent::all_day("P/L: 1.00", "#3DD56D", date);

        assert_eq!(event.start, date);
        assert_eq!(event.end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_event_json_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let event = CalendarEvent::all_day("Max DD: N/A", "#808080", date);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["title"], "Max DD: N/A");
        assert_eq!(json["start"], "2024-01-31");
        assert_eq!(json["end"], "2024-02-01");
    }

    #[test]
    fn test_options_skip_missing_view() {
        let json = serde_json::to_string(&CalendarOptions::default()).unwrap();
        assert_eq!(json, r#"{"navLinks":true}"#);
    }
}
