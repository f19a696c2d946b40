use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Date line as it appears in a year file: "7월 3일", "12월 31일".
pub(crate) static KOREAN_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})월\s*(\d{1,2})일$").unwrap());

const WEEKDAYS: [&str; 7] = [
    "일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Render a date in the record-file form, e.g. "7월 3일".
pub fn korean_label(date: NaiveDate) -> String {
    format!("{}월 {}일", date.month(), date.day())
}

/// Whether a trimmed line is shaped like a date label.
/// True even for labels that name no real date ("2월 30일").
pub fn is_korean_label(text: &str) -> bool {
    KOREAN_DATE.is_match(text.trim())
}

/// Resolve a date label against a year. None when the line is not a label
/// or names an invalid calendar date.
pub fn parse_korean_label(text: &str, year: i32) -> Option<NaiveDate> {
    let caps = KOREAN_DATE.captures(text.trim())?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Label with the weekday appended, e.g. "7월 3일 (금요일)".
pub fn weekday_label(date: NaiveDate) -> String {
    let day = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!("{} ({})", korean_label(date), day)
}

/// Human-friendly distance from today: "오늘", "어제", "3일 전", "2주 전",
/// falling back to the plain label past 30 days (and for future dates).
pub fn relative_label(date: NaiveDate) -> String {
    relative_label_from(date, today())
}

pub fn relative_label_from(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();

    if days == 0 {
        "오늘".to_string()
    } else if days == 1 {
        "어제".to_string()
    } else if (2..7).contains(&days) {
        format!("{}일 전", days)
    } else if (7..30).contains(&days) {
        format!("{}주 전", days / 7)
    } else {
        korean_label(date)
    }
}

/// Parse --period / --range values into an inclusive date window.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // keeps the fixed-width slicing below panic-free
    if !p.is_ascii() {
        return Err(AppError::InvalidPeriod(p.to_string()));
    }

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }

        let (d1, _) = parse_single(start).map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
        let (_, d2) = parse_single(end).map_err(|_| AppError::InvalidPeriod(p.to_string()))?;

        if d1 > d2 {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }
        Ok((d1, d2))
    } else {
        parse_single(p.trim())
    }
}

/// One period token → (first day, last day).
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            if &p[4..5] != "-" {
                return Err(AppError::InvalidPeriod(p.to_string()));
            }
            let y: i32 = p[0..4]
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let m: u32 = p[5..7]
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let last = month_last_day(y, m).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidPeriod(p.to_string())),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
