//! Date text: the compact `YYYY-M-D-H` lunisolar form and display strings.

use chrono::NaiveDateTime;
use serde::Serialize;
use ziwei_base::{slot_midpoint, year_pillar};

use crate::error::CalendarError;
use crate::lunisolar::LunisolarDate;

/// A lunisolar date given by hour-branch index instead of clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompactLunisolar {
    pub year: i32,
    /// Month number 1..=12.
    pub month: u32,
    /// Day of month 1..=30.
    pub day: u32,
    /// Hour-branch index 0..=11.
    pub hour_index: u32,
}

impl CompactLunisolar {
    /// Parse `YYYY-M-D-H`, e.g. `2024-1-15-6`.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let bad = || CalendarError::LunisolarFormat(input.to_string());
        let parts: Vec<&str> = input.trim().split('-').collect();
        let [year, month, day, hour] = parts.as_slice() else {
            return Err(bad());
        };
        let year: i32 = year.parse().map_err(|_| bad())?;
        let month: u32 = month.parse().map_err(|_| bad())?;
        let day: u32 = day.parse().map_err(|_| bad())?;
        let hour_index: u32 = hour.parse().map_err(|_| bad())?;
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) || hour_index > 11 {
            return Err(bad());
        }
        Ok(Self {
            year,
            month,
            day,
            hour_index,
        })
    }

    /// The date with its hour set to the middle of the hour branch.
    pub fn to_lunisolar(&self) -> LunisolarDate {
        let (h, m, s) = slot_midpoint(self.hour_index);
        LunisolarDate::new(self.year, self.month, self.day).with_time(h, m, s)
    }
}

/// `YYYY-MM-DD HH:MM`.
pub fn solar_date_text(local: &NaiveDateTime) -> String {
    local.format("%Y-%m-%d %H:%M").to_string()
}

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Traditional day-of-month name: 初一 .. 初十, 十一 .. 二十, 廿一 .. 三十.
pub fn lunisolar_day_name(day: u32) -> String {
    match day {
        1..=9 => format!("初{}", DIGITS[day as usize]),
        10 => "初十".to_string(),
        11..=19 => format!("十{}", DIGITS[(day - 10) as usize]),
        20 => "二十".to_string(),
        21..=29 => format!("廿{}", DIGITS[(day - 20) as usize]),
        30 => "三十".to_string(),
        _ => day.to_string(),
    }
}

/// Month name with the leap prefix, e.g. `正月`, `闰四月`.
pub fn lunisolar_month_name(month: u32, is_leap: bool) -> String {
    let name = MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    let leap = if is_leap { "闰" } else { "" };
    format!("{leap}{name}月")
}

/// `甲子年正月初一`-style text of a lunisolar date (no hour).
pub fn lunisolar_date_text(date: &LunisolarDate) -> Result<String, CalendarError> {
    let year = year_pillar(date.year)?;
    Ok(format!(
        "{year}年{}{}",
        lunisolar_month_name(date.month, date.is_leap),
        lunisolar_day_name(date.day)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parse_compact() {
        let c = CompactLunisolar::parse("2024-1-15-6").unwrap();
        assert_eq!(
            c,
            CompactLunisolar {
                year: 2024,
                month: 1,
                day: 15,
                hour_index: 6
            }
        );
        assert_eq!(c.to_lunisolar().time(), (12, 30, 0));
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        for bad in ["2024-1-15", "2024-13-1-0", "2024-1-31-0", "2024-1-1-12", "x-1-1-1", ""] {
            assert!(
                matches!(
                    CompactLunisolar::parse(bad),
                    Err(CalendarError::LunisolarFormat(_))
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn solar_text() {
        let t = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 33, 41)
            .unwrap();
        assert_eq!(solar_date_text(&t), "2024-03-05 07:33");
    }

    #[test]
    fn day_names() {
        assert_eq!(lunisolar_day_name(1), "初一");
        assert_eq!(lunisolar_day_name(10), "初十");
        assert_eq!(lunisolar_day_name(15), "十五");
        assert_eq!(lunisolar_day_name(20), "二十");
        assert_eq!(lunisolar_day_name(23), "廿三");
        assert_eq!(lunisolar_day_name(30), "三十");
    }

    #[test]
    fn date_text() {
        let d = LunisolarDate::new(1984, 1, 1);
        assert_eq!(lunisolar_date_text(&d).unwrap(), "甲子年正月初一");
        let d = LunisolarDate::new(2023, 2, 5).leap();
        assert_eq!(lunisolar_date_text(&d).unwrap(), "癸卯年闰二月初五");
        assert_eq!(lunisolar_month_name(12, false), "腊月");
    }
}
