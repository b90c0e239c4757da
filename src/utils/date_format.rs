use chrono::{NaiveDate, Utc};

/// 人类可读的日期字符串，例如 `Mon Jan 01 1990`
pub fn format_day(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// 当前日期（UTC）
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert_eq!(format_day(date), "Mon Jan 01 1990");

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_day(date), "Thu Feb 29 2024");
    }
}
