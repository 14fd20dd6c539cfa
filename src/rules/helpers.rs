//! Validation and rewriting used by computed replacers.

use chrono::NaiveDate;

/// Whether `s` is an ISO 8601 calendar date, `YYYY-MM-DD` or `YYYY-MM`.
///
/// Abbreviated year ranges such as `1989-90` share the shape of `YYYY-MM`
/// and are rejected here because 90 is not a month.
pub fn is_calendar_date(s: &str) -> bool {
    let mut parts = s.split('-');
    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return false;
    };
    let day = parts.next();
    if parts.next().is_some() {
        return false;
    }

    let ascii_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || month.len() != 2 || !ascii_digits(year) || !ascii_digits(month) {
        return false;
    }

    let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<u32>()) else {
        return false;
    };

    match day {
        None => NaiveDate::from_ymd_opt(year, month, 1).is_some(),
        Some(day) if day.len() == 2 && ascii_digits(day) => {
            day.parse::<u32>().ok().and_then(|day| NaiveDate::from_ymd_opt(year, month, day)).is_some()
        }
        Some(_) => false,
    }
}

/// Replace every ASCII hyphen in `s` with `dash`.
pub fn replace_hyphens(s: &str, dash: char) -> String {
    s.chars().map(|c| if c == '-' { dash } else { c }).collect()
}
