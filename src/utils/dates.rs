use crate::error::{PrismError, Result};
use crate::utils::constants::MIN_YEAR;
use chrono::{Datelike, Local, Months, NaiveDate};

/// Check that a month number is within 1..=12
pub fn check_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(PrismError::InvalidDate(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }
    Ok(())
}

/// Check that a day is valid for the given month and year (leap-year aware)
pub fn check_day(day: u32, month: u32, year: i32) -> Result<()> {
    check_month(month)?;
    let max_day = days_in_month(month, year);
    if !(1..=max_day).contains(&day) {
        return Err(PrismError::InvalidDate(format!(
            "Day must be between 1 and {} for {}-{:02}, got {}",
            max_day, year, month, day
        )));
    }
    Ok(())
}

/// Check that a year is within PRISM's data availability window (1895 to present)
pub fn check_year(year: i32) -> Result<()> {
    let present = Local::now().year();
    if year < MIN_YEAR || year > present {
        return Err(PrismError::InvalidDate(format!(
            "Year must be between {} and {}, got {}",
            MIN_YEAR, present, year
        )));
    }
    Ok(())
}

/// Number of days in a month, accounting for leap years
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// PRISM data from the most recent six months is provisional and subject to
/// revision; callers may want to flag downloads in that window.
pub fn is_within_past_six_months(year: i32, month: u32, day: u32) -> Result<bool> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        PrismError::InvalidDate(format!("Invalid date: {}-{:02}-{:02}", year, month, day))
    })?;
    let today = Local::now().date_naive();
    let cutoff = today
        .checked_sub_months(Months::new(6))
        .unwrap_or(NaiveDate::MIN);
    Ok(date > cutoff && date <= today)
}
