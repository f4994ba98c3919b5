//! Proleptic Gregorian calendar arithmetic.

use crate::GregorianDate;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, EPOCH_AD_YEAR, EPOCH_DAY_OF_YEAR, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MARCH, MIN_DAY, MONTHS_PER_YEAR,
    WEEKDAY_MONTH_OFFSETS,
};

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month, February adjusted for leap years.
/// Returns `0` if `month` is not `1..=12`.
pub const fn gregorian_month_days(year: u16, month: u8) -> u8 {
    if month == 0 || month > MONTHS_PER_YEAR {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn year_days(year: u16) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Day of week with 0 = Sunday (Sakamoto's method).
///
/// January and February are counted as months of the previous year so the
/// leap day falls at the end of the counted year.
///
/// Returns `None` if `month` is not `1..=12`.
pub const fn day_of_week(year: u16, month: u8, day: u8) -> Option<u8> {
    if month == 0 || month > MONTHS_PER_YEAR {
        return None;
    }
    Some(weekday_index(year, month, day))
}

/// [`day_of_week`] for a month already known to be `1..=12`
pub(crate) const fn weekday_index(year: u16, month: u8, day: u8) -> u8 {
    let y = (if month < MARCH { year.saturating_sub(1) } else { year }) as u32;
    let offset = WEEKDAY_MONTH_OFFSETS[(month - 1) as usize] as u32;
    ((y + y / 4 - y / 100 + y / 400 + offset + day as u32) % 7) as u8
}

pub(crate) const fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    if month == DECEMBER {
        match year.checked_add(1) {
            Some(next) => Some((next, JANUARY)),
            None => None,
        }
    } else {
        Some((year, month + 1))
    }
}

pub(crate) const fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day < gregorian_month_days(year, month) {
        Some((year, month, day + 1))
    } else {
        // roll to first of next month
        match next_month(year, month) {
            Some((ny, nm)) => Some((ny, nm, MIN_DAY)),
            None => None,
        }
    }
}

/// 1-based ordinal of the date within its year
pub const fn day_of_year(year: u16, month: u8, day: u8) -> u16 {
    let mut total = day as u16;
    let mut m = JANUARY;
    while m < month {
        total += gregorian_month_days(year, m) as u16;
        m += 1;
    }
    total
}

/// Days elapsed from 13 April 1943 to `date`.
///
/// Zero at the epoch and negative for every earlier date.
pub fn days_since_epoch(date: &GregorianDate) -> i32 {
    let year = date.year();
    let mut total: i32 = 0;

    if year >= EPOCH_AD_YEAR {
        for y in EPOCH_AD_YEAR..year {
            total += i32::from(year_days(y));
        }
    } else {
        for y in year..EPOCH_AD_YEAR {
            total -= i32::from(year_days(y));
        }
    }

    total + i32::from(day_of_year(year, date.month(), date.day())) - EPOCH_DAY_OF_YEAR
}
