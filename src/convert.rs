use tracing::{debug, trace};

use crate::{
    BsDate, GregorianDate, MAX_AD_YEAR, MAX_BS_YEAR, MIN_AD_YEAR, MIN_BS_YEAR, ParseError,
    consts::{EPOCH_AD_DAY, EPOCH_AD_MONTH, EPOCH_AD_YEAR, EPOCH_BS_YEAR, JANUARY, MONTHS_PER_YEAR},
    gregorian::{days_since_epoch, gregorian_month_days, next_month},
    table::{bs_month_days, bs_year_days},
};

/// Error type for calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The year has no coverage in the month-length table.
    #[error("Year {year} is outside the supported range {min}-{max}")]
    OutOfSupportedRange { year: u16, min: u16, max: u16 },

    /// The Gregorian date falls before 13 April 1943.
    #[error("Date is {days_before} days before the 1943-04-13 epoch")]
    PrecedesEpoch { days_before: u32 },

    /// The month walk ran off the end of the table.
    #[error("Month-length table exhausted at BS {year}-{month:02}")]
    TableExhausted { year: u16, month: u8 },

    /// The BS day does not exist in that month.
    #[error("BS month {year}-{month:02} has {max} days, got day {day}")]
    DayOutOfRange { year: u16, month: u8, day: u8, max: u8 },

    /// Error building a date value.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

const fn check_ad_year(year: u16) -> Result<(), ConversionError> {
    if year < MIN_AD_YEAR || year > MAX_AD_YEAR {
        return Err(ConversionError::OutOfSupportedRange {
            year,
            min: MIN_AD_YEAR,
            max: MAX_AD_YEAR,
        });
    }
    Ok(())
}

const fn check_bs_year(year: u16) -> Result<(), ConversionError> {
    if year < MIN_BS_YEAR || year > MAX_BS_YEAR {
        return Err(ConversionError::OutOfSupportedRange {
            year,
            min: MIN_BS_YEAR,
            max: MAX_BS_YEAR,
        });
    }
    Ok(())
}

/// Converts a Gregorian date to Bikram Sambat.
///
/// The result's weekday is computed from `date` itself.
///
/// # Errors
/// Returns `ConversionError::OutOfSupportedRange` if the year is outside
/// 1943-2033 and `ConversionError::PrecedesEpoch` for dates before
/// 13 April 1943.
pub fn gregorian_to_bs(date: &GregorianDate) -> Result<BsDate, ConversionError> {
    check_ad_year(date.year()).inspect_err(|err| debug!(%date, %err, "gregorian_to_bs rejected"))?;

    let offset = days_since_epoch(date);
    if offset < 0 {
        debug!(%date, offset, "gregorian_to_bs rejected: before epoch");
        return Err(ConversionError::PrecedesEpoch {
            days_before: offset.unsigned_abs(),
        });
    }

    // 1-based: the epoch itself is day 1 of Baishakh 2000
    let mut remaining = offset + 1;
    let mut year = EPOCH_BS_YEAR;
    let mut month = JANUARY;

    loop {
        let month_days = i32::from(bs_month_days(year, month));
        if month_days == 0 {
            debug!(%date, year, month, "month-length table exhausted");
            return Err(ConversionError::TableExhausted { year, month });
        }
        if remaining <= month_days {
            break;
        }
        remaining -= month_days;
        if month == MONTHS_PER_YEAR {
            month = JANUARY;
            year += 1;
        } else {
            month += 1;
        }
    }

    // remaining is within 1..=32 here
    let day = u8::try_from(remaining)
        .map_err(|_| ConversionError::TableExhausted { year, month })?;
    let bs = BsDate {
        year,
        month,
        day,
        weekday: date.weekday(),
    };
    trace!(%date, %bs, "converted to BS");
    Ok(bs)
}

/// Converts a Bikram Sambat date to Gregorian.
///
/// The weekday carried by `date` is not consulted; use
/// [`GregorianDate::weekday`] on the result when it is needed.
///
/// # Errors
/// Returns `ConversionError::OutOfSupportedRange` if the year is outside
/// 2000-2090 and `ConversionError::DayOutOfRange` if the day exceeds the
/// month's length in the table.
pub fn bs_to_gregorian(date: &BsDate) -> Result<GregorianDate, ConversionError> {
    check_bs_year(date.year()).inspect_err(|err| debug!(%date, %err, "bs_to_gregorian rejected"))?;

    let max = bs_month_days(date.year(), date.month());
    if date.day() > max {
        debug!(%date, max, "bs_to_gregorian rejected: day beyond month length");
        return Err(ConversionError::DayOutOfRange {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            max,
        });
    }

    let mut total: u32 = 0;
    for year in EPOCH_BS_YEAR..date.year() {
        total += u32::from(bs_year_days(year));
    }
    for month in JANUARY..date.month() {
        total += u32::from(bs_month_days(date.year(), month));
    }
    total += u32::from(date.day());

    let ad = advance_from_epoch(total - 1)?;
    trace!(%date, %ad, "converted to Gregorian");
    Ok(ad)
}

/// Walks `days` forward from 13 April 1943 a month at a time.
fn advance_from_epoch(days: u32) -> Result<GregorianDate, ConversionError> {
    let mut year = EPOCH_AD_YEAR;
    let mut month = EPOCH_AD_MONTH;
    // day counted as if the month were unbounded
    let mut day = u32::from(EPOCH_AD_DAY) + days;

    loop {
        let month_days = u32::from(gregorian_month_days(year, month));
        if day <= month_days {
            break;
        }
        day -= month_days;
        (year, month) = next_month(year, month).ok_or(ParseError::InvalidYear(year))?;
    }

    // day <= month_days here
    let day = u8::try_from(day).map_err(|_| ParseError::InvalidDay {
        year,
        month,
        day: u8::MAX,
    })?;
    Ok(GregorianDate { year, month, day })
}
