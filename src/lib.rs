//! Bikram Sambat (Nepali) ⇄ Gregorian date conversion.
//!
//! Conversion counts days from a fixed anchor, 1 Baishakh 2000 BS =
//! 13 April 1943 AD, and consumes that count against a compiled-in table of
//! BS month lengths. Supported spans are 2000..=2090 BS and 1943..=2033 AD.
//!
//! ```
//! use nepali_date::{GregorianDate, format_long, gregorian_to_bs};
//!
//! let ad = GregorianDate::new(2025, 12, 24)?;
//! let bs = gregorian_to_bs(&ad)?;
//! assert_eq!(format_long(&bs), "10 Poush 2082");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod consts;
mod convert;
mod format;
mod gregorian;
mod prelude;
mod report;
mod table;
mod types;

pub use consts::*;
pub use convert::{ConversionError, bs_to_gregorian, gregorian_to_bs};
pub use format::{
    bs_month_name, bs_month_short_name, format_long, format_short, write_long, write_short,
};
pub use gregorian::{
    day_of_week, day_of_year, days_since_epoch, gregorian_month_days, is_leap_year,
};
pub use report::{Report, SEPARATOR_LINE};
pub use table::{bs_month_days, bs_year_days, is_supported_bs_year};
pub use types::Weekday;

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated date in the proleptic Gregorian calendar.
///
/// Any non-zero year is accepted here; conversion support is narrower and
/// is checked by [`gregorian_to_bs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct GregorianDate {
    year:  u16,
    month: u8,
    day:   u8,
}

/// A date in the Bikram Sambat calendar together with its weekday.
///
/// Only the field shapes are checked on construction (month `1..=12`, day
/// `1..=32`); whether the day exists in that year's almanac is checked by
/// [`bs_to_gregorian`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BsDateFields")]
pub struct BsDate {
    year:    u16,
    month:   u8,
    day:     u8,
    weekday: Weekday,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0} (must be non-zero)")]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MONTHS_PER_YEAR)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid weekday index: {_0} (must be 0-6)")]
    InvalidWeekday(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

fn validate_year(year: u16) -> Result<u16, ParseError> {
    if year == 0 {
        return Err(ParseError::InvalidYear(year));
    }
    Ok(year)
}

fn validate_month(month: u8) -> Result<u8, ParseError> {
    if month == 0 || month > MONTHS_PER_YEAR {
        return Err(ParseError::InvalidMonth(month));
    }
    Ok(month)
}

impl GregorianDate {
    /// 13 April 1943, the day 1 Baishakh 2000 BS falls on
    pub const EPOCH: Self = Self {
        year:  EPOCH_AD_YEAR,
        month: EPOCH_AD_MONTH,
        day:   EPOCH_AD_DAY,
    };

    /// Creates a Gregorian date, validating month and day for the given year
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for year 0, `ParseError::InvalidMonth`
    /// for a month outside 1-12 and `ParseError::InvalidDay` if the day does
    /// not exist in that month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = validate_year(year)?;
        let month = validate_month(month)?;
        if day < MIN_DAY || day > gregorian_month_days(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Weekday, computed from the date on every call
    pub const fn weekday(&self) -> Weekday {
        Weekday::of_date(self)
    }

    /// The following calendar day, or `None` past year `u16::MAX`
    pub const fn succ(&self) -> Option<Self> {
        match gregorian::next_day(self.year, self.month, self.day) {
            Some((year, month, day)) => Some(Self { year, month, day }),
            None => None,
        }
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators",
                parts.len() - 1
            )));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl BsDate {
    /// Creates a BS date from its fields
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for year 0, `ParseError::InvalidMonth`
    /// for a month outside 1-12 and `ParseError::InvalidDay` for a day outside
    /// 1-32.
    pub fn new(year: u16, month: u8, day: u8, weekday: Weekday) -> Result<Self, ParseError> {
        let year = validate_year(year)?;
        let month = validate_month(month)?;
        if day < MIN_DAY || day > MAX_BS_DAY {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            weekday,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Full month name, e.g. `Poush`
    pub const fn month_name(&self) -> &'static str {
        BS_MONTH_NAMES[(self.month - 1) as usize]
    }

    /// `DD/MM/YYYY BS`
    pub fn format_short(&self) -> String {
        format_short(self)
    }

    /// `D MonthName YYYY`
    pub fn format_long(&self) -> String {
        format_long(self)
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short(f, self)
    }
}

/// Unvalidated wire shape of [`BsDate`]
#[derive(Deserialize)]
struct BsDateFields {
    year:    u16,
    month:   u8,
    day:     u8,
    weekday: Weekday,
}

impl TryFrom<BsDateFields> for BsDate {
    type Error = ParseError;

    fn try_from(fields: BsDateFields) -> Result<Self, Self::Error> {
        Self::new(fields.year, fields.month, fields.day, fields.weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_new_valid() {
        let date = GregorianDate::new(2025, 12, 24).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 24);
        assert_eq!(date.to_tuple(), (2025, 12, 24));
    }

    #[test]
    fn test_gregorian_new_invalid() {
        assert!(matches!(
            GregorianDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 0, 1),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            GregorianDate::new(2023, 2, 29),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(matches!(
            GregorianDate::new(2024, 4, 0),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_gregorian_leap_day() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
        assert!(GregorianDate::new(1900, 2, 29).is_err());
    }

    #[test]
    fn test_gregorian_epoch() {
        assert_eq!(
            GregorianDate::EPOCH,
            GregorianDate::new(1943, 4, 13).unwrap()
        );
        assert_eq!(GregorianDate::EPOCH.weekday(), Weekday::Tuesday);
    }

    #[test]
    fn test_gregorian_succ() {
        let date = GregorianDate::new(2024, 12, 31).unwrap();
        assert_eq!(date.succ(), Some(GregorianDate::new(2025, 1, 1).unwrap()));
    }

    #[test]
    fn test_gregorian_display() {
        let date = GregorianDate::new(1943, 4, 13).unwrap();
        assert_eq!(date.to_string(), "1943-04-13");
    }

    #[test]
    fn test_gregorian_ordering() {
        let a = GregorianDate::new(2024, 12, 31).unwrap();
        let b = GregorianDate::new(2025, 1, 1).unwrap();
        let c = GregorianDate::new(2025, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_gregorian_parse() {
        let date = "2025-12-24".parse::<GregorianDate>().unwrap();
        assert_eq!(date, GregorianDate::new(2025, 12, 24).unwrap());

        let date = " 1943 - 04 - 13 ".parse::<GregorianDate>().unwrap();
        assert_eq!(date, GregorianDate::EPOCH);
    }

    #[test]
    fn test_gregorian_parse_errors() {
        assert!(matches!(
            "".parse::<GregorianDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2025-12".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-12-24-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-XX-24".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-02-30".parse::<GregorianDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_gregorian_try_from_tuple() {
        let date: GregorianDate = (2025, 12, 24).try_into().unwrap();
        assert_eq!(date.day(), 24);

        let result: Result<GregorianDate, _> = (2025, 13, 1).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_gregorian_serde_string_format() {
        let date = GregorianDate::new(2025, 12, 24).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2025-12-24""#);

        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2025-02-30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bs_new_valid() {
        let date = BsDate::new(2082, 9, 8, Weekday::Tuesday).unwrap();
        assert_eq!(date.year(), 2082);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 8);
        assert_eq!(date.weekday(), Weekday::Tuesday);
        assert_eq!(date.month_name(), "Poush");

        assert!(BsDate::new(2000, 2, 32, Weekday::Sunday).is_ok());
    }

    #[test]
    fn test_bs_new_invalid() {
        assert!(matches!(
            BsDate::new(0, 1, 1, Weekday::Sunday),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            BsDate::new(2082, 13, 1, Weekday::Sunday),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            BsDate::new(2082, 1, 33, Weekday::Sunday),
            Err(ParseError::InvalidDay { day: 33, .. })
        ));
        assert!(matches!(
            BsDate::new(2082, 1, 0, Weekday::Sunday),
            Err(ParseError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_bs_new_accepts_years_outside_table() {
        // Span checks belong to the converter
        assert!(BsDate::new(1999, 12, 30, Weekday::Sunday).is_ok());
        assert!(BsDate::new(2091, 1, 1, Weekday::Sunday).is_ok());
    }

    #[test]
    fn test_bs_display_is_short_form() {
        let date = BsDate::new(2082, 9, 8, Weekday::Tuesday).unwrap();
        assert_eq!(date.to_string(), "08/09/2082 BS");
        assert_eq!(date.format_short(), "08/09/2082 BS");
        assert_eq!(date.format_long(), "8 Poush 2082");
    }

    #[test]
    fn test_bs_serde() {
        let date = BsDate::new(2082, 9, 10, Weekday::Wednesday).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":2082,"month":9,"day":10,"weekday":3}"#);

        let parsed: BsDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_bs_serde_validation() {
        let result: Result<BsDate, _> =
            serde_json::from_str(r#"{"year":2082,"month":13,"day":1,"weekday":0}"#);
        assert!(result.is_err());

        let result: Result<BsDate, _> =
            serde_json::from_str(r#"{"year":2082,"month":1,"day":33,"weekday":0}"#);
        assert!(result.is_err());

        let result: Result<BsDate, _> =
            serde_json::from_str(r#"{"year":2082,"month":1,"day":1,"weekday":7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(
            ParseError::InvalidWeekday(9).to_string(),
            "Invalid weekday index: 9 (must be 0-6)"
        );
    }
}
