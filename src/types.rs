use crate::gregorian::{day_of_week, weekday_index};
use crate::{GregorianDate, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, indexed from Sunday = 0.
/// Serializes as its index so stored values match the `0..=6` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const ENGLISH_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ENGLISH_ABBREVIATIONS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const NEPALI_NAMES: [&str; 7] = [
    "Aaitabar",
    "Sombar",
    "Mangalbar",
    "Budhabar",
    "Bihibar",
    "Sukrabar",
    "Sanibar",
];

const NEPALI_NAMES_SHORT: [&str; 7] = ["Aai", "Som", "Man", "Bud", "Bih", "Suk", "San"];

impl Weekday {
    /// Creates a Weekday from its index (0 = Sunday)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeekday` if the index is greater than 6.
    pub const fn from_index(index: u8) -> Result<Self, ParseError> {
        if index as usize >= ALL_WEEKDAYS.len() {
            return Err(ParseError::InvalidWeekday(index));
        }
        Ok(ALL_WEEKDAYS[index as usize])
    }

    /// Weekday of a Gregorian date, `None` if `month` is not `1..=12`
    pub const fn of(year: u16, month: u8, day: u8) -> Option<Self> {
        match day_of_week(year, month, day) {
            Some(index) => Some(ALL_WEEKDAYS[index as usize]),
            None => None,
        }
    }

    /// Weekday of a validated date
    pub(crate) const fn of_date(date: &GregorianDate) -> Self {
        ALL_WEEKDAYS[weekday_index(date.year(), date.month(), date.day()) as usize]
    }

    /// Returns the index, 0 = Sunday
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name, e.g. `Wednesday`
    pub const fn name(self) -> &'static str {
        ENGLISH_NAMES[self as usize]
    }

    /// Upper-case English abbreviation, e.g. `WED`
    pub const fn abbreviation(self) -> &'static str {
        ENGLISH_ABBREVIATIONS[self as usize]
    }

    /// Nepali name in Latin transliteration, e.g. `Budhabar`
    pub const fn nepali_name(self) -> &'static str {
        NEPALI_NAMES[self as usize]
    }

    /// Three-letter Nepali name, e.g. `Bud`
    pub const fn nepali_short_name(self) -> &'static str {
        NEPALI_NAMES_SHORT[self as usize]
    }

    /// The following day, wrapping Saturday to Sunday
    pub const fn succ(self) -> Self {
        ALL_WEEKDAYS[(self as usize + 1) % ALL_WEEKDAYS.len()]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
