//! Console lines for a date read from the real-time clock.
//!
//! Each line is CRLF terminated, ready for a serial sink. A failed BS
//! conversion renders a fallback line instead of partial output.

use std::fmt;

use tracing::warn;

use crate::{
    BsDate, ConversionError, GregorianDate, ParseError, Weekday,
    consts::{LINE_ENDING, RTC_CENTURY_BASE},
    convert::gregorian_to_bs,
};

/// Forty dashes and a line ending
pub const SEPARATOR_LINE: &str = "----------------------------------------\r\n";

const AD_PREFIX: &str = "AD:   ";
const BS_PREFIX: &str = "BS:   ";
const CONVERSION_FALLBACK: &str = "Conversion Error";

/// A Gregorian date with its BS conversion, rendered for the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    date:      GregorianDate,
    weekday:   Weekday,
    converted: Result<BsDate, ConversionError>,
}

impl Report {
    pub fn new(date: GregorianDate) -> Self {
        let converted = gregorian_to_bs(&date);
        if let Err(err) = &converted {
            warn!(%date, %err, "BS conversion failed");
        }
        Self {
            date,
            weekday: date.weekday(),
            converted,
        }
    }

    /// Builds a report from decoded RTC calendar fields.
    ///
    /// The clock stores a two-digit year counted from [`RTC_CENTURY_BASE`].
    ///
    /// # Errors
    /// Returns `ParseError` if the fields do not form a valid date.
    pub fn from_rtc_fields(year_of_century: u8, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = RTC_CENTURY_BASE + u16::from(year_of_century);
        Ok(Self::new(GregorianDate::new(year, month, day)?))
    }

    pub const fn date(&self) -> GregorianDate {
        self.date
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The conversion outcome
    pub const fn converted(&self) -> Result<&BsDate, &ConversionError> {
        self.converted.as_ref()
    }

    /// `AD:   MM/DD/YYYY (WED)` with line ending
    pub fn ad_line(&self) -> String {
        format!(
            "{AD_PREFIX}{:02}/{:02}/{:04} ({}){LINE_ENDING}",
            self.date.month(),
            self.date.day(),
            self.date.year(),
            self.weekday.abbreviation()
        )
    }

    /// `BS:   D MonthName YYYY (Budhabar)` with line ending, or the
    /// conversion fallback
    pub fn bs_line(&self) -> String {
        match &self.converted {
            Ok(bs) => format!(
                "{BS_PREFIX}{} ({}){LINE_ENDING}",
                bs.format_long(),
                self.weekday.nepali_name()
            ),
            Err(_) => format!("{BS_PREFIX}{CONVERSION_FALLBACK}{LINE_ENDING}"),
        }
    }
}

impl fmt::Display for Report {
    /// The AD line, BS line and separator
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ad_line())?;
        f.write_str(&self.bs_line())?;
        f.write_str(SEPARATOR_LINE)
    }
}
