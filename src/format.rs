//! Fixed-format text for BS dates.
//!
//! Output is always ASCII. The `write_*` forms render into a caller-owned
//! buffer; the `format_*` forms allocate.

use std::fmt::{self, Write};

use crate::{
    BsDate,
    consts::{BS_MONTH_NAMES, BS_MONTH_NAMES_SHORT, BS_SUFFIX, MONTHS_PER_YEAR, SHORT_FORM_SEPARATOR},
};

/// Full BS month name, `None` if `month` is not `1..=12`
pub const fn bs_month_name(month: u8) -> Option<&'static str> {
    if month == 0 || month > MONTHS_PER_YEAR {
        return None;
    }
    Some(BS_MONTH_NAMES[(month - 1) as usize])
}

/// Three-letter BS month name, `None` if `month` is not `1..=12`
pub const fn bs_month_short_name(month: u8) -> Option<&'static str> {
    if month == 0 || month > MONTHS_PER_YEAR {
        return None;
    }
    Some(BS_MONTH_NAMES_SHORT[(month - 1) as usize])
}

/// Writes `DD/MM/YYYY BS`.
///
/// # Errors
/// Propagates errors from the writer.
pub fn write_short<W: Write>(out: &mut W, date: &BsDate) -> fmt::Result {
    write!(
        out,
        "{:02}{SHORT_FORM_SEPARATOR}{:02}{SHORT_FORM_SEPARATOR}{:04} {BS_SUFFIX}",
        date.day(),
        date.month(),
        date.year()
    )
}

/// Writes `D MonthName YYYY`, day unpadded.
///
/// # Errors
/// Propagates errors from the writer.
pub fn write_long<W: Write>(out: &mut W, date: &BsDate) -> fmt::Result {
    write!(out, "{} {} {:04}", date.day(), date.month_name(), date.year())
}

pub fn format_short(date: &BsDate) -> String {
    ShortForm(date).to_string()
}

pub fn format_long(date: &BsDate) -> String {
    LongForm(date).to_string()
}

/// Renders through [`write_short`]
struct ShortForm<'a>(&'a BsDate);

impl fmt::Display for ShortForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short(f, self.0)
    }
}

/// Renders through [`write_long`]
struct LongForm<'a>(&'a BsDate);

impl fmt::Display for LongForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_long(f, self.0)
    }
}
