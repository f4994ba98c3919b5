/// First BS year covered by the month-length table
pub const MIN_BS_YEAR: u16 = 2000;
/// Last BS year covered by the month-length table (inclusive)
pub const MAX_BS_YEAR: u16 = 2090;

/// First Gregorian year accepted for conversion
pub const MIN_AD_YEAR: u16 = 1943;
/// Last Gregorian year accepted for conversion (inclusive)
pub const MAX_AD_YEAR: u16 = 2033;

/// BS year of the epoch anchor (1 Baishakh 2000)
pub const EPOCH_BS_YEAR: u16 = MIN_BS_YEAR;
/// Gregorian year of the epoch anchor (13 April 1943)
pub const EPOCH_AD_YEAR: u16 = MIN_AD_YEAR;
/// Gregorian month of the epoch anchor
pub const EPOCH_AD_MONTH: u8 = 4;
/// Gregorian day of the epoch anchor
pub const EPOCH_AD_DAY: u8 = 13;
/// Day-of-year of 13 April 1943: 31 + 28 + 31 + 13
pub const EPOCH_DAY_OF_YEAR: i32 = 103;

/// Months per year in both calendars
pub const MONTHS_PER_YEAR: u8 = 12;
/// Longest possible BS month
pub const MAX_BS_DAY: u8 = 32;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January / Baishakh
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for December / Chaitra
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Sakamoto month offsets, January first
pub(crate) const WEEKDAY_MONTH_OFFSETS: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Full BS month names, Baishakh first
pub const BS_MONTH_NAMES: [&str; 12] = [
    "Baishakh", "Jestha", "Ashadh", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Three-letter BS month names
pub const BS_MONTH_NAMES_SHORT: [&str; 12] = [
    "Bai", "Jes", "Ash", "Shr", "Bhd", "Asw", "Kar", "Man", "Pou", "Mag", "Fal", "Cha",
];

/// Gregorian year of the RTC's `00` year register
pub const RTC_CENTURY_BASE: u16 = 2000;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator of the short BS form (`DD/MM/YYYY BS`)
pub const SHORT_FORM_SEPARATOR: char = '/';
/// Suffix of the short BS form
pub const BS_SUFFIX: &str = "BS";
/// Line terminator expected by the serial console
pub const LINE_ENDING: &str = "\r\n";
