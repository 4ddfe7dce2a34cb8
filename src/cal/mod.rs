//! Calendar-system-agnostic dates and times, which use fields such as
//! years, months, days, hours, minutes, and seconds.

pub mod adjust;
pub mod date;
pub mod datetime;
pub mod field;
pub mod offset;
pub mod query;
pub mod time;
pub mod unit;
#[cfg(feature = "clock")] pub mod convenience;

use std::fmt;

use crate::error::{Error, Result};

use self::date::{Month, Weekday};
use self::datetime::LocalDateTime;
use self::field::{Field, ValueRange};
use self::time::LocalTime;


/// A **chronology** describes a calendar system: the rules used to number
/// the years, months, and days of a date.
///
/// Dates from two different chronologies can’t be meaningfully compared,
/// even if their types allow it, because “the third month of the year”
/// means something different in each one.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct Chronology {
    id: &'static str,
    calendar_type: &'static str,
}

impl Chronology {

    /// The ISO-8601 calendar system, which is the proleptic Gregorian
    /// calendar used by most of the world today.
    pub const ISO: Self = Self::new("ISO", "iso8601");

    /// Describes a calendar system by its identifier and the name of its
    /// calendar type.
    pub const fn new(id: &'static str, calendar_type: &'static str) -> Self {
        Self { id, calendar_type }
    }

    /// The identifier of this calendar system, such as `ISO`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The calendar type, such as `iso8601`.
    pub fn calendar_type(&self) -> &'static str {
        self.calendar_type
    }
}

impl fmt::Display for Chronology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id)
    }
}


/// A date in one particular calendar system.
///
/// This is everything a `LocalDateTime` needs from its date: reading and
/// writing date fields, ordering against other dates of the same type, and
/// the day, month, and year arithmetic that time arithmetic spills into.
///
/// Dates are values. Every method that changes something returns a new
/// date, and because `with` returns `Self`, a date can never be turned
/// into a date of another calendar system by accident.
pub trait CalendarDate: Clone + Ord + fmt::Debug + fmt::Display {

    /// The calendar system this date belongs to.
    fn chronology(&self) -> Chronology;

    /// The range of values the date field can take for this date.
    ///
    /// Returns an `UnsupportedField` error for time fields, and for any
    /// date field this calendar system doesn’t have.
    fn range(&self, field: Field) -> Result<ValueRange>;

    /// Reads the value of a date field.
    fn get(&self, field: Field) -> Result<i64>;

    /// Returns a copy of this date with the given field changed.
    fn with(&self, field: Field, value: i64) -> Result<Self>;

    /// Returns the date a number of days later (or earlier, if negative).
    fn plus_days(&self, days: i64) -> Result<Self>;

    /// Returns the date a number of months later. Days past the end of the
    /// new month are moved back to its last day.
    fn plus_months(&self, months: i64) -> Result<Self>;

    /// Returns the date a number of years later. Days past the end of the
    /// new month are moved back to its last day.
    fn plus_years(&self, years: i64) -> Result<Self>;

    /// Returns the date a number of weeks later.
    fn plus_weeks(&self, weeks: i64) -> Result<Self> {
        let days = weeks.checked_mul(7).ok_or(Error::Overflow)?;
        self.plus_days(days)
    }

    /// Pairs this date with a time of day.
    fn at_time(&self, time: LocalTime) -> LocalDateTime<Self> {
        LocalDateTime::new(self.clone(), time)
    }
}


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;
}
