//! ISO-8601 dates, along with the years, months, and weekdays they are
//! made of.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cal::{CalendarDate, Chronology, DatePiece};
use crate::cal::field::{Field, ValueRange, MIN_EPOCH_DAY, MAX_EPOCH_DAY};
use crate::error::{Error, Result};
use crate::util::{split_cycles, RangeExt};

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// The number of days in this year: 365, or 366 in a leap year.
    pub fn day_count(self) -> i64 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of LocalDate::from_days_since_epoch.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        // Standard leap-year calculations, performed on the remainder
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;


/// Number of days between  **1st January, 1970** and **1st March, 2000**.
///
/// This might seem like an odd number to calculate, instead of using the
/// 1st of January as a reference point, but it turns out that by having the
/// reference point immediately after a possible leap-year day, the maths
/// needed to calculate the day/week/month of an instant comes out a *lot*
/// simpler!
///
/// The Gregorian calendar operates on a 400-year cycle, so the combination
/// of having it on a year that’s a multiple of 400, and having the leap
/// day at the very end of one of these cycles, means that the calculations
/// are reduced to simple division (of course, with a bit of date-shifting
/// to base a date around this reference point).
///
/// Epoch days, as exposed through `Field::EpochDay`, still count from the
/// 1st of January 1970, so this value never escapes this module.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*, in the ISO-8601 calendar system.
///
/// This is the calendar most of the world uses for civil purposes. It’s
/// proleptic, so dates before the Gregorian reform are calculated as
/// though the reform had always been in place, and it supports years from
/// −999,999,999 up to 999,999,999.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// Instantiate the 20th of July 1969 based on its year, month, and day.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self> {
        let year = Field::Year.check_valid_value(year)?;
        let ymd = YMD { year, month, day };
        ymd.check_day()?;
        Ok(Self::from_days_since_epoch(ymd.days_since_1970() - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// Instantiate the 13th of September 2015 based on its year
    /// and day-of-year.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self> {
        let year = Field::Year.check_valid_value(year)?;
        let yearday = ValueRange::of(1, Year(year).day_count())
                                .check_valid_value(yearday, Field::DayOfYear.name())?;

        let jan_1 = YMD { year, month: January, day: 1 };
        Ok(Self::from_days_since_epoch(jan_1.days_since_1970() + yearday - 1 - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date instance from the number of days that have
    /// passed since the **1st of January, 1970**.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month};
    ///
    /// assert_eq!(LocalDate::from_epoch_day(0), LocalDate::ymd(1970, Month::January, 1));
    /// assert_eq!(LocalDate::from_epoch_day(-1), LocalDate::ymd(1969, Month::December, 31));
    /// ```
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self> {
        let epoch_day = Field::EpochDay.check_valid_value(epoch_day)?;
        Ok(Self::from_days_since_epoch(epoch_day - EPOCH_DIFFERENCE))
    }

    /// The number of days that have passed since the **1st of January,
    /// 1970**, which is negative for dates before then.
    pub fn epoch_day(&self) -> i64 {
        self.ymd.days_since_1970()
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the EPOCH.
    ///
    /// This is used by all the constructors above.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // Calculate the numbers of 100-year cycles, 4-year cycles, and
        // leftover years, continually reducing the number of days left to
        // think about.
        // The last day of a 400-year cycle is the leap day of its fourth
        // century, which would otherwise count as a fifth century.
        let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this year

        // Leap year calculation goes thusly:
        //
        // 1. If the year is a multiple of 400, it’s a leap year.
        // 2. Else, if the year is a multiple of 100, it’s *not* a leap year.
        // 3. Else, if the year is a multiple of 4, it’s a leap year again!
        //
        // We already have the values for the numbers of multiples at this
        // point, and it’s safe to re-use them.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // Find out which number day of the year it is.
        // The 306 here refers to the number of days in a year excluding
        // January and February (which are excluded because of the EPOCH)
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        // Turn all those cycles into an actual number of years.
        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Work out the month and number of days into the month by scanning
        // the time triangle, finding the month that has the correct number
        // of days elapsed at the end of it.
        // (it’s “11 - index” below because the triangle goes backwards)
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // Need to add 2 to the month in order to compensate for the EPOCH
        // being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;  // (yes, again)
        }

        // Finally, adjust the day numbers for human reasons: the first day
        // of the month is the 1st, rather than the 0th, and the year needs
        // to be adjusted relative to the EPOCH.
        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: MONTHS[month],
                day:   (month_days + 1) as i8,
            },
        }
    }

    /// Builds a date from a year, month, and day, moving the day back to
    /// the last day of the month if the month is too short for it.
    fn resolve_previous_valid(year: i64, month: Month, day: i8) -> Result<Self> {
        let day = std::cmp::min(day, month.days_in_month(Year(year).is_leap_year()));
        Self::ymd(year, month, day)
    }

    /// Keeps the month and day but moves to another year, clamping the
    /// 29th of February if needed.
    fn with_year(&self, year: i64) -> Result<Self> {
        Self::resolve_previous_valid(year, self.ymd.month, self.ymd.day)
    }

    fn month_value(&self) -> i64 {
        self.ymd.month.months_from_january() as i64 + 1
    }

    fn epoch_month(&self) -> i64 {
        (self.ymd.year - 1970) * 12 + self.month_value() - 1
    }

    fn is_common_year_february(&self) -> bool {
        self.ymd.month == February && !Year(self.ymd.year).is_leap_year()
    }
}

/// Arithmetic that lands outside the supported years is an overflow, rather
/// than a bad field value, as the caller never supplied the year.
fn check_year_after_arithmetic(year: Option<i64>) -> Result<i64> {
    match year {
        Some(y) if Field::Year.range().is_valid_value(y) => Ok(y),
        _ => Err(Error::Overflow),
    }
}

impl CalendarDate for LocalDate {
    fn chronology(&self) -> Chronology {
        Chronology::ISO
    }

    fn range(&self, field: Field) -> Result<ValueRange> {
        if field.is_time_field() {
            return Err(Error::UnsupportedField(field.name().to_owned()));
        }

        let leap = Year(self.ymd.year).is_leap_year();
        Ok(match field {
            Field::DayOfMonth          => ValueRange::of(1, i64::from(self.ymd.month.days_in_month(leap))),
            Field::DayOfYear           => ValueRange::of(1, Year(self.ymd.year).day_count()),
            Field::AlignedWeekOfMonth  => ValueRange::of(1, if self.is_common_year_february() { 4 } else { 5 }),
            Field::YearOfEra if self.ymd.year <= 0 => ValueRange::of(1, Field::Year.range().largest_maximum() + 1),
            Field::YearOfEra           => ValueRange::of(1, Field::Year.range().largest_maximum()),
            _                          => field.range(),
        })
    }

    fn get(&self, field: Field) -> Result<i64> {
        let day = i64::from(self.ymd.day);
        let yearday = i64::from(self.yearday);
        let year = self.ymd.year;

        Ok(match field {
            Field::DayOfWeek                => i64::from(self.weekday.days_from_monday_as_one()),
            Field::AlignedDayOfWeekInMonth  => (day - 1) % 7 + 1,
            Field::AlignedDayOfWeekInYear   => (yearday - 1) % 7 + 1,
            Field::DayOfMonth               => day,
            Field::DayOfYear                => yearday,
            Field::EpochDay                 => self.epoch_day(),
            Field::AlignedWeekOfMonth       => (day - 1) / 7 + 1,
            Field::AlignedWeekOfYear        => (yearday - 1) / 7 + 1,
            Field::MonthOfYear              => self.month_value(),
            Field::EpochMonth               => self.epoch_month(),
            Field::YearOfEra                => if year >= 1 { year } else { 1 - year },
            Field::Year                     => year,
            Field::Era                      => if year >= 1 { 1 } else { 0 },
            _ => return Err(Error::UnsupportedField(field.name().to_owned())),
        })
    }

    fn with(&self, field: Field, value: i64) -> Result<Self> {
        if field.is_time_field() {
            return Err(Error::UnsupportedField(field.name().to_owned()));
        }

        let value = field.check_valid_value(value)?;
        let current = self.get(field)?;

        match field {
            Field::DayOfWeek
            | Field::AlignedDayOfWeekInMonth
            | Field::AlignedDayOfWeekInYear => self.plus_days(value - current),
            Field::AlignedWeekOfMonth
            | Field::AlignedWeekOfYear      => self.plus_weeks(value - current),
            Field::EpochMonth               => self.plus_months(value - current),
            Field::DayOfMonth               => Self::ymd(self.ymd.year, self.ymd.month, value as i8),
            Field::DayOfYear                => Self::yd(self.ymd.year, value),
            Field::EpochDay                 => Self::from_epoch_day(value),
            Field::MonthOfYear              => Self::resolve_previous_valid(self.ymd.year, MONTHS[value as usize - 1], self.ymd.day),
            Field::YearOfEra                => self.with_year(if self.ymd.year >= 1 { value } else { 1 - value }),
            Field::Year                     => self.with_year(value),
            Field::Era if value == current  => Ok(*self),
            Field::Era                      => self.with_year(1 - self.ymd.year),
            _ => Err(Error::UnsupportedField(field.name().to_owned())),
        }
    }

    fn plus_days(&self, days: i64) -> Result<Self> {
        match self.epoch_day().checked_add(days) {
            Some(epoch_day) if epoch_day.is_within(MIN_EPOCH_DAY .. MAX_EPOCH_DAY + 1) => {
                Ok(Self::from_days_since_epoch(epoch_day - EPOCH_DIFFERENCE))
            }
            _ => Err(Error::Overflow),
        }
    }

    fn plus_months(&self, months: i64) -> Result<Self> {
        let month_count = self.ymd.year * 12 + self.month_value() - 1;
        let calculated = month_count.checked_add(months).ok_or(Error::Overflow)?;
        let year = check_year_after_arithmetic(Some(calculated.div_euclid(12)))?;
        let month = MONTHS[calculated.rem_euclid(12) as usize];
        Self::resolve_previous_valid(year, month, self.ymd.day)
    }

    fn plus_years(&self, years: i64) -> Result<Self> {
        let year = check_year_after_arithmetic(self.ymd.year.checked_add(years))?;
        self.with_year(year)
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.ymd.year;
        if year.is_within(0 .. 10000) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month_value(), self.ymd.day)
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month_value(), self.ymd.day)
        }
    }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self)
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl Hash for LocalDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ymd.hash(state)
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


/// A **YMD** is an implementation detail of LocalDate. It provides
/// helper methods relating to the construction of LocalDate instances.
///
/// The main difference is that while all LocalDates get checked for
/// validity before they are used, there is no such check for YMD. The
/// interface to LocalDate ensures that it should be impossible to
/// create an instance of the 74th of March, for example, but you’re
/// free to create such an instance of YMD. For this reason, it is not
/// exposed to implementors of this library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970. The day must already have been checked.
    fn days_since_1970(&self) -> i64 {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = Year(self.year).leap_year_calculations();

        // Work out the number of days from the start of 1970 to now,
        // which is a multiple of the number of years...
        years * 365

            // Plus the number of days between the start of 2000 and the
            // start of 1970, to make up the difference because our
            // dates start at 2000 and instants start at 1970...
            + 10958

            // Plus the number of leap years that have elapsed between
            // now and the start of 2000...
            + leap_days_elapsed

            // Plus the number of days in all the months leading up to
            // the current month...
            + i64::from(self.month.days_before_start())

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the number of days in the month so far! (Days are
            // 1-indexed, so we make them 0-indexed here)
            + i64::from(self.day - 1)
    }

    /// Checks that the day is in the range allowed by the month, reporting
    /// the actual length of the month if it isn’t.
    fn check_day(&self) -> Result<()> {
        let days_in_month = self.month.days_in_month(Year(self.year).is_leap_year());
        let _ = ValueRange::of(1, i64::from(days_in_month))
                          .check_valid_value(i64::from(self.day), Field::DayOfMonth.name())?;
        Ok(())
    }
}

/// Computes the weekday, given the number of days that have passed
/// since the EPOCH.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    let (_, weekday) = split_cycles(days + 3, 7);
    WEEKDAYS[weekday as usize]
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns how many months this is after January, so January is 0.
    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use calendrical::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self> {
        let month = Field::MonthOfYear.check_valid_value(i64::from(month))?;
        Ok(MONTHS[month as usize - 1])
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use calendrical::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self> {
        Self::from_one(month.saturating_add(1))
    }
}


/// A named day of the week.
///
/// Sunday is Day 0. This seems to be a North American thing? It’s pretty
/// much an arbitrary choice, and if you don’t use the `from_zero` method,
/// it won’t affect you at all. The `DayOfWeek` field uses ISO numbering
/// instead, where Monday is 1 and Sunday is 7.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// I’m not going to give weekdays an Ord instance because there’s no
// real standard as to whether Sunday should come before Monday, or the
// other way around. Luckily, they don’t need one, as the field is
// ignored when comparing LocalDates.

static WEEKDAYS: &[Weekday] = &[
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

impl Weekday {

    /// The ISO day-of-week number, from Monday as 1 to Sunday as 7.
    pub fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use calendrical::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self> {
        let number = ValueRange::of(0, 6).check_valid_value(i64::from(weekday), "Weekday")?;
        Ok(WEEKDAYS[number as usize])
    }

    /// Return the weekday based on a number, with Monday as Day 1, Tuesday
    /// as Day 2, and so on, up to Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self> {
        let number = Field::DayOfWeek.check_valid_value(i64::from(weekday))?;
        Ok(WEEKDAYS[(number % 7) as usize])
    }
}
