//! Times of day, without a date or a time zone.

use std::fmt;

use crate::cal::TimePiece;
use crate::cal::field::{Field, ValueRange};
use crate::error::{Error, Result};
use crate::util::split_cycles;


pub(crate) const NANOS_IN_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_IN_MINUTE: i64 = NANOS_IN_SECOND * 60;
pub(crate) const NANOS_IN_HOUR: i64 = NANOS_IN_MINUTE * 60;
pub(crate) const NANOS_IN_DAY: i64 = NANOS_IN_HOUR * 24;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;


/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
///
/// Local times have nanosecond precision, and run from midnight up to one
/// nanosecond before the following midnight. They don’t belong to any
/// calendar system, which is why every calendar’s dates can share them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
}

impl LocalTime {

    /// The time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, nanosecond: 0 }
    }

    /// The time at midday.
    pub fn noon() -> Self {
        Self { hour: 12, minute: 0, second: 0, nanosecond: 0 }
    }

    /// Creates a new timestamp instance with the given hour and minute
    /// fields. The second and nanosecond fields are set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{LocalTime, TimePiece};
    ///
    /// let time = LocalTime::hm(8, 30).unwrap();
    /// assert_eq!(time.hour(), 8);
    /// assert_eq!(time.second(), 0);
    ///
    /// assert!(LocalTime::hm(24, 0).is_err());
    /// ```
    pub fn hm(hour: i8, minute: i8) -> Result<Self> {
        Self::hms_nano(hour, minute, 0, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The nanosecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self> {
        Self::hms_nano(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and millisecond fields.
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self> {
        let millisecond = Field::MilliOfSecond.check_valid_value(i64::from(millisecond))?;
        Self::hms_nano(hour, minute, second, millisecond as i32 * 1_000_000)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and nanosecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error naming the
    /// first field that was wrong.
    pub fn hms_nano(hour: i8, minute: i8, second: i8, nanosecond: i32) -> Result<Self> {
        let _ = Field::HourOfDay.check_valid_value(i64::from(hour))?;
        let _ = Field::MinuteOfHour.check_valid_value(i64::from(minute))?;
        let _ = Field::SecondOfMinute.check_valid_value(i64::from(second))?;
        let _ = Field::NanoOfSecond.check_valid_value(i64::from(nanosecond))?;
        Ok(Self { hour, minute, second, nanosecond })
    }

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight.
    pub fn from_second_of_day(seconds: i64) -> Result<Self> {
        let seconds = Field::SecondOfDay.check_valid_value(seconds)?;
        Ok(Self::from_nano_of_day_unchecked(seconds * NANOS_IN_SECOND))
    }

    /// Computes the time based on the number of nanoseconds that have
    /// elapsed since midnight.
    pub fn from_nano_of_day(nanos: i64) -> Result<Self> {
        let nanos = Field::NanoOfDay.check_valid_value(nanos)?;
        Ok(Self::from_nano_of_day_unchecked(nanos))
    }

    /// The caller guarantees that `nanos` is within `0 .. NANOS_IN_DAY`.
    fn from_nano_of_day_unchecked(nanos: i64) -> Self {
        Self {
            hour:       (nanos / NANOS_IN_HOUR) as i8,
            minute:     (nanos / NANOS_IN_MINUTE % 60) as i8,
            second:     (nanos / NANOS_IN_SECOND % 60) as i8,
            nanosecond: (nanos % NANOS_IN_SECOND) as i32,
        }
    }

    /// The nanosecond of the second, from 0 to 999,999,999.
    pub fn nanosecond(&self) -> i32 {
        self.nanosecond
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring any fraction of a second.
    pub fn to_second_of_day(self) -> i64 {
        i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Calculate the number of nanoseconds since midnight this time is at.
    pub fn to_nano_of_day(self) -> i64 {
        self.to_second_of_day() * NANOS_IN_SECOND + i64::from(self.nanosecond)
    }

    /// Shifts this time by the given number of nanoseconds, wrapping around
    /// midnight, and returns the new time along with the number of whole
    /// days the shift crossed.
    ///
    /// The day count is negative when the shift goes back past midnight,
    /// so the time returned is always on the clock face: going back one
    /// nanosecond from midnight gives 23:59:59.999999999 and a carry of −1.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::LocalTime;
    ///
    /// let late = LocalTime::hm(23, 0).unwrap();
    /// let (time, days) = late.plus_nanos_with_carry(2 * 3600 * 1_000_000_000);
    /// assert_eq!(time, LocalTime::hm(1, 0).unwrap());
    /// assert_eq!(days, 1);
    /// ```
    pub fn plus_nanos_with_carry(self, nanos: i128) -> (Self, i128) {
        let total = i128::from(self.to_nano_of_day()) + nanos;
        let days = total.div_euclid(i128::from(NANOS_IN_DAY));
        let rem  = total.rem_euclid(i128::from(NANOS_IN_DAY));
        (Self::from_nano_of_day_unchecked(rem as i64), days)
    }

    /// Shifts this time by whole nanoseconds, wrapping around midnight and
    /// throwing the day count away.
    fn plus_nanos_wrapping(self, nanos: i64) -> Self {
        let (_, rem) = split_cycles(self.to_nano_of_day() + nanos, NANOS_IN_DAY);
        Self::from_nano_of_day_unchecked(rem)
    }

    /// The range of values the field can take. Time fields have the same
    /// range at every time of day.
    pub fn range(&self, field: Field) -> Result<ValueRange> {
        if field.is_time_field() {
            Ok(field.range())
        }
        else {
            Err(Error::UnsupportedField(field.name().to_owned()))
        }
    }

    /// Reads the value of a time field.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{LocalTime, Field};
    ///
    /// let time = LocalTime::hms(15, 45, 10).unwrap();
    /// assert_eq!(time.get(Field::ClockHourOfAmPm), Ok(3));
    /// assert_eq!(time.get(Field::AmPmOfDay), Ok(1));
    /// assert_eq!(time.get(Field::MinuteOfDay), Ok(15 * 60 + 45));
    /// ```
    pub fn get(&self, field: Field) -> Result<i64> {
        let hour = i64::from(self.hour);
        Ok(match field {
            Field::NanoOfSecond     => i64::from(self.nanosecond),
            Field::NanoOfDay        => self.to_nano_of_day(),
            Field::MicroOfSecond    => i64::from(self.nanosecond / 1_000),
            Field::MicroOfDay       => self.to_nano_of_day() / 1_000,
            Field::MilliOfSecond    => i64::from(self.nanosecond / 1_000_000),
            Field::MilliOfDay       => self.to_nano_of_day() / 1_000_000,
            Field::SecondOfMinute   => i64::from(self.second),
            Field::SecondOfDay      => self.to_second_of_day(),
            Field::MinuteOfHour     => i64::from(self.minute),
            Field::MinuteOfDay      => hour * 60 + i64::from(self.minute),
            Field::HourOfAmPm       => hour % 12,
            Field::ClockHourOfAmPm  => if hour % 12 == 0 { 12 } else { hour % 12 },
            Field::HourOfDay        => hour,
            Field::ClockHourOfDay   => if hour == 0 { 24 } else { hour },
            Field::AmPmOfDay        => hour / 12,
            _ => return Err(Error::UnsupportedField(field.name().to_owned())),
        })
    }

    /// Returns a copy of this time with the given field changed.
    ///
    /// Fields that span more than one unit, such as `MinuteOfDay`, leave
    /// the smaller units alone: setting the minute-of-day on 10:15:30
    /// keeps the thirty seconds.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{LocalTime, Field};
    ///
    /// let time = LocalTime::hms(10, 15, 30).unwrap();
    /// assert_eq!(time.with(Field::MinuteOfDay, 61), LocalTime::hms(1, 1, 30));
    /// assert!(time.with(Field::MinuteOfHour, 60).is_err());
    /// ```
    pub fn with(&self, field: Field, value: i64) -> Result<Self> {
        if field.is_date_field() {
            return Err(Error::UnsupportedField(field.name().to_owned()));
        }

        let value = field.check_valid_value(value)?;
        let hour = i64::from(self.hour);

        // Every value has been range-checked above, so the narrowing casts
        // and shifts below all stay on the clock face.
        Ok(match field {
            Field::NanoOfSecond     => Self { nanosecond: value as i32, ..*self },
            Field::NanoOfDay        => Self::from_nano_of_day_unchecked(value),
            Field::MicroOfSecond    => Self { nanosecond: (value * 1_000) as i32, ..*self },
            Field::MicroOfDay       => self.plus_nanos_wrapping((value - self.to_nano_of_day() / 1_000) * 1_000),
            Field::MilliOfSecond    => Self { nanosecond: (value * 1_000_000) as i32, ..*self },
            Field::MilliOfDay       => self.plus_nanos_wrapping((value - self.to_nano_of_day() / 1_000_000) * 1_000_000),
            Field::SecondOfMinute   => Self { second: value as i8, ..*self },
            Field::SecondOfDay      => self.plus_nanos_wrapping((value - self.to_second_of_day()) * NANOS_IN_SECOND),
            Field::MinuteOfHour     => Self { minute: value as i8, ..*self },
            Field::MinuteOfDay      => self.plus_nanos_wrapping((value - (hour * 60 + i64::from(self.minute))) * NANOS_IN_MINUTE),
            Field::HourOfAmPm       => self.plus_nanos_wrapping((value - hour % 12) * NANOS_IN_HOUR),
            Field::ClockHourOfAmPm  => self.plus_nanos_wrapping(((if value == 12 { 0 } else { value }) - hour % 12) * NANOS_IN_HOUR),
            Field::HourOfDay        => Self { hour: value as i8, ..*self },
            Field::ClockHourOfDay   => Self { hour: if value == 24 { 0 } else { value as i8 }, ..*self },
            Field::AmPmOfDay        => self.plus_nanos_wrapping((value - hour / 12) * 12 * NANOS_IN_HOUR),
            _ => unreachable!("date fields were rejected above"),
        })
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { (self.nanosecond / 1_000_000) as i16 }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;

        if self.second > 0 || self.nanosecond > 0 {
            write!(f, ":{:02}", self.second)?;

            if self.nanosecond > 0 {
                if self.nanosecond % 1_000_000 == 0 {
                    write!(f, ".{:03}", self.nanosecond / 1_000_000)?;
                }
                else if self.nanosecond % 1_000 == 0 {
                    write!(f, ".{:06}", self.nanosecond / 1_000)?;
                }
                else {
                    write!(f, ".{:09}", self.nanosecond)?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self)
    }
}
