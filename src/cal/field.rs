//! Fields: the named slices of a date-time that can be read and written.
//!
//! Every standard field is tagged as either a *time field* or a *date
//! field*, and that tag is what a `LocalDateTime` uses to decide whether a
//! request goes to its time or its date. Fields that aren’t one of the
//! standard ones can still be used, by implementing `ExtensionField`.

use std::fmt;

use crate::cal::CalendarDate;
use crate::cal::datetime::LocalDateTime;
use crate::error::{Error, Result};


/// The smallest year supported by the ISO calendar.
pub const MIN_YEAR: i64 = -999_999_999;

/// The largest year supported by the ISO calendar.
pub const MAX_YEAR: i64 = 999_999_999;

/// The epoch day of the first day of `MIN_YEAR`.
pub(crate) const MIN_EPOCH_DAY: i64 = -365_243_219_162;

/// The epoch day of the last day of `MAX_YEAR`.
pub(crate) const MAX_EPOCH_DAY: i64 = 365_241_780_471;


/// One of the standard fields of a date-time.
///
/// The time fields are listed first, and every field from `DayOfWeek`
/// onwards is a date field.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Field {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,

    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    EpochMonth,
    YearOfEra,
    Year,
    Era,
}

impl Field {

    /// Returns whether this field is answered by the time of day.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::Field;
    ///
    /// assert!(Field::MinuteOfHour.is_time_field());
    /// assert!(!Field::DayOfMonth.is_time_field());
    /// ```
    pub fn is_time_field(self) -> bool {
        self < Field::DayOfWeek
    }

    /// Returns whether this field is answered by the date.
    pub fn is_date_field(self) -> bool {
        !self.is_time_field()
    }

    /// The name of this field, as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::NanoOfSecond             => "NanoOfSecond",
            Field::NanoOfDay                => "NanoOfDay",
            Field::MicroOfSecond            => "MicroOfSecond",
            Field::MicroOfDay               => "MicroOfDay",
            Field::MilliOfSecond            => "MilliOfSecond",
            Field::MilliOfDay               => "MilliOfDay",
            Field::SecondOfMinute           => "SecondOfMinute",
            Field::SecondOfDay              => "SecondOfDay",
            Field::MinuteOfHour             => "MinuteOfHour",
            Field::MinuteOfDay              => "MinuteOfDay",
            Field::HourOfAmPm               => "HourOfAmPm",
            Field::ClockHourOfAmPm          => "ClockHourOfAmPm",
            Field::HourOfDay                => "HourOfDay",
            Field::ClockHourOfDay           => "ClockHourOfDay",
            Field::AmPmOfDay                => "AmPmOfDay",
            Field::DayOfWeek                => "DayOfWeek",
            Field::AlignedDayOfWeekInMonth  => "AlignedDayOfWeekInMonth",
            Field::AlignedDayOfWeekInYear   => "AlignedDayOfWeekInYear",
            Field::DayOfMonth               => "DayOfMonth",
            Field::DayOfYear                => "DayOfYear",
            Field::EpochDay                 => "EpochDay",
            Field::AlignedWeekOfMonth       => "AlignedWeekOfMonth",
            Field::AlignedWeekOfYear        => "AlignedWeekOfYear",
            Field::MonthOfYear              => "MonthOfYear",
            Field::EpochMonth               => "EpochMonth",
            Field::YearOfEra                => "YearOfEra",
            Field::Year                     => "Year",
            Field::Era                      => "Era",
        }
    }

    /// The outer range of values this field can take in the ISO calendar,
    /// regardless of any particular date.
    ///
    /// Other calendar systems report their own ranges through
    /// `CalendarDate::range`.
    pub fn range(self) -> ValueRange {
        match self {
            Field::NanoOfSecond             => ValueRange::of(0, 999_999_999),
            Field::NanoOfDay                => ValueRange::of(0, 86_400 * 1_000_000_000 - 1),
            Field::MicroOfSecond            => ValueRange::of(0, 999_999),
            Field::MicroOfDay               => ValueRange::of(0, 86_400 * 1_000_000 - 1),
            Field::MilliOfSecond            => ValueRange::of(0, 999),
            Field::MilliOfDay               => ValueRange::of(0, 86_400 * 1_000 - 1),
            Field::SecondOfMinute           => ValueRange::of(0, 59),
            Field::SecondOfDay              => ValueRange::of(0, 86_400 - 1),
            Field::MinuteOfHour             => ValueRange::of(0, 59),
            Field::MinuteOfDay              => ValueRange::of(0, 24 * 60 - 1),
            Field::HourOfAmPm               => ValueRange::of(0, 11),
            Field::ClockHourOfAmPm          => ValueRange::of(1, 12),
            Field::HourOfDay                => ValueRange::of(0, 23),
            Field::ClockHourOfDay           => ValueRange::of(1, 24),
            Field::AmPmOfDay                => ValueRange::of(0, 1),
            Field::DayOfWeek                => ValueRange::of(1, 7),
            Field::AlignedDayOfWeekInMonth  => ValueRange::of(1, 7),
            Field::AlignedDayOfWeekInYear   => ValueRange::of(1, 7),
            Field::DayOfMonth               => ValueRange::of_variable(1, 28, 31),
            Field::DayOfYear                => ValueRange::of_variable(1, 365, 366),
            Field::EpochDay                 => ValueRange::of(MIN_EPOCH_DAY, MAX_EPOCH_DAY),
            Field::AlignedWeekOfMonth       => ValueRange::of_variable(1, 4, 5),
            Field::AlignedWeekOfYear        => ValueRange::of(1, 53),
            Field::MonthOfYear              => ValueRange::of(1, 12),
            Field::EpochMonth               => ValueRange::of((MIN_YEAR - 1970) * 12, (MAX_YEAR - 1970) * 12 + 11),
            Field::YearOfEra                => ValueRange::of_variable(1, MAX_YEAR, MAX_YEAR + 1),
            Field::Year                     => ValueRange::of(MIN_YEAR, MAX_YEAR),
            Field::Era                      => ValueRange::of(0, 1),
        }
    }

    /// Checks that the value is within this field’s outer range, returning
    /// it unchanged if so.
    pub fn check_valid_value(self, value: i64) -> Result<i64> {
        self.range().check_valid_value(value, self.name())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// The range of valid values for a field.
///
/// The minimum is always fixed, but the maximum may depend on context: the
/// day-of-month goes up to 28 in some months and 31 in others. A range
/// records both the smallest and the largest maximum.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct ValueRange {
    minimum: i64,
    smallest_maximum: i64,
    largest_maximum: i64,
}

impl ValueRange {

    /// A range with a fixed minimum and maximum.
    pub const fn of(minimum: i64, maximum: i64) -> Self {
        Self { minimum, smallest_maximum: maximum, largest_maximum: maximum }
    }

    /// A range whose maximum varies between the two given values.
    pub const fn of_variable(minimum: i64, smallest_maximum: i64, largest_maximum: i64) -> Self {
        Self { minimum, smallest_maximum, largest_maximum }
    }

    pub fn minimum(&self) -> i64 { self.minimum }
    pub fn smallest_maximum(&self) -> i64 { self.smallest_maximum }
    pub fn largest_maximum(&self) -> i64 { self.largest_maximum }

    /// Returns whether both ends of this range are fixed.
    pub fn is_fixed(&self) -> bool {
        self.smallest_maximum == self.largest_maximum
    }

    /// Returns whether the value lies between the minimum and the largest
    /// maximum, inclusive.
    pub fn is_valid_value(&self, value: i64) -> bool {
        value >= self.minimum && value <= self.largest_maximum
    }

    /// Returns the value if it’s valid, or an `InvalidFieldValue` error
    /// naming the field if it isn’t.
    pub fn check_valid_value(&self, value: i64, field: &str) -> Result<i64> {
        if self.is_valid_value(value) {
            Ok(value)
        }
        else {
            Err(Error::InvalidFieldValue { field: field.to_owned(), value, range: *self })
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{} - {}", self.minimum, self.largest_maximum)
        }
        else {
            write!(f, "{} - {}/{}", self.minimum, self.smallest_maximum, self.largest_maximum)
        }
    }
}


/// A field that isn’t one of the standard ones.
///
/// Instead of being routed to either the date or the time, an extension
/// field is handed the whole date-time, so it can compute values from both
/// parts at once, such as the number of minutes since the start of the week.
pub trait ExtensionField<D: CalendarDate> {

    /// The name of this field, as it appears in error messages.
    fn name(&self) -> &str;

    /// Reads this field’s value from the date-time.
    fn resolve_get(&self, datetime: &LocalDateTime<D>) -> Result<i64>;

    /// Returns a copy of the date-time with this field set to the value.
    fn resolve_set(&self, datetime: &LocalDateTime<D>, value: i64) -> Result<LocalDateTime<D>>;

    /// The range of values this field can take for the date-time.
    fn resolve_range(&self, _datetime: &LocalDateTime<D>) -> Result<ValueRange> {
        Err(Error::UnsupportedField(self.name().to_owned()))
    }
}


/// Any field that can be used to read or write part of a `LocalDateTime`:
/// either a standard field, or an extension field.
///
/// This is what the date-time’s `get`, `with`, and `range` methods accept,
/// though both kinds of field convert into it so it rarely needs naming.
pub enum AnyField<'f, D: CalendarDate> {
    Standard(Field),
    Extension(&'f dyn ExtensionField<D>),
}

impl<'f, D: CalendarDate> AnyField<'f, D> {

    /// The name of the underlying field.
    pub fn name(&self) -> &str {
        match *self {
            AnyField::Standard(field)  => field.name(),
            AnyField::Extension(field) => field.name(),
        }
    }
}

impl<'f, D: CalendarDate> Clone for AnyField<'f, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'f, D: CalendarDate> Copy for AnyField<'f, D> {}

impl<'f, D: CalendarDate> From<Field> for AnyField<'f, D> {
    fn from(field: Field) -> Self {
        AnyField::Standard(field)
    }
}

impl<'f, D: CalendarDate, F: ExtensionField<D>> From<&'f F> for AnyField<'f, D> {
    fn from(field: &'f F) -> Self {
        AnyField::Extension(field)
    }
}

impl<'f, D: CalendarDate> fmt::Debug for AnyField<'f, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AnyField::Standard(field)  => write!(f, "Standard({:?})", field),
            AnyField::Extension(field) => write!(f, "Extension({})", field.name()),
        }
    }
}
