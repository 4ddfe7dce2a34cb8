//! Local date-times in any calendar system.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::cal::{CalendarDate, Chronology, DatePiece, TimePiece};
use crate::cal::adjust::{Adjuster, PlusMinusAdjuster};
use crate::cal::date::{LocalDate, Month, Weekday};
use crate::cal::field::{AnyField, Field, ValueRange};
use crate::cal::offset::{Offset, OffsetDateTime};
use crate::cal::query::{Facet, FacetValue};
use crate::cal::time::{LocalTime, NANOS_IN_SECOND, SECONDS_IN_DAY};
use crate::cal::unit::PeriodUnit;
use crate::error::{Error, Result};
use crate::util::split_cycles;


/// A **local date-time** is a date paired with a time of day, *without a
/// time zone*.
///
/// The date can come from any calendar system, and is whatever type `D`
/// is; the time of day is the same `LocalTime` for every calendar. By
/// default, the date is an ISO-8601 `LocalDate`.
///
/// Fields are read and written through `get` and `with`, which look at
/// whether the field is a time field or a date field and pass the request
/// on to the time or the date accordingly. Nothing here changes a value
/// in place: every method that “changes” something returns a new
/// date-time, and leaves the original as it was.
///
/// Bear in mind that two date-times might have dates from two different
/// calendar systems, so code that handles arbitrary date-times has to
/// allow for things like years with thirteen months.
pub struct LocalDateTime<D: CalendarDate = LocalDate> {
    date: D,
    time: LocalTime,
}

impl<D: CalendarDate> LocalDateTime<D> {

    /// Combines a date and a time of day into a date-time.
    pub fn new(date: D, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Combines a date and a time of day that might be missing into a
    /// date-time, returning an `InvalidArgument` error if either one is.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{LocalDate, LocalDateTime, LocalTime, Error};
    ///
    /// let date = LocalDate::from_epoch_day(0).ok();
    /// assert!(LocalDateTime::of(date, Some(LocalTime::noon())).is_ok());
    ///
    /// let missing = LocalDateTime::<LocalDate>::of(None, Some(LocalTime::noon()));
    /// assert!(matches!(missing, Err(Error::InvalidArgument(_))));
    /// ```
    pub fn of(date: Option<D>, time: Option<LocalTime>) -> Result<Self> {
        match (date, time) {
            (Some(date), Some(time)) => Ok(Self::new(date, time)),
            (None, _) => {
                debug!("Rejected date-time without a date");
                Err(Error::InvalidArgument("date must be present"))
            }
            (_, None) => {
                debug!("Rejected date-time without a time");
                Err(Error::InvalidArgument("time must be present"))
            }
        }
    }

    /// The date portion of this date-time stamp.
    pub fn date(&self) -> &D {
        &self.date
    }

    /// The time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Splits this date-time back into its date and time.
    pub fn into_parts(self) -> (D, LocalTime) {
        (self.date, self.time)
    }

    /// The calendar system of this date-time’s date.
    pub fn chronology(&self) -> Chronology {
        self.date.chronology()
    }

    /// Returns a copy of this date-time with a different date.
    pub fn with_date(&self, date: D) -> Self {
        Self { date, time: self.time }
    }

    /// Returns a copy of this date-time with a different time of day.
    pub fn with_time(&self, time: LocalTime) -> Self {
        Self { date: self.date.clone(), time }
    }

    /// The range of values the field can take for this date-time.
    pub fn range<'f>(&self, field: impl Into<AnyField<'f, D>>) -> Result<ValueRange>
    where D: 'f
    {
        match field.into() {
            AnyField::Standard(f) if f.is_time_field() => self.time.range(f),
            AnyField::Standard(f)                      => self.date.range(f),
            AnyField::Extension(f) => {
                trace!(field = f.name(), "Routing range query to extension field");
                f.resolve_range(self)
            }
        }
    }

    /// Reads the value of a field.
    ///
    /// Time fields are read from the time, date fields from the date, and
    /// extension fields are handed the whole date-time to work out their
    /// own value. Any error comes from whichever of those was asked.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{LocalDate, LocalDateTime, LocalTime, Month, Field};
    ///
    /// let then = LocalDateTime::new(LocalDate::ymd(1969, Month::July, 20).unwrap(),
    ///                               LocalTime::hms(20, 17, 40).unwrap());
    ///
    /// assert_eq!(then.get(Field::Year), Ok(1969));
    /// assert_eq!(then.get(Field::MinuteOfHour), Ok(17));
    /// ```
    pub fn get<'f>(&self, field: impl Into<AnyField<'f, D>>) -> Result<i64>
    where D: 'f
    {
        match field.into() {
            AnyField::Standard(f) if f.is_time_field() => self.time.get(f),
            AnyField::Standard(f)                      => self.date.get(f),
            AnyField::Extension(f) => {
                trace!(field = f.name(), "Routing read to extension field");
                f.resolve_get(self)
            }
        }
    }

    /// Returns a copy of this date-time with a field set to a new value.
    ///
    /// Setting a time field leaves the date alone, and setting a date field
    /// leaves the time alone. Extension fields decide for themselves.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{LocalDate, LocalDateTime, LocalTime, Month, Field};
    ///
    /// let then = LocalDateTime::new(LocalDate::ymd(2012, Month::January, 31).unwrap(),
    ///                               LocalTime::hm(9, 30).unwrap());
    ///
    /// let later = then.with(Field::HourOfDay, 17).unwrap();
    /// assert_eq!(later.time(), LocalTime::hm(17, 30).unwrap());
    /// assert_eq!(later.date(), then.date());
    ///
    /// assert!(then.with(Field::MonthOfYear, 13).is_err());
    /// ```
    pub fn with<'f>(&self, field: impl Into<AnyField<'f, D>>, value: i64) -> Result<Self>
    where D: 'f
    {
        match field.into() {
            AnyField::Standard(f) if f.is_time_field() => Ok(self.with_time(self.time.with(f, value)?)),
            AnyField::Standard(f)                      => Ok(self.with_date(self.date.with(f, value)?)),
            AnyField::Extension(f) => {
                trace!(field = f.name(), value, "Routing write to extension field");
                f.resolve_set(self, value)
            }
        }
    }

    /// Hands this date-time to the adjuster, and returns whatever it
    /// produces.
    pub fn adjust<A: Adjuster<D> + ?Sized>(&self, adjuster: &A) -> Result<Self> {
        adjuster.adjust(self)
    }

    /// Adds an amount to this date-time, and returns whatever it produces.
    pub fn plus_adjusted<A: PlusMinusAdjuster<D> + ?Sized>(&self, amount: &A) -> Result<Self> {
        amount.add_to(self)
    }

    /// Subtracts an amount from this date-time, and returns whatever it
    /// produces.
    pub fn minus_adjusted<A: PlusMinusAdjuster<D> + ?Sized>(&self, amount: &A) -> Result<Self> {
        amount.subtract_from(self)
    }

    /// Returns a copy of this date-time with an amount of the given unit
    /// added.
    ///
    /// Units of a day or longer are added to the date, leaving the time of
    /// day alone. Shorter units are added to the time of day, and if that
    /// passes midnight, the whole number of days it went past is added to
    /// the date as well, so nothing is lost.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{LocalDate, LocalDateTime, LocalTime, Month, PeriodUnit};
    ///
    /// let eve = LocalDateTime::new(LocalDate::ymd(1999, Month::December, 31).unwrap(),
    ///                              LocalTime::hm(23, 0).unwrap());
    ///
    /// let party = eve.plus(90, PeriodUnit::Minutes).unwrap();
    /// assert_eq!(party.date(), &LocalDate::ymd(2000, Month::January, 1).unwrap());
    /// assert_eq!(party.time(), LocalTime::hm(0, 30).unwrap());
    /// ```
    pub fn plus(&self, amount: i64, unit: PeriodUnit) -> Result<Self> {
        if let Some(nanos) = unit.nanos() {
            return self.plus_nanos_with_carry(i128::from(amount) * i128::from(nanos));
        }

        let date = match unit {
            PeriodUnit::Days       => self.date.plus_days(amount)?,
            PeriodUnit::Weeks      => self.date.plus_weeks(amount)?,
            PeriodUnit::Months     => self.date.plus_months(amount)?,
            PeriodUnit::Years      => self.date.plus_years(amount)?,
            PeriodUnit::Decades    => self.date.plus_years(amount.checked_mul(10).ok_or(Error::Overflow)?)?,
            PeriodUnit::Centuries  => self.date.plus_years(amount.checked_mul(100).ok_or(Error::Overflow)?)?,
            PeriodUnit::Millennia  => self.date.plus_years(amount.checked_mul(1000).ok_or(Error::Overflow)?)?,
            _ => unreachable!("{} has an exact length", unit),
        };

        Ok(self.with_date(date))
    }

    /// Returns a copy of this date-time with an amount of the given unit
    /// subtracted. This follows the same rules as `plus`.
    pub fn minus(&self, amount: i64, unit: PeriodUnit) -> Result<Self> {
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        }
        else {
            self.plus(-amount, unit)
        }
    }

    fn plus_nanos_with_carry(&self, nanos: i128) -> Result<Self> {
        let (time, days) = self.time.plus_nanos_with_carry(nanos);
        if days == 0 {
            return Ok(self.with_time(time));
        }

        let days = i64::try_from(days).map_err(|_| Error::Overflow)?;
        trace!(days, "Carrying time overflow into the date");
        Ok(Self::new(self.date.plus_days(days)?, time))
    }

    /// Combines this date-time with an offset from UTC. The date and time
    /// are kept exactly as they are.
    pub fn at_offset(&self, offset: Offset) -> OffsetDateTime<D> {
        OffsetDateTime::of(self.date.clone(), self.time, offset)
    }

    /// Extracts a facet of this date-time, returning `None` if this kind
    /// of date-time doesn’t have it.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{LocalDate, LocalDateTime, LocalTime, Chronology, Facet};
    ///
    /// let then = LocalDateTime::new(LocalDate::from_epoch_day(0).unwrap(), LocalTime::midnight());
    /// let chronology = then.extract(Facet::Chronology).and_then(|f| f.chronology());
    /// assert_eq!(chronology, Some(Chronology::ISO));
    /// assert_eq!(then.extract(Facet::Offset), None);
    /// ```
    pub fn extract(&self, facet: Facet) -> Option<FacetValue> {
        match facet {
            Facet::Chronology => Some(FacetValue::Chronology(self.chronology())),
            Facet::Offset     => None,
        }
    }
}

impl LocalDateTime<LocalDate> {

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**.
    pub fn at(seconds_since_1970_epoch: i64) -> Result<Self> {
        Self::at_nanos(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, and the
    /// nanosecond of that second.
    pub fn at_nanos(seconds_since_1970_epoch: i64, nanosecond_of_second: i32) -> Result<Self> {

        // Just split the input value into days and seconds, and let
        // LocalDate and LocalTime do all the hard work.
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);
        let nanos = Field::NanoOfSecond.check_valid_value(i64::from(nanosecond_of_second))?;

        Ok(Self {
            date: LocalDate::from_epoch_day(days)?,
            time: LocalTime::from_nano_of_day(secs * NANOS_IN_SECOND + nanos)?,
        })
    }

    /// The number of seconds between **midnight, 1st January, 1970** and
    /// this date-time, ignoring any fraction of a second.
    pub fn to_epoch_second(&self) -> i64 {
        self.date.epoch_day() * SECONDS_IN_DAY + self.time.to_second_of_day()
    }

    /// Creates a new date-time stamp set to the current time, in UTC.
    #[cfg(feature = "clock")]
    pub fn now() -> Result<Self> {
        let (s, ns) = crate::system::sys_time();
        Self::at_nanos(s, ns)
    }
}


impl<D: CalendarDate + Copy> Copy for LocalDateTime<D> {}

impl<D: CalendarDate> Clone for LocalDateTime<D> {
    fn clone(&self) -> Self {
        Self { date: self.date.clone(), time: self.time }
    }
}

/// Two date-times are equal when both their dates and their times are.
impl<D, E> PartialEq<LocalDateTime<E>> for LocalDateTime<D>
where D: CalendarDate + PartialEq<E>,
      E: CalendarDate,
{
    fn eq(&self, other: &LocalDateTime<E>) -> bool {
        self.date == other.date && self.time == other.time
    }
}

impl<D: CalendarDate> Eq for LocalDateTime<D> {}

impl<D: CalendarDate + Hash> Hash for LocalDateTime<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
        self.time.hash(state);
    }
}

/// Date-times are compared by date first, and only by time of day when the
/// dates are the same.
///
/// Dates of two different types can be compared if the date types allow
/// it, but the result only means something if both are from the same
/// calendar system.
impl<D, E> PartialOrd<LocalDateTime<E>> for LocalDateTime<D>
where D: CalendarDate + PartialOrd<E>,
      E: CalendarDate,
{
    fn partial_cmp(&self, other: &LocalDateTime<E>) -> Option<Ordering> {
        match <D as PartialOrd<E>>::partial_cmp(&self.date, &other.date)? {
            Ordering::Equal => Some(self.time.cmp(&other.time)),
            ordering        => Some(ordering),
        }
    }
}

impl<D: CalendarDate> Ord for LocalDateTime<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl<D: CalendarDate + DatePiece> DatePiece for LocalDateTime<D> {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl<D: CalendarDate> TimePiece for LocalDateTime<D> {
    fn hour(&self) -> i8 { self.time.hour() }
    fn minute(&self) -> i8 { self.time.minute() }
    fn second(&self) -> i8 { self.time.second() }
    fn millisecond(&self) -> i16 { self.time.millisecond() }
}

impl<D: CalendarDate> fmt::Display for LocalDateTime<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl<D: CalendarDate> fmt::Debug for LocalDateTime<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self)
    }
}
