//! Adjusters: reusable transformations of date-times.
//!
//! A date-time doesn’t know how to move to “the last day of the month” or
//! “the next working day”; it just hands itself to an adjuster and returns
//! whatever comes back. Any closure of the right shape is an adjuster.

use crate::cal::CalendarDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::time::LocalTime;
use crate::cal::unit::PeriodUnit;
use crate::error::Result;


/// A pure function from one date-time to another.
///
/// ### Examples
///
/// ```
/// use calendrical::{LocalDate, LocalDateTime, LocalTime, Month, Field};
///
/// let then = LocalDateTime::new(LocalDate::ymd(2012, Month::June, 30).unwrap(),
///                               LocalTime::hm(9, 0).unwrap());
///
/// let first_of_month = |dt: &LocalDateTime| dt.with(Field::DayOfMonth, 1);
/// assert_eq!(then.adjust(&first_of_month).unwrap().date(),
///            &LocalDate::ymd(2012, Month::June, 1).unwrap());
/// ```
pub trait Adjuster<D: CalendarDate> {

    /// Computes a new date-time from the given one.
    fn adjust(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>>;
}

impl<D, F> Adjuster<D> for F
where D: CalendarDate,
      F: Fn(&LocalDateTime<D>) -> Result<LocalDateTime<D>>,
{
    fn adjust(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>> {
        self(datetime)
    }
}

/// A time of day adjusts a date-time by replacing its time, leaving the
/// date alone.
impl<D: CalendarDate> Adjuster<D> for LocalTime {
    fn adjust(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>> {
        Ok(datetime.with_time(*self))
    }
}


/// An amount that can be added to or subtracted from a date-time.
pub trait PlusMinusAdjuster<D: CalendarDate> {

    /// Returns the date-time with this amount added.
    fn add_to(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>>;

    /// Returns the date-time with this amount subtracted.
    fn subtract_from(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>>;
}

/// An amount of a single unit, such as `(3, PeriodUnit::Hours)`.
impl<D: CalendarDate> PlusMinusAdjuster<D> for (i64, PeriodUnit) {
    fn add_to(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>> {
        datetime.plus(self.0, self.1)
    }

    fn subtract_from(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>> {
        datetime.minus(self.0, self.1)
    }
}

/// A list of amounts is applied one after another, in order.
impl<D: CalendarDate> PlusMinusAdjuster<D> for [(i64, PeriodUnit)] {
    fn add_to(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>> {
        self.iter().try_fold(datetime.clone(), |dt, amount| amount.add_to(&dt))
    }

    fn subtract_from(&self, datetime: &LocalDateTime<D>) -> Result<LocalDateTime<D>> {
        self.iter().try_fold(datetime.clone(), |dt, amount| amount.subtract_from(&dt))
    }
}
