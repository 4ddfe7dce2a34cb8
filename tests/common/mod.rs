#![allow(dead_code)]

use std::cmp::Ordering;
use std::fmt;

use calendrical::{CalendarDate, Chronology, Field, LocalDate, Result, ValueRange};


/// How many years the Buddhist era runs ahead of the ISO one.
pub const YEARS_AHEAD: i64 = 543;

pub const BUDDHIST: Chronology = Chronology::new("ThaiBuddhist", "buddhist");


/// A date in a calendar that has the same months and days as ISO, but
/// numbers its years from 543 BCE.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct BuddhistDate(pub LocalDate);

impl BuddhistDate {
    pub fn ymd(year: i64, month: calendrical::Month, day: i8) -> Self {
        BuddhistDate(LocalDate::ymd(year - YEARS_AHEAD, month, day).unwrap())
    }
}

impl CalendarDate for BuddhistDate {
    fn chronology(&self) -> Chronology {
        BUDDHIST
    }

    fn range(&self, field: Field) -> Result<ValueRange> {
        match field {
            Field::Year | Field::YearOfEra => {
                let iso = self.0.range(Field::Year)?;
                Ok(ValueRange::of(iso.minimum() + YEARS_AHEAD, iso.largest_maximum() + YEARS_AHEAD))
            }
            _ => self.0.range(field),
        }
    }

    fn get(&self, field: Field) -> Result<i64> {
        match field {
            Field::Year | Field::YearOfEra => Ok(self.0.get(Field::Year)? + YEARS_AHEAD),
            Field::Era => Ok(1),
            _ => self.0.get(field),
        }
    }

    fn with(&self, field: Field, value: i64) -> Result<Self> {
        match field {
            Field::Year | Field::YearOfEra => {
                let checked = self.range(field)?.check_valid_value(value, field.name())?;
                Ok(BuddhistDate(self.0.with(Field::Year, checked - YEARS_AHEAD)?))
            }
            _ => Ok(BuddhistDate(self.0.with(field, value)?)),
        }
    }

    fn plus_days(&self, days: i64) -> Result<Self> {
        Ok(BuddhistDate(self.0.plus_days(days)?))
    }

    fn plus_months(&self, months: i64) -> Result<Self> {
        Ok(BuddhistDate(self.0.plus_months(months)?))
    }

    fn plus_years(&self, years: i64) -> Result<Self> {
        Ok(BuddhistDate(self.0.plus_years(years)?))
    }
}

/// Buddhist and ISO dates name the same days, so they can be compared
/// directly.
impl PartialEq<LocalDate> for BuddhistDate {
    fn eq(&self, other: &LocalDate) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<LocalDate> for BuddhistDate {
    fn partial_cmp(&self, other: &LocalDate) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for BuddhistDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.0.get(Field::Year).map_err(|_| fmt::Error)? + YEARS_AHEAD;
        write!(f, "{} BE {:02}-{:02}", year,
               self.0.get(Field::MonthOfYear).map_err(|_| fmt::Error)?,
               self.0.get(Field::DayOfMonth).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for BuddhistDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BuddhistDate({})", self)
    }
}
