//! Units of time, used to add amounts to date-times.

use std::fmt;

use crate::cal::time::{NANOS_IN_SECOND, NANOS_IN_MINUTE, NANOS_IN_HOUR};


/// A unit that an amount of time can be measured in.
///
/// The units up to and including `HalfDays` have an exact length, and are
/// added to the time of day, carrying any overflow into the date. The
/// rest depend on the calendar system (not every month has the same number
/// of days) and are handed to the date.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum PeriodUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl PeriodUnit {

    /// Returns whether this unit is added to the time of day.
    pub fn is_time_based(self) -> bool {
        self <= PeriodUnit::HalfDays
    }

    /// Returns whether this unit is added to the date.
    pub fn is_date_based(self) -> bool {
        !self.is_time_based()
    }

    /// The exact length of this unit in nanoseconds, for the units that
    /// have one.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::PeriodUnit;
    ///
    /// assert_eq!(PeriodUnit::Minutes.nanos(), Some(60_000_000_000));
    /// assert_eq!(PeriodUnit::Months.nanos(), None);
    /// ```
    pub fn nanos(self) -> Option<i64> {
        match self {
            PeriodUnit::Nanos     => Some(1),
            PeriodUnit::Micros    => Some(1_000),
            PeriodUnit::Millis    => Some(1_000_000),
            PeriodUnit::Seconds   => Some(NANOS_IN_SECOND),
            PeriodUnit::Minutes   => Some(NANOS_IN_MINUTE),
            PeriodUnit::Hours     => Some(NANOS_IN_HOUR),
            PeriodUnit::HalfDays  => Some(NANOS_IN_HOUR * 12),
            _                     => None,
        }
    }

    /// The name of this unit.
    pub fn name(self) -> &'static str {
        match self {
            PeriodUnit::Nanos      => "Nanos",
            PeriodUnit::Micros     => "Micros",
            PeriodUnit::Millis     => "Millis",
            PeriodUnit::Seconds    => "Seconds",
            PeriodUnit::Minutes    => "Minutes",
            PeriodUnit::Hours      => "Hours",
            PeriodUnit::HalfDays   => "HalfDays",
            PeriodUnit::Days       => "Days",
            PeriodUnit::Weeks      => "Weeks",
            PeriodUnit::Months     => "Months",
            PeriodUnit::Years      => "Years",
            PeriodUnit::Decades    => "Decades",
            PeriodUnit::Centuries  => "Centuries",
            PeriodUnit::Millennia  => "Millennia",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
