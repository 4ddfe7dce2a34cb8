//! Datetimes with a fixed UTC offset.

use std::fmt;

use crate::cal::{CalendarDate, TimePiece};
use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::query::{Facet, FacetValue};
use crate::cal::time::LocalTime;
use crate::error::{Error, Result};


/// The largest offset either side of UTC, in seconds: eighteen hours.
const MAX_OFFSET_SECONDS: i32 = 18 * 60 * 60;


/// An **offset** is a fixed number of seconds ahead of or behind UTC.
///
/// Offsets don’t know anything about time zones or daylight-saving time;
/// they just record the difference between a local time and UTC at one
/// particular moment.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct Offset {
    offset_seconds: i32,
}

impl Offset {

    /// The offset of UTC itself.
    pub fn utc() -> Self {
        Self { offset_seconds: 0 }
    }

    /// An offset of the given number of seconds, which must be no more
    /// than eighteen hours either way.
    pub fn of_seconds(seconds: i32) -> Result<Self> {
        if seconds >= -MAX_OFFSET_SECONDS && seconds <= MAX_OFFSET_SECONDS {
            Ok(Self { offset_seconds: seconds })
        }
        else {
            Err(Error::OffsetOutOfRange)
        }
    }

    /// An offset of the given number of hours and minutes. Both have to
    /// point in the same direction, so `-3, -45` is three and three
    /// quarter hours behind UTC, but `-3, 45` is an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::Offset;
    ///
    /// let india = Offset::of_hours_and_minutes(5, 30).unwrap();
    /// assert_eq!(india.total_seconds(), 19_800);
    /// assert!(Offset::of_hours_and_minutes(-4, 30).is_err());
    /// ```
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::OffsetSignMismatch)
        }
        else if hours <= -24 || hours >= 24 || minutes <= -60 || minutes >= 60 {
            Err(Error::OffsetOutOfRange)
        }
        else {
            let hours = i32::from(hours);
            let minutes = i32::from(minutes);
            Self::of_seconds(hours * (60 * 60) + minutes * 60)
        }
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds == 0
    }

    pub fn is_negative(self) -> bool {
        self.offset_seconds < 0
    }

    pub fn total_seconds(self) -> i32 {
        self.offset_seconds
    }

    pub fn hours(self) -> i8 {
        (self.offset_seconds / 60 / 60) as i8
    }

    pub fn minutes(self) -> i8 {
        (self.offset_seconds / 60 % 60) as i8
    }

    pub fn seconds(self) -> i8 {
        (self.offset_seconds % 60) as i8
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_utc() {
            return f.write_str("Z");
        }

        let sign = if self.is_negative() { '-' } else { '+' };
        write!(f, "{}{:02}:{:02}", sign, self.hours().abs(), self.minutes().abs())?;

        if self.seconds() != 0 {
            write!(f, ":{:02}", self.seconds().abs())?;
        }

        Ok(())
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset({})", self)
    }
}


/// An **offset date-time** is a local date-time paired with the offset
/// from UTC it was observed at.
///
/// The date and time are kept exactly as they were given: the offset is
/// recorded alongside them, not applied to them.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct OffsetDateTime<D: CalendarDate = LocalDate> {
    local: LocalDateTime<D>,
    offset: Offset,
}

impl<D: CalendarDate> OffsetDateTime<D> {

    /// Combines a date, a time, and an offset.
    pub fn of(date: D, time: LocalTime, offset: Offset) -> Self {
        Self { local: LocalDateTime::new(date, time), offset }
    }

    pub fn date(&self) -> &D {
        self.local.date()
    }

    pub fn time(&self) -> LocalTime {
        self.local.time()
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The local date-time, without the offset.
    pub fn to_local(&self) -> LocalDateTime<D> {
        self.local.clone()
    }

    /// Returns a copy of this date-time with a different offset, keeping
    /// the same local date and time.
    pub fn with_offset_same_local(&self, offset: Offset) -> Self {
        Self { local: self.local.clone(), offset }
    }

    /// Extracts a facet of this date-time. Both the chronology and the
    /// offset are available.
    pub fn extract(&self, facet: Facet) -> Option<FacetValue> {
        match facet {
            Facet::Offset => Some(FacetValue::Offset(self.offset)),
            _             => self.local.extract(facet),
        }
    }
}

impl<D: CalendarDate> fmt::Display for OffsetDateTime<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.local, self.offset)
    }
}

impl<D: CalendarDate> fmt::Debug for OffsetDateTime<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OffsetDateTime({})", self)
    }
}

impl<D: CalendarDate> TimePiece for OffsetDateTime<D> {
    fn hour(&self) -> i8 { self.local.hour() }
    fn minute(&self) -> i8 { self.local.minute() }
    fn second(&self) -> i8 { self.local.second() }
    fn millisecond(&self) -> i16 { self.local.millisecond() }
}
