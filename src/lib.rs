#![crate_name = "calendrical"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for calendar-agnostic local [date-times](LocalDateTime), read and
//! written through fields.
//!
//! A `LocalDateTime` pairs a date from any calendar system with a time of
//! day. Fields such as the year or the minute of the hour are routed to
//! whichever half owns them, and adding an amount of time carries any
//! overflow past midnight into the date.
//!
//! # Examples
//!
//! ```
//! use calendrical::{LocalDate, LocalDateTime, LocalTime, Month, Field, PeriodUnit, Offset};
//!
//! let date = LocalDate::ymd(2015, Month::June, 26).unwrap();
//! let then = LocalDateTime::new(date, LocalTime::hms(23, 30, 0).unwrap());
//!
//! assert_eq!(then.get(Field::DayOfMonth), Ok(26));
//!
//! let later = then.plus(45, PeriodUnit::Minutes).unwrap();
//! assert_eq!(later.to_string(), "2015-06-27T00:15");
//!
//! let fixed = later.at_offset(Offset::of_hours_and_minutes(1, 0).unwrap());
//! assert_eq!(fixed.to_string(), "2015-06-27T00:15+01:00");
//! ```

mod cal;
mod error;
mod util;
#[cfg(feature = "clock")] mod system;

pub use crate::cal::{CalendarDate, Chronology, DatePiece, TimePiece};
pub use crate::cal::adjust::{Adjuster, PlusMinusAdjuster};
pub use crate::cal::date::{LocalDate, Month, Weekday, Year};
pub use crate::cal::datetime::LocalDateTime;
pub use crate::cal::field::{AnyField, ExtensionField, Field, ValueRange, MIN_YEAR, MAX_YEAR};
pub use crate::cal::offset::{Offset, OffsetDateTime};
pub use crate::cal::query::{Facet, FacetValue};
pub use crate::cal::time::LocalTime;
pub use crate::cal::unit::PeriodUnit;
#[cfg(feature = "clock")] pub use crate::cal::convenience;

pub use crate::error::{Error, Result};
