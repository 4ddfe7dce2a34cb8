use calendrical::{CalendarDate, LocalDate, LocalDateTime, LocalTime, Month, Field, Error, PeriodUnit, ValueRange};
use test_case::test_case;


fn sample() -> LocalDateTime {
    LocalDateTime::new(LocalDate::ymd(2012, Month::February, 29).unwrap(),
                       LocalTime::hms_nano(13, 45, 30, 123_456_789).unwrap())
}


#[test_case(Field::NanoOfSecond,     123_456_789)]
#[test_case(Field::MilliOfSecond,    123)]
#[test_case(Field::SecondOfMinute,   30)]
#[test_case(Field::MinuteOfHour,     45)]
#[test_case(Field::MinuteOfDay,      13 * 60 + 45)]
#[test_case(Field::HourOfDay,        13)]
#[test_case(Field::ClockHourOfAmPm,  1)]
#[test_case(Field::AmPmOfDay,        1)]
#[test_case(Field::DayOfWeek,        3)]
#[test_case(Field::DayOfMonth,       29)]
#[test_case(Field::DayOfYear,        60)]
#[test_case(Field::MonthOfYear,      2)]
#[test_case(Field::Year,             2012)]
#[test_case(Field::Era,              1)]
fn get(field: Field, expected: i64) {
    assert_eq!(sample().get(field), Ok(expected));
}

#[test_case(Field::NanoOfDay)]
#[test_case(Field::SecondOfDay)]
#[test_case(Field::HourOfAmPm)]
#[test_case(Field::ClockHourOfDay)]
fn time_fields_read_the_time(field: Field) {
    assert_eq!(sample().get(field), sample().time().get(field));
}

#[test_case(Field::AlignedDayOfWeekInMonth)]
#[test_case(Field::AlignedWeekOfYear)]
#[test_case(Field::EpochDay)]
#[test_case(Field::EpochMonth)]
#[test_case(Field::YearOfEra)]
fn date_fields_read_the_date(field: Field) {
    assert_eq!(sample().get(field), sample().date().get(field));
}


#[test_case(Field::HourOfDay,     7  ; "hour")]
#[test_case(Field::MinuteOfHour,  0  ; "minute")]
#[test_case(Field::NanoOfSecond,  1  ; "nanosecond")]
#[test_case(Field::AmPmOfDay,     0  ; "morning")]
fn setting_a_time_field_keeps_the_date(field: Field, value: i64) {
    let before = sample();
    let after = before.with(field, value).unwrap();

    assert_eq!(after.get(field), Ok(value));
    assert_eq!(after.date(), before.date());
    assert_eq!(after.time(), before.time().with(field, value).unwrap());
}

#[test_case(Field::DayOfMonth,   1    ; "day")]
#[test_case(Field::DayOfWeek,    7    ; "weekday")]
#[test_case(Field::MonthOfYear,  3    ; "month")]
#[test_case(Field::Year,         1999 ; "year")]
fn setting_a_date_field_keeps_the_time(field: Field, value: i64) {
    let before = sample();
    let after = before.with(field, value).unwrap();

    assert_eq!(after.get(field), Ok(value));
    assert_eq!(after.time(), before.time());
    assert_eq!(after.date(), &before.date().with(field, value).unwrap());
}

#[test]
fn changing_the_year_of_a_leap_day_clamps_it() {
    let after = sample().with(Field::Year, 2013).unwrap();
    assert_eq!(after.date(), &LocalDate::ymd(2013, Month::February, 28).unwrap());
}

#[test]
fn invalid_time_value() {
    let result = sample().with(Field::HourOfDay, 24);
    assert_eq!(result, Err(Error::InvalidFieldValue {
        field: "HourOfDay".to_owned(),
        value: 24,
        range: Field::HourOfDay.range(),
    }));
}

#[test]
fn invalid_date_value() {
    let result = sample().with(Field::MonthOfYear, 0);
    assert!(matches!(result, Err(Error::InvalidFieldValue { .. })));
}

#[test]
fn day_past_the_end_of_the_month() {
    let result = sample().with(Field::DayOfMonth, 30);
    assert!(matches!(result, Err(Error::InvalidFieldValue { .. })));
}

#[test]
fn failure_leaves_the_original_alone() {
    let before = sample();
    let _ = before.with(Field::MinuteOfHour, 60);
    assert_eq!(before, sample());
}

#[test]
fn ranges_come_from_the_right_half() {
    let dt = sample();
    assert_eq!(dt.range(Field::DayOfMonth).unwrap().largest_maximum(), 29);
    assert_eq!(dt.range(Field::HourOfDay), Ok(Field::HourOfDay.range()));
}

#[test]
fn error_message() {
    let error = sample().with(Field::DayOfMonth, 32).unwrap_err();
    assert_eq!(error.to_string(), "invalid value for DayOfMonth: 32 (valid values 1 - 28/31)");
}


#[test_case(2000, Field::DayOfMonth, 29 ; "leap day of 2000 by day of month")]
#[test_case(2000, Field::DayOfYear,  60 ; "leap day of 2000 by day of year")]
#[test_case(2400, Field::DayOfMonth, 29 ; "leap day of 2400 by day of month")]
#[test_case(2400, Field::DayOfYear,  60 ; "leap day of 2400 by day of year")]
fn leap_days_of_four_hundred_year_cycles(year: i64, field: Field, value: i64) {
    let before = LocalDateTime::new(LocalDate::ymd(year, Month::February, 1).unwrap(), LocalTime::hm(6, 15).unwrap());
    let after = before.with(field, value).unwrap();

    assert_eq!(after.get(field), Ok(value));
    assert_eq!(after.get(Field::MonthOfYear), Ok(2));
    assert_eq!(after.get(Field::DayOfMonth), Ok(29));
    assert_eq!(after.date().to_string(), format!("{}-02-29", year));
    assert_eq!(after.time(), before.time());
}


const FIRST_EPOCH_DAY: i64 = -365_243_219_162;
const LAST_EPOCH_DAY: i64 = 365_241_780_471;

#[test_case(FIRST_EPOCH_DAY, -999_999_999, Month::January,  1  ; "first day")]
#[test_case(LAST_EPOCH_DAY,   999_999_999, Month::December, 31 ; "last day")]
fn epoch_day_bounds(epoch_day: i64, year: i64, month: Month, day: i8) {
    let date = LocalDate::from_epoch_day(epoch_day).unwrap();
    assert_eq!(date, LocalDate::ymd(year, month, day).unwrap());
    assert_eq!(date.epoch_day(), epoch_day);
    assert_eq!(Field::EpochDay.range(), ValueRange::of(FIRST_EPOCH_DAY, LAST_EPOCH_DAY));
}

#[test_case(FIRST_EPOCH_DAY - 1 ; "before the first day")]
#[test_case(LAST_EPOCH_DAY + 1  ; "after the last day")]
fn epoch_days_out_of_bounds(epoch_day: i64) {
    assert!(matches!(LocalDate::from_epoch_day(epoch_day), Err(Error::InvalidFieldValue { .. })));
}

#[test_case(FIRST_EPOCH_DAY, -1 ; "before the first day")]
#[test_case(LAST_EPOCH_DAY,   1 ; "after the last day")]
fn moving_past_the_bounds(epoch_day: i64, direction: i64) {
    let date = LocalDate::from_epoch_day(epoch_day).unwrap();
    assert_eq!(date.plus_days(direction), Err(Error::Overflow));

    let midnight = LocalDateTime::new(date, LocalTime::midnight());
    let edge = if direction < 0 { midnight } else { midnight.with(Field::HourOfDay, 23).unwrap() };
    assert_eq!(edge.plus(direction, PeriodUnit::Hours), Err(Error::Overflow));
    assert_eq!(edge.minus(-direction, PeriodUnit::Hours), Err(Error::Overflow));
    assert_eq!(edge.plus(-direction, PeriodUnit::Hours).map(|dt| dt.date().epoch_day()), Ok(epoch_day));
}
