use calendrical::{LocalDate, LocalDateTime, LocalTime, Month, PeriodUnit, Error, Field};
use test_case::test_case;


fn ymd_hm(y: i64, m: Month, d: i8, h: i8, mi: i8) -> LocalDateTime {
    LocalDateTime::new(LocalDate::ymd(y, m, d).unwrap(), LocalTime::hm(h, mi).unwrap())
}


#[test_case(90,          PeriodUnit::Minutes,  ymd_hm(2000, Month::January,  1,  0, 30) ; "past midnight")]
#[test_case(30,          PeriodUnit::Minutes,  ymd_hm(1999, Month::December, 31, 23, 30) ; "same day")]
#[test_case(49,          PeriodUnit::Hours,    ymd_hm(2000, Month::January,  3, 0, 0)   ; "two days")]
#[test_case(3,           PeriodUnit::HalfDays, ymd_hm(2000, Month::January,  2, 11, 0)  ; "half days")]
#[test_case(86_400 * 3,  PeriodUnit::Seconds,  ymd_hm(2000, Month::January,  3, 23, 0)  ; "seconds")]
#[test_case(-24,         PeriodUnit::Hours,    ymd_hm(1999, Month::December, 30, 23, 0) ; "negative hours")]
#[test_case(-23,         PeriodUnit::Hours,    ymd_hm(1999, Month::December, 31, 0, 0)  ; "to midnight")]
#[test_case(-(23 * 60 + 1), PeriodUnit::Minutes, ymd_hm(1999, Month::December, 30, 23, 59) ; "one minute before midnight")]
#[test_case(1,           PeriodUnit::Days,     ymd_hm(2000, Month::January,  1, 23, 0)  ; "days")]
#[test_case(1,           PeriodUnit::Weeks,    ymd_hm(2000, Month::January,  7, 23, 0)  ; "weeks")]
#[test_case(2,           PeriodUnit::Months,   ymd_hm(2000, Month::February, 29, 23, 0) ; "months clamp to the leap day")]
#[test_case(1,           PeriodUnit::Years,    ymd_hm(2000, Month::December, 31, 23, 0) ; "years")]
#[test_case(1,           PeriodUnit::Decades,  ymd_hm(2009, Month::December, 31, 23, 0) ; "decades")]
#[test_case(1,           PeriodUnit::Centuries, ymd_hm(2099, Month::December, 31, 23, 0) ; "centuries")]
#[test_case(-1,          PeriodUnit::Millennia, ymd_hm(999, Month::December, 31, 23, 0) ; "millennia")]
fn plus(amount: i64, unit: PeriodUnit, expected: LocalDateTime) {
    let eve = ymd_hm(1999, Month::December, 31, 23, 0);
    assert_eq!(eve.plus(amount, unit), Ok(expected));
}

#[test]
fn minus_is_negated_plus() {
    let eve = ymd_hm(1999, Month::December, 31, 23, 0);
    for unit in [PeriodUnit::Nanos, PeriodUnit::Seconds, PeriodUnit::Hours, PeriodUnit::Days, PeriodUnit::Months] {
        assert_eq!(eve.minus(1234, unit), eve.plus(-1234, unit));
    }
}

#[test]
fn nanosecond_carry() {
    let dt = LocalDateTime::new(LocalDate::ymd(2020, Month::June, 30).unwrap(),
                                LocalTime::hms_nano(23, 59, 59, 999_999_999).unwrap());
    let next = dt.plus(1, PeriodUnit::Nanos).unwrap();
    assert_eq!(next, ymd_hm(2020, Month::July, 1, 0, 0));
}

#[test]
fn huge_amounts_of_nanos_still_carry() {
    let start = LocalDateTime::at(0).unwrap();
    let later = start.plus(i64::MAX, PeriodUnit::Nanos).unwrap();
    assert_eq!(later.to_epoch_second(), i64::MAX / 1_000_000_000);
    assert_eq!(later.time().nanosecond() as i64, i64::MAX % 1_000_000_000);
}

#[test]
fn huge_amounts_of_hours_still_carry() {
    let start = LocalDateTime::at(0).unwrap();
    let later = start.plus(24 * 1_000_000_000, PeriodUnit::Hours).unwrap();
    assert_eq!(later.get(Field::EpochDay), Ok(1_000_000_000));
    assert_eq!(later.time(), LocalTime::midnight());
}

#[test]
fn past_the_end_of_time() {
    let last = ymd_hm(999_999_999, Month::December, 31, 23, 0);
    assert_eq!(last.plus(1, PeriodUnit::Hours), Err(Error::Overflow));
    assert_eq!(last.plus(1, PeriodUnit::Days), Err(Error::Overflow));
    assert_eq!(last.plus(i64::MAX, PeriodUnit::Millennia), Err(Error::Overflow));
}

#[test]
fn before_the_start_of_time() {
    let first = ymd_hm(-999_999_999, Month::January, 1, 0, 30);
    assert_eq!(first.minus(1, PeriodUnit::Hours), Err(Error::Overflow));
    assert_eq!(first.minus(i64::MIN, PeriodUnit::Years), Err(Error::Overflow));
}

#[test]
fn chains_of_amounts() {
    let eve = ymd_hm(1999, Month::December, 31, 23, 0);
    let amounts: [(i64, PeriodUnit); 2] = [(1, PeriodUnit::Months), (90, PeriodUnit::Minutes)];

    assert_eq!(eve.plus_adjusted(&amounts[..]), Ok(ymd_hm(2000, Month::February, 1, 0, 30)));
    assert_eq!(eve.minus_adjusted(&(2_i64, PeriodUnit::Hours)), Ok(ymd_hm(1999, Month::December, 31, 21, 0)));
}
