use calendrical::{Year, LocalDate, LocalDateTime, LocalTime, Month, Field, PeriodUnit};
use test_case::test_case;


#[test_case(1600, true  ; "divisible by four hundred")]
#[test_case(1900, false ; "divisible by one hundred")]
#[test_case(2000, true  ; "the millennium")]
#[test_case(2038, false ; "the end of 32-bit time")]
#[test_case(0,    true  ; "year zero")]
#[test_case(-4,   true  ; "before year zero")]
fn is_leap_year(year: i64, leap: bool) {
    assert_eq!(Year(year).is_leap_year(), leap);
}

#[test]
fn february_has_a_twenty_ninth() {
    let date = LocalDate::ymd(2000, Month::February, 1).unwrap();
    let dt = LocalDateTime::new(date, LocalTime::noon());
    assert_eq!(dt.range(Field::DayOfMonth).unwrap().largest_maximum(), 29);
}

#[test]
fn adding_a_year_to_a_leap_day() {
    let date = LocalDate::ymd(2016, Month::February, 29).unwrap();
    let dt = LocalDateTime::new(date, LocalTime::noon());

    let next = dt.plus(1, PeriodUnit::Years).unwrap();
    assert_eq!(next.date(), &LocalDate::ymd(2017, Month::February, 28).unwrap());
    assert_eq!(next.time(), LocalTime::noon());
}
