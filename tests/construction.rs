use calendrical::{LocalDate, LocalDateTime, LocalTime, Month, Error, CalendarDate};


fn date() -> LocalDate {
    LocalDate::ymd(2015, Month::June, 26).unwrap()
}

fn time() -> LocalTime {
    LocalTime::hms(4, 5, 6).unwrap()
}


#[test]
fn both_parts() {
    let dt = LocalDateTime::of(Some(date()), Some(time())).unwrap();
    assert_eq!(dt.date(), &date());
    assert_eq!(dt.time(), time());
}

#[test]
fn missing_date() {
    let result = LocalDateTime::<LocalDate>::of(None, Some(time()));
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn missing_time() {
    let result = LocalDateTime::of(Some(date()), None);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn missing_everything() {
    let result = LocalDateTime::<LocalDate>::of(None, None);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn same_as_new() {
    assert_eq!(LocalDateTime::of(Some(date()), Some(time())),
               Ok(LocalDateTime::new(date(), time())));
}

#[test]
fn date_at_time() {
    assert_eq!(date().at_time(time()), LocalDateTime::new(date(), time()));
}

#[test]
fn into_parts() {
    let (d, t) = LocalDateTime::new(date(), time()).into_parts();
    assert_eq!(d, date());
    assert_eq!(t, time());
}

#[test]
fn display() {
    let dt = LocalDateTime::new(date(), LocalTime::hms_ms(4, 5, 6, 7).unwrap());
    assert_eq!(dt.to_string(), "2015-06-26T04:05:06.007");
}

#[test]
fn far_away_years_display_with_a_sign() {
    let dt = LocalDateTime::new(LocalDate::ymd(-44, Month::March, 15).unwrap(), LocalTime::noon());
    assert_eq!(dt.to_string(), "-0044-03-15T12:00");
}

#[cfg(feature = "clock")]
mod clock {
    use calendrical::{LocalDate, LocalDateTime};
    use calendrical::convenience::Today;

    #[test]
    fn now_is_after_the_epoch() {
        let now = LocalDateTime::now().unwrap();
        assert!(now > LocalDateTime::at(0).unwrap());
    }

    #[test]
    fn today_is_not_before_now() {
        let before = LocalDateTime::now().unwrap();
        let today = LocalDate::today().unwrap();
        assert!(today >= *before.date());
    }
}
