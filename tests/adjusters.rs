use calendrical::{Adjuster, CalendarDate, LocalDate, LocalDateTime, LocalTime, Month, Field, PeriodUnit, Result};


fn last_day_of_month(dt: &LocalDateTime) -> Result<LocalDateTime> {
    let last = dt.range(Field::DayOfMonth)?.largest_maximum();
    dt.with(Field::DayOfMonth, last)
}

/// Moves forward to the next weekday, skipping Saturdays and Sundays.
struct NextWorkingDay;

impl<D: CalendarDate> Adjuster<D> for NextWorkingDay {
    fn adjust(&self, dt: &LocalDateTime<D>) -> Result<LocalDateTime<D>> {
        let skip = match dt.get(Field::DayOfWeek)? {
            5 => 3,
            6 => 2,
            _ => 1,
        };
        dt.plus(skip, PeriodUnit::Days)
    }
}


fn ymd_hm(y: i64, m: Month, d: i8, h: i8, mi: i8) -> LocalDateTime {
    LocalDateTime::new(LocalDate::ymd(y, m, d).unwrap(), LocalTime::hm(h, mi).unwrap())
}


#[test]
fn functions_are_adjusters() {
    let dt = ymd_hm(2023, Month::February, 10, 9, 15);
    assert_eq!(dt.adjust(&last_day_of_month), Ok(ymd_hm(2023, Month::February, 28, 9, 15)));
}

#[test]
fn closures_are_adjusters() {
    let dt = ymd_hm(2023, Month::February, 10, 9, 15);
    let on_the_hour = |dt: &LocalDateTime| dt.with(Field::MinuteOfHour, 0);
    assert_eq!(dt.adjust(&on_the_hour), Ok(ymd_hm(2023, Month::February, 10, 9, 0)));
}

#[test]
fn structs_are_adjusters() {
    let friday = ymd_hm(2023, Month::February, 10, 17, 0);
    assert_eq!(friday.adjust(&NextWorkingDay), Ok(ymd_hm(2023, Month::February, 13, 17, 0)));
}

#[test]
fn times_are_adjusters() {
    let dt = ymd_hm(2023, Month::February, 10, 9, 15);
    assert_eq!(dt.adjust(&LocalTime::noon()), Ok(ymd_hm(2023, Month::February, 10, 12, 0)));
}

#[test]
fn trait_objects_are_adjusters() {
    let adjusters: Vec<Box<dyn Adjuster<LocalDate>>> = vec![
        Box::new(NextWorkingDay),
        Box::new(LocalTime::midnight()),
    ];

    let start = ymd_hm(2023, Month::February, 11, 9, 15);
    let end = adjusters.iter().try_fold(start, |dt, a| dt.adjust(a.as_ref()));
    assert_eq!(end, Ok(ymd_hm(2023, Month::February, 13, 0, 0)));
}

#[test]
fn adjusting_leaves_the_original_alone() {
    let dt = ymd_hm(2023, Month::February, 10, 9, 15);
    let _ = dt.adjust(&last_day_of_month);
    assert_eq!(dt, ymd_hm(2023, Month::February, 10, 9, 15));
}
