//! Reading the system clock, which this library is unable to do without
//! help from the OS.


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(unix)]
pub(crate) fn sys_time() -> (i64, i32) {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };

    // CLOCK_REALTIME always exists, and ts is a valid pointer, so the only
    // possible failure leaves ts at the epoch.
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };

    (i64::from(ts.tv_sec), ts.tv_nsec as i32)
}


#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(windows)]
pub(crate) fn sys_time() -> (i64, i32) {
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = FILETIME { dwLowDateTime: 0, dwHighDateTime: 0 };
    unsafe { GetSystemTimeAsFileTime(&mut ft) };

    let hectonanos = file_time_as_u64(&ft) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    let seconds = hectonanos.div_euclid(HECTONANOSECS_IN_SEC);
    let nanos = hectonanos.rem_euclid(HECTONANOSECS_IN_SEC) * 100;
    (seconds, nanos as i32)
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)
}


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(not(any(unix, windows)))]
pub(crate) fn sys_time() -> (i64, i32) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since)  => (since.as_secs() as i64, since.subsec_nanos() as i32),
        Err(e)     => {
            let before = e.duration();
            let nanos = i64::from(before.subsec_nanos());
            if nanos == 0 { (-(before.as_secs() as i64), 0) }
            else          { (-(before.as_secs() as i64) - 1, (1_000_000_000 - nanos) as i32) }
        }
    }
}
