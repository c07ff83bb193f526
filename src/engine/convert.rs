//! Wall-clock ↔ shared-instant conversion over the tz database.

use chrono::{
    DateTime, Duration, MappedLocalTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

use crate::error::ConvertError;
use crate::types::{MINUTES_PER_DAY, ZoneTime};

/// Compose `date` at midnight plus `minutes` into a naive wall-clock
/// timestamp. `minutes` must already be range-checked by the caller.
pub(crate) fn compose_naive(
    date: NaiveDate,
    minutes: u32,
) -> Result<NaiveDateTime, ConvertError> {
    debug_assert!(minutes < MINUTES_PER_DAY);
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or(ConvertError::InvalidDate(date))?;
    Ok(midnight + Duration::minutes(i64::from(minutes)))
}

/// Interpret a naive wall-clock timestamp in `tz`, producing the shared
/// instant. An ambiguous reading (clocks rolled back) takes the earlier
/// instant; a reading erased by a spring-forward gap resolves one hour later.
pub(crate) fn local_to_instant(
    tz: Tz,
    naive: NaiveDateTime,
) -> Result<DateTime<Utc>, ConvertError> {
    match tz.from_local_datetime(&naive) {
        MappedLocalTime::Single(dt) => Ok(dt.with_timezone(&Utc)),
        MappedLocalTime::Ambiguous(earlier, _later) => Ok(earlier.with_timezone(&Utc)),
        MappedLocalTime::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| ConvertError::NonexistentLocalTime {
                zone: tz.name().to_string(),
                date: naive.date(),
                time: naive.format("%H:%M").to_string(),
            }),
    }
}

/// Project the shared instant into `tz`'s wall clock: wrapped minutes-of-day
/// and the calendar date they land on.
pub(crate) fn instant_to_zone_time(tz: Tz, instant: DateTime<Utc>) -> ZoneTime {
    let local = instant.with_timezone(&tz);
    ZoneTime {
        minutes: local.hour() * 60 + local.minute(),
        date: local.date_naive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(y: i32, m: u32, d: u32, minutes: u32) -> NaiveDateTime {
        compose_naive(NaiveDate::from_ymd_opt(y, m, d).unwrap(), minutes).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap()
    }

    #[test]
    fn plain_local_time_resolves_directly() {
        let kolkata: Tz = "Asia/Kolkata".parse().unwrap();
        let instant = local_to_instant(kolkata, naive(2024, 1, 1, 540)).unwrap();
        assert_eq!(instant, utc(2024, 1, 1, 3, 30));
    }

    #[test]
    fn spring_forward_gap_resolves_an_hour_later() {
        // America/New_York skips 02:00-03:00 on 2024-03-10
        let ny: Tz = "America/New_York".parse().unwrap();
        let instant = local_to_instant(ny, naive(2024, 3, 10, 150)).unwrap();
        assert_eq!(instant, utc(2024, 3, 10, 7, 30));
        let t = instant_to_zone_time(ny, instant);
        assert_eq!((t.hour(), t.minute()), (3, 30));
    }

    #[test]
    fn fall_back_ambiguity_takes_the_earlier_instant() {
        // 01:30 happens twice on 2024-11-03 in America/New_York
        let ny: Tz = "America/New_York".parse().unwrap();
        let instant = local_to_instant(ny, naive(2024, 11, 3, 90)).unwrap();
        assert_eq!(instant, utc(2024, 11, 3, 5, 30));
    }

    #[test]
    fn projection_carries_the_rolled_over_date() {
        let kolkata: Tz = "Asia/Kolkata".parse().unwrap();
        let t = instant_to_zone_time(kolkata, utc(2024, 1, 1, 23, 30));
        assert_eq!(t.minutes, 300);
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }
}
