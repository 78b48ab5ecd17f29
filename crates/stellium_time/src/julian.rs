//! Julian Day ↔ calendar conversion.
//!
//! Proleptic Gregorian calendar throughout; years are astronomical
//! (0 = 1 BC, -1 = 2 BC, …).

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// A calendar date with decimal hour, as recovered from a Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    /// Astronomical year (0 = 1 BC).
    pub year: i32,
    /// Month 1–12.
    pub month: u32,
    /// Day of month 1–31.
    pub day: u32,
    /// Decimal hours [0, 24).
    pub hour: f64,
}

/// Calendar date → Julian Day.
///
/// `hour` is decimal (13.5 = 13:30). The time scale of the result is
/// whatever scale the inputs were expressed in (UT or TT).
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let mut u = year as f64;
    if month < 3 {
        u -= 1.0;
    }
    let u0 = u + 4712.0;
    let mut u1 = month as f64 + 1.0;
    if u1 < 4.0 {
        u1 += 12.0;
    }
    let mut jd = (u0 * 365.25).floor() + (30.6 * u1 + 0.000001).floor() + day as f64 + hour / 24.0
        - 63.5;
    // Gregorian correction
    let mut u2 = (u.abs() / 100.0).floor() - (u.abs() / 400.0).floor();
    if u < 0.0 {
        u2 = -u2;
    }
    jd = jd - u2 + 2.0;
    if u < 0.0 && u / 100.0 == (u / 100.0).floor() && u / 400.0 != (u / 400.0).floor() {
        jd -= 1.0;
    }
    jd
}

/// Julian Day → calendar date.
///
/// Inverse of [`julian_day`]: year/month/day are recovered exactly, the
/// decimal hour to floating-point precision.
pub fn from_julian_day(jd: f64) -> CalendarDate {
    let mut u0 = jd + 32082.5;
    // Gregorian correction
    let mut u1 = u0 + (u0 / 36525.0).floor() - (u0 / 146100.0).floor() - 38.0;
    if jd >= 1_830_691.5 {
        u1 += 1.0;
    }
    u0 = u0 + (u1 / 36525.0).floor() - (u1 / 146100.0).floor() - 38.0;
    let u2 = (u0 + 123.0).floor();
    let u3 = ((u2 - 122.2) / 365.25).floor();
    let u4 = ((u2 - (365.25 * u3).floor()) / 30.6001).floor();
    let mut month = (u4 - 1.0).trunc();
    if month > 12.0 {
        month -= 12.0;
    }
    let day = (u2 - (365.25 * u3).floor() - (30.6001 * u4).floor()).trunc();
    let year = (u3 + ((u4 - 2.0) / 12.0).floor() - 4800.0).trunc();
    let hour = (jd - (jd + 0.5).floor() + 0.5) * 24.0;
    CalendarDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = julian_day(2000, 1, 1, 12.0);
        assert_eq!(jd, J2000_JD);
    }

    #[test]
    fn gregorian_reform_date() {
        // 1582-Oct-15 0h is JD 2299160.5.
        let jd = julian_day(1582, 10, 15, 0.0);
        assert!((jd - 2_299_160.5).abs() < 1e-9);
    }

    #[test]
    fn known_epoch_1987() {
        // 1987-Aug-22 19:10 UT
        let jd = julian_day(1987, 8, 22, 19.0 + 10.0 / 60.0);
        assert!((jd - 2_447_030.298_611_111).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn roundtrip_recovers_date() {
        let jd = julian_day(1993, 3, 12, 0.75);
        let d = from_julian_day(jd);
        assert_eq!((d.year, d.month, d.day), (1993, 3, 12));
        assert!((d.hour - 0.75).abs() < 1e-6);
    }

    #[test]
    fn roundtrip_grid() {
        for year in [-500, 1, 1000, 1582, 1900, 2000, 2024, 2100] {
            for month in 1..=12 {
                for day in [1, 15, 28] {
                    for hour in [0.0, 6.25, 12.0, 23.5] {
                        let jd = julian_day(year, month, day, hour);
                        let d = from_julian_day(jd);
                        assert_eq!(
                            (d.year, d.month, d.day),
                            (year, month, day),
                            "date mismatch for {year}-{month}-{day} {hour}h (jd {jd})"
                        );
                        assert!(
                            (d.hour - hour).abs() < 1e-6,
                            "hour mismatch for {year}-{month}-{day}: {} vs {hour}",
                            d.hour
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn bc_year_handling() {
        // Astronomical year -1000, well before the Gregorian switch.
        let jd = julian_day(-1000, 7, 1, 12.0);
        let d = from_julian_day(jd);
        assert_eq!((d.year, d.month, d.day), (-1000, 7, 1));
    }
}
