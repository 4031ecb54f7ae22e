//! Julian Day <-> civil calendar conversions.
//!
//! Dates are proleptic Gregorian throughout; no switch to the Julian
//! calendar is made before 1582. Algorithms from Meeus, "Astronomical
//! Algorithms", chapter 7.

/// Julian Date of J2000.0 (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_19;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month (1-12). Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calendar date (with fractional day) to Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian Day Number (integer day starting at civil midnight) of a date.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    (calendar_to_jd(year, month, day as f64) + 0.5).floor() as i64
}

/// Civil date `(year, month, day)` of a Julian Day Number.
pub fn date_from_day_number(jdn: i64) -> (i32, u32, u32) {
    let (y, m, d) = jd_to_calendar(jdn as f64);
    (y, m, d.floor() as u32)
}

/// Julian centuries of TT since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Approximate TT - UT in seconds for a decimal year.
///
/// Espenak & Meeus polynomials between 1900 and 2150, the long-term
/// parabola elsewhere.
pub fn delta_t_seconds(decimal_year: f64) -> f64 {
    let y = decimal_year;
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };
    if !(1900.0..2150.0).contains(&y) {
        return long_term(y);
    }
    if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else {
        long_term(y) - 0.5628 * (2150.0 - y)
    }
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    let year = 2000.0 + (jd_ut - J2000_JD) / 365.25;
    jd_ut + delta_t_seconds(year) / SECONDS_PER_DAY
}

/// Convert a TT Julian Date to UT.
pub fn tt_to_ut(jd_tt: f64) -> f64 {
    let year = 2000.0 + (jd_tt - J2000_JD) / 365.25;
    jd_tt - delta_t_seconds(year) / SECONDS_PER_DAY
}
