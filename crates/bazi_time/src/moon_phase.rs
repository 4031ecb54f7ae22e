//! New-moon instants from the truncated lunation series of Meeus, chapter 49.
//!
//! Lunations are numbered by `k`, with `k = 0` the new moon of
//! 2000-01-06. Results are within about a minute of the full theory for
//! the historical range the calendar supports.

use crate::julian::{SYNODIC_MONTH_DAYS, tt_to_ut};

/// JDE (TT) of the mean new moon of lunation 0.
const LUNATION_EPOCH_JDE: f64 = 2_451_550.097_66;

/// Periodic terms: (coefficient, power of E, multipliers of M, M', F, Omega).
const PERIODIC_TERMS: [(f64, i32, [f64; 4]); 25] = [
    (-0.407_20, 0, [0.0, 1.0, 0.0, 0.0]),
    (0.172_41, 1, [1.0, 0.0, 0.0, 0.0]),
    (0.016_08, 0, [0.0, 2.0, 0.0, 0.0]),
    (0.010_39, 0, [0.0, 0.0, 2.0, 0.0]),
    (0.007_39, 1, [-1.0, 1.0, 0.0, 0.0]),
    (-0.005_14, 1, [1.0, 1.0, 0.0, 0.0]),
    (0.002_08, 2, [2.0, 0.0, 0.0, 0.0]),
    (-0.001_11, 0, [0.0, 1.0, -2.0, 0.0]),
    (-0.000_57, 0, [0.0, 1.0, 2.0, 0.0]),
    (0.000_56, 1, [1.0, 2.0, 0.0, 0.0]),
    (-0.000_42, 0, [0.0, 3.0, 0.0, 0.0]),
    (0.000_42, 1, [1.0, 0.0, 2.0, 0.0]),
    (0.000_38, 1, [1.0, 0.0, -2.0, 0.0]),
    (-0.000_24, 1, [-1.0, 2.0, 0.0, 0.0]),
    (-0.000_17, 0, [0.0, 0.0, 0.0, 1.0]),
    (-0.000_07, 0, [2.0, 1.0, 0.0, 0.0]),
    (0.000_04, 0, [0.0, 2.0, -2.0, 0.0]),
    (0.000_04, 0, [3.0, 0.0, 0.0, 0.0]),
    (0.000_03, 0, [1.0, 1.0, -2.0, 0.0]),
    (0.000_03, 0, [0.0, 2.0, 2.0, 0.0]),
    (-0.000_03, 0, [1.0, 1.0, 2.0, 0.0]),
    (0.000_03, 0, [-1.0, 1.0, 2.0, 0.0]),
    (-0.000_02, 0, [-1.0, 1.0, -2.0, 0.0]),
    (-0.000_02, 0, [1.0, 3.0, 0.0, 0.0]),
    (0.000_02, 0, [0.0, 4.0, 0.0, 0.0]),
];

/// Planetary arguments: (coefficient, A0, rate per lunation).
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (0.000_325, 299.77, 0.107_408),
    (0.000_165, 251.88, 0.016_321),
    (0.000_164, 251.83, 26.651_886),
    (0.000_126, 349.42, 36.412_478),
    (0.000_110, 84.66, 18.206_239),
    (0.000_062, 141.74, 53.303_771),
    (0.000_060, 207.14, 2.453_732),
    (0.000_056, 154.84, 7.306_860),
    (0.000_047, 34.52, 27.261_239),
    (0.000_042, 207.19, 0.121_824),
    (0.000_040, 291.34, 1.844_379),
    (0.000_037, 161.72, 24.198_154),
    (0.000_035, 239.56, 25.513_099),
    (0.000_023, 331.55, 3.592_518),
];

/// JDE (TT) of the new moon of lunation `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1_236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = LUNATION_EPOCH_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = 2.553_4 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let mp = 201.564_3 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let f = 160.710_8 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let omega = 124.774_6 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let periodic: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(coeff, e_pow, [cm, cmp, cf, co])| {
            let arg = (cm * m + cmp * mp + cf * f + co * omega).to_radians();
            coeff * e.powi(e_pow) * arg.sin()
        })
        .sum();

    let a1_extra = -0.009_173 * t2;
    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, &(coeff, a0, rate))| {
            let extra = if i == 0 { a1_extra } else { 0.0 };
            coeff * (a0 + rate * k + extra).to_radians().sin()
        })
        .sum();

    mean + periodic + planetary
}

/// JD (UT) of the new moon of lunation `k`.
pub fn new_moon_jd_ut(k: i64) -> f64 {
    tt_to_ut(new_moon_jde(k))
}

/// Lunation number of the last new moon at or before `jd_ut`.
pub fn lunation_at_or_before(jd_ut: f64) -> i64 {
    let mut k = ((jd_ut - LUNATION_EPOCH_JDE) / SYNODIC_MONTH_DAYS).floor() as i64;
    while new_moon_jd_ut(k) > jd_ut {
        k -= 1;
    }
    while new_moon_jd_ut(k + 1) <= jd_ut {
        k += 1;
    }
    k
}

/// JD (UT) of the last new moon at or before `jd_ut`.
pub fn prev_new_moon(jd_ut: f64) -> f64 {
    new_moon_jd_ut(lunation_at_or_before(jd_ut))
}

/// JD (UT) of the first new moon strictly after `jd_ut`.
pub fn next_new_moon(jd_ut: f64) -> f64 {
    new_moon_jd_ut(lunation_at_or_before(jd_ut) + 1)
}
