//! Low-precision apparent solar longitude (Meeus, chapter 25).
//!
//! Accuracy is about 0.01 degree, i.e. roughly fifteen minutes in the
//! instant of a solar term. That is well inside the resolution needed to
//! place a birth moment in a month pillar except within minutes of a term.

use crate::julian::jd_to_centuries;

/// Normalize an angle to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle difference to (-180, 180].
pub fn normalize_pm180(deg: f64) -> f64 {
    let d = normalize_deg(deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Geometric mean longitude, mean anomaly and equation of centre, degrees.
fn solar_elements(t: f64) -> (f64, f64) {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    (l0, c)
}

/// True geometric longitude of the Sun at JD (TT), degrees [0, 360).
pub fn sun_true_longitude(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let (l0, c) = solar_elements(t);
    normalize_deg(l0 + c)
}

/// Apparent longitude of the Sun at JD (TT), degrees [0, 360).
///
/// Includes aberration and the principal nutation term.
pub fn sun_apparent_longitude(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let (l0, c) = solar_elements(t);
    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_deg(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}
