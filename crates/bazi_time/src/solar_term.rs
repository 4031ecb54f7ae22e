//! The 24 solar terms (JieQi) and their instants.
//!
//! Terms are indexed from 小寒 (285 degrees) so that all 24 fall inside
//! one Gregorian year in order. Even indices are the month-opening "jie"
//! terms; odd indices are the principal "zhongqi" terms.

use crate::error::TimeError;
use crate::julian::{TROPICAL_YEAR_DAYS, calendar_to_jd, jd_to_calendar, tt_to_ut, ut_to_tt};
use crate::sun::{normalize_deg, normalize_pm180, sun_apparent_longitude};

/// Years the low-precision theories are trusted for.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 3000;

/// Solar term, in calendar-year order starting from 小寒.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

/// All 24 terms in index order.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

impl SolarTerm {
    /// 0-based index (小寒 = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Option<Self> {
        if i < 24 {
            Some(ALL_SOLAR_TERMS[i as usize])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
        }
    }

    /// Apparent solar longitude at the term, degrees.
    pub fn longitude_deg(self) -> f64 {
        normalize_deg(285.0 + 15.0 * self.index() as f64)
    }

    /// Month-opening term (节).
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Branch index (子 = 0) of the month a jie term opens.
    ///
    /// For a zhongqi term this is the month it falls in.
    pub const fn month_branch_index(self) -> u8 {
        (self.index() / 2 + 1) % 12
    }

    /// Jie term that opens the month with the given branch index.
    pub const fn jie_for_month_branch(branch_index: u8) -> Self {
        let i = ((branch_index % 12) + 11) % 12;
        ALL_SOLAR_TERMS[(i * 2) as usize]
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn check_year(year: i32) -> Result<(), TimeError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeError::OutOfRange(year))
    }
}

/// JD (UT) at which the apparent solar longitude reaches `target_deg`,
/// starting Newton iteration from `guess_jd_ut`.
pub fn find_sun_longitude(target_deg: f64, guess_jd_ut: f64) -> Result<f64, TimeError> {
    let days_per_deg = TROPICAL_YEAR_DAYS / 360.0;
    let mut jd_tt = ut_to_tt(guess_jd_ut);
    for _ in 0..50 {
        let diff = normalize_pm180(target_deg - sun_apparent_longitude(jd_tt));
        jd_tt += diff * days_per_deg;
        if diff.abs() < 1e-7 {
            return Ok(tt_to_ut(jd_tt));
        }
    }
    Err(TimeError::NoConvergence("solar longitude search"))
}

/// JD (UT) of a solar term within Gregorian `year`.
pub fn solar_term_jd(year: i32, term: SolarTerm) -> Result<f64, TimeError> {
    check_year(year)?;
    let guess = calendar_to_jd(year, 1, 6.0) + term.index() as f64 * 15.22;
    find_sun_longitude(term.longitude_deg(), guess)
}

/// All 24 terms of a Gregorian year as `(term, jd_ut)`, in time order.
pub fn solar_terms_of_year(year: i32) -> Result<Vec<(SolarTerm, f64)>, TimeError> {
    ALL_SOLAR_TERMS
        .iter()
        .map(|&t| solar_term_jd(year, t).map(|jd| (t, jd)))
        .collect()
}

/// The 12 jie terms of a Gregorian year as `(term, jd_ut)`.
fn jie_terms_of_year(year: i32) -> Result<Vec<(SolarTerm, f64)>, TimeError> {
    ALL_SOLAR_TERMS
        .iter()
        .filter(|t| t.is_jie())
        .map(|&t| solar_term_jd(year, t).map(|jd| (t, jd)))
        .collect()
}

/// Jie terms bracketing a moment, spanning the neighbouring years.
fn jie_window(jd_ut: f64) -> Result<Vec<(SolarTerm, f64)>, TimeError> {
    let (year, _, _) = jd_to_calendar(jd_ut);
    let mut out = Vec::with_capacity(36);
    for y in (year - 1)..=(year + 1) {
        out.extend(jie_terms_of_year(y)?);
    }
    Ok(out)
}

/// Latest jie term at or before `jd_ut`.
pub fn prev_jie(jd_ut: f64) -> Result<(SolarTerm, f64), TimeError> {
    jie_window(jd_ut)?
        .into_iter()
        .rev()
        .find(|&(_, jd)| jd <= jd_ut)
        .ok_or(TimeError::NoConvergence("no jie term before moment"))
}

/// First jie term strictly after `jd_ut`.
pub fn next_jie(jd_ut: f64) -> Result<(SolarTerm, f64), TimeError> {
    jie_window(jd_ut)?
        .into_iter()
        .find(|&(_, jd)| jd > jd_ut)
        .ok_or(TimeError::NoConvergence("no jie term after moment"))
}

/// Branch index of the solar month containing `jd_ut`.
pub fn month_branch_index_at(jd_ut: f64) -> Result<u8, TimeError> {
    prev_jie(jd_ut).map(|(t, _)| t.month_branch_index())
}

/// Sexagenary year number at `jd_ut`: the year changes at 立春.
pub fn solar_year_at(jd_ut: f64) -> Result<i32, TimeError> {
    let (year, _, _) = jd_to_calendar(jd_ut);
    let lichun = solar_term_jd(year, SolarTerm::LiChun)?;
    Ok(if jd_ut >= lichun { year } else { year - 1 })
}
