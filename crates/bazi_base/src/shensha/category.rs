//! Good / bad / mixed bucketing of star names.
//!
//! Names the classifier computes resolve through [`Star::category`]. The
//! extra tables cover traditional stars that callers may supply by name
//! but that this crate does not derive; the three sets are disjoint.

use super::Star;

/// Category of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarCategory {
    Good,
    Bad,
    Mixed,
    Unknown,
}

impl StarCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "吉神",
            Self::Bad => "凶神",
            Self::Mixed => "吉凶神",
            Self::Unknown => "未知",
        }
    }
}

const EXTRA_GOOD: &[&str] = &[
    "文曲", "天福", "天官", "天厨", "天巫", "天月", "天赦", "天恩", "国印", "天贵", "天才", "天寿",
    "天馨", "天钺", "天亨", "天解", "天报", "天庆", "天祥", "天佑", "天富", "天爵", "月德合",
];

const EXTRA_BAD: &[&str] = &[
    "五鬼", "地丁", "阴差", "白虎", "天狗", "天狱", "天棒", "天姚", "天牢", "天祸", "天煞", "天吏",
    "天奸", "天讼", "天罗地网",
];

const EXTRA_MIXED: &[&str] = &[
    "三台", "八座", "恩光", "台辅", "封诰", "天使", "天伤", "截路", "旬空", "三奇", "六仪", "三合",
    "六合", "暗合", "拱合", "三会", "三刑", "六冲", "暗冲", "童子煞", "将军箭",
];

/// Drop a presentation prefix such as "年柱:" (ASCII or full-width colon).
pub fn strip_prefix(name: &str) -> &str {
    let trimmed = name.trim();
    match trimmed.char_indices().rfind(|&(_, c)| c == ':' || c == '：') {
        Some((pos, sep)) => &trimmed[pos + sep.len_utf8()..],
        None => trimmed,
    }
}

/// Category of a star name; unmatched names are `Unknown`.
pub fn category_of(name: &str) -> StarCategory {
    let bare = strip_prefix(name);
    if let Some(star) = Star::from_name(bare) {
        return star.category();
    }
    if EXTRA_GOOD.contains(&bare) {
        StarCategory::Good
    } else if EXTRA_BAD.contains(&bare) {
        StarCategory::Bad
    } else if EXTRA_MIXED.contains(&bare) {
        StarCategory::Mixed
    } else {
        StarCategory::Unknown
    }
}
