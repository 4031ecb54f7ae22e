//! Parsing of literal stem+branch strings.

use crate::chart::RawPillars;
use crate::error::BaziError;
use crate::ganzhi::GanZhi;

/// Parse one pair such as "甲子".
pub fn parse_ganzhi(s: &str) -> Result<GanZhi, BaziError> {
    s.parse()
}

/// Split a pillar string into two-character tokens.
///
/// Accepts whitespace-separated tokens ("甲子 丙寅 ...", ideographic
/// spaces included) or an unbroken run of stem/branch characters.
pub fn split_pillar_tokens(s: &str) -> Vec<String> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() == 1 {
        let chars: Vec<char> = tokens[0].chars().collect();
        if chars.len() > 2 && chars.len() % 2 == 0 {
            return chars.chunks(2).map(|c| c.iter().collect()).collect();
        }
    }
    tokens.into_iter().map(str::to_owned).collect()
}

/// Parse a four-pillar string, year first.
///
/// Every token must be a valid sexagenary pair; a parity-violating pair
/// such as "甲丑" is rejected with [`BaziError::InvalidPair`].
pub fn parse_four_pillars(s: &str) -> Result<RawPillars, BaziError> {
    let tokens = split_pillar_tokens(s);
    let [y, m, d, h] = tokens.as_slice() else {
        return Err(BaziError::InvalidGanZhiString(s.trim().to_owned()));
    };
    Ok(RawPillars::new(
        parse_ganzhi(y)?,
        parse_ganzhi(m)?,
        parse_ganzhi(d)?,
        parse_ganzhi(h)?,
    ))
}
