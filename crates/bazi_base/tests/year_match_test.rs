//! Integration tests for arithmetic year matching.

use bazi_base::year_match::year_ganzhi_range;
use bazi_base::{
    GanZhi, PillarSpec, most_likely_year, next_year_for_ganzhi, scan_matching_years,
    validate_year_match, year_to_ganzhi,
};

/// Every matched year really carries the pillar, and the gaps are 60.
#[test]
fn scan_is_exact_and_periodic() {
    for gz in GanZhi::all() {
        let years = scan_matching_years(gz, 1..=3000);
        assert!(years.iter().all(|&y| year_to_ganzhi(y) == gz));
        assert!(years.windows(2).all(|w| w[1] - w[0] == 60));
        assert!(years.len() == 49 || years.len() == 50, "{gz}: {}", years.len());
    }
}

/// Listing a range covers each pillar once per cycle.
#[test]
fn one_cycle_lists_every_pillar() {
    let cycle = year_ganzhi_range(1984, 2043);
    let mut seen: Vec<u8> = cycle.iter().map(|(_, gz)| gz.cycle_index()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..60).collect::<Vec<u8>>());
}

/// Next-occurrence lookup never returns the starting year.
#[test]
fn next_occurrence() {
    for gz in GanZhi::all() {
        let next = next_year_for_ganzhi(2000, gz);
        assert!(next > 2000 && next <= 2060);
        assert!(validate_year_match(next, gz.stem(), gz.branch()));
    }
}

/// Closest candidate to a target year.
#[test]
fn closest_to_target() {
    let gz: GanZhi = "庚午".parse().unwrap();
    let years = scan_matching_years(gz, 1800..=2100);
    assert_eq!(most_likely_year(&years, 2000), Some(1990));
    assert_eq!(most_likely_year(&years, 2030), Some(2050));
}

/// Partial specifications need a year pillar and accept placeholders.
#[test]
fn partial_specs() {
    let spec: PillarSpec = "庚午 * * 丙子".parse().unwrap();
    assert_eq!(spec.hour, Some("丙子".parse::<GanZhi>().unwrap()));
    assert!(spec.month.is_none() && spec.day.is_none());
    assert!("".parse::<PillarSpec>().is_err());
    assert!("庚午 甲丑".parse::<PillarSpec>().is_err());
}
