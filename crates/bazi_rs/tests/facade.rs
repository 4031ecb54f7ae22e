//! Integration tests for the bazi_rs facade over the global engine.

use std::sync::Once;

use bazi_rs::*;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        init(EngineConfig::default()).expect("engine init");
    });
}

/// The global engine reports itself after `init`.
#[test]
fn is_initialized_after_init() {
    ensure_init();
    assert!(is_initialized());
}

/// A second `init` is refused, as is an invalid config.
#[test]
fn init_twice_rejected() {
    ensure_init();
    assert_eq!(
        init(EngineConfig::default()),
        Err(SearchError::InvalidRequest("engine already initialized"))
    );
    let bad = EngineConfig {
        sect: 9,
        ..EngineConfig::default()
    };
    assert!(matches!(init(bad), Err(SearchError::Config(_))));
}

/// A solar birth produces every analysis layer.
#[test]
fn analyze_solar_full_chart() {
    ensure_init();
    let date: BirthDate = "2000-01-01 12:00".parse().unwrap();
    let full = analyze_solar(&date, Gender::Male).unwrap();
    assert_eq!(full.chart.raw().to_string(), "己卯 丙子 戊午 戊午");
    assert_eq!(full.birth, Some(date));
    assert_eq!(full.sect, 2);

    let fortune = full.fortune.as_ref().unwrap();
    assert_eq!(fortune.da_yun.len(), 10);
    assert_eq!(fortune.liu_nian.len(), 10);
    assert_eq!(fortune.liu_yue.len(), 12);
    assert!(!fortune.commencement.estimated);
    assert!(full.trend.is_some());
}

/// A lunar date lands on its civil day before analysis.
#[test]
fn analyze_lunar_new_year() {
    ensure_init();
    let date = LunarDate {
        year: 2000,
        month: 1,
        day: 1,
        is_leap: false,
    };
    let full = analyze_lunar(date, 12, 0, Gender::Female).unwrap();
    assert_eq!(full.birth, Some(BirthDate::new(2000, 2, 5, 12, 0)));
    assert!(full.chart.raw().to_string().starts_with("庚辰 戊寅"));
}

/// A literal chart is placed near the hint and then dated.
#[test]
fn analyze_ganzhi_with_hint() {
    ensure_init();
    let full = analyze_ganzhi("己卯 丙子 戊午 戊午", Gender::Male, Some(2000)).unwrap();
    assert_eq!(full.birth, Some(BirthDate::new(2000, 1, 1, 11, 0)));
    assert!(full.fortune.is_some());
}

/// Malformed pillar strings are rejected with a parse error.
#[test]
fn analyze_ganzhi_rejects_garbage() {
    ensure_init();
    assert!(matches!(
        analyze_ganzhi("甲子 丙寅", Gender::Male, None),
        Err(SearchError::Bazi(_))
    ));
    assert!(matches!(
        analyze_ganzhi("甲丑 丙寅 戊辰 庚申", Gender::Male, None),
        Err(SearchError::Bazi(_))
    ));
}

/// Year matching through the facade, with the hint choosing the year.
#[test]
fn year_matching() {
    ensure_init();
    let m = matching_years("己卯 丙子 戊午 戊午").unwrap();
    assert_eq!(m.tier, MatchTier::Calendar);
    assert!(m.years.contains(&2000));
    assert_eq!(
        find_most_likely_year("己卯 丙子 戊午 戊午", Some(2001)).unwrap(),
        Some(2000)
    );
    assert!(matching_years("not a pillar").is_err());
}

/// Days of a month and hours of a day through an engine of either sect.
#[test]
fn engine_days_and_hours() {
    let chart = parse_four_pillars("甲子 丙寅 戊辰 庚申")
        .map(|raw| AnnotatedChart::annotate(raw, Gender::Male))
        .unwrap();
    let engine = Engine::default();
    let days = engine.liu_ri(&chart, 2024, 0).unwrap();
    assert_eq!(days.first().map(|d| d.date), Some(SolarDate::new(2024, 2, 4)));
    assert!(engine.liu_ri(&chart, 2024, 12).is_err());

    let date = SolarDate::new(2000, 1, 1);
    let hours = engine.liu_shi(&chart, date);
    assert_eq!(hours.len(), 13);
    assert_eq!(hours[12].facts.ganzhi.name(), "甲子");

    let school_one = Engine::new(EngineConfig {
        sect: 1,
        ..EngineConfig::default()
    })
    .unwrap();
    let hours = school_one.liu_shi(&chart, date);
    assert_eq!(hours.len(), 12);
    assert_eq!(hours[0].date, SolarDate::new(1999, 12, 31));
}

/// The full chart serializes with names, not indices.
#[test]
fn full_chart_json() {
    ensure_init();
    let date = BirthDate::new(1990, 6, 15, 8, 45);
    let full = analyze_solar(&date, Gender::Female).unwrap();
    let v = serde_json::to_value(&full).unwrap();
    assert_eq!(v["birth"]["year"], 1990);
    assert_eq!(v["chart"]["gender"], "女");
    assert!(v["geju"]["main"]["name"].is_string());
    assert!(v["fortune"]["da_yun"].is_array());
}

/// Helpers re-exported from the base crate.
#[test]
fn reexported_helpers() {
    assert_eq!(year_to_ganzhi(1984).name(), "甲子");
    let gz: GanZhi = "庚午".parse().unwrap();
    assert_eq!(next_year_for_ganzhi(1991, gz), 2050);
    let info = star_info(Star::TianYiGuiRen);
    assert_eq!(info.name, Star::TianYiGuiRen.name());
    assert!(!info.description.is_empty());
}
