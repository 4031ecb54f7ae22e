//! Integration tests for pattern detection, resolution and readings.

use bazi_base::fortune::{decade_anchors, generate_da_yun};
use bazi_base::geju::{
    EffectLevel, PeriodScope, UsefulGod, detect_candidates, pattern_trend, period_effect, resolve,
};
use bazi_base::{
    AnnotatedChart, Branch, Element, GanZhi, Gender, PatternName, StrengthLevel, analyze_patterns,
    parse_four_pillars,
};

fn chart(s: &str) -> AnnotatedChart {
    AnnotatedChart::annotate(parse_four_pillars(s).unwrap(), Gender::Male)
}

/// A wood-saturated 甲 chart born in a 寅 month.
const WOOD_CHART: &str = "甲寅 丙寅 甲寅 乙亥";

/// Following-strength outranks building-lu on strength at equal priority.
#[test]
fn wood_chart_follows_strength() {
    let analysis = analyze_patterns(&chart(WOOD_CHART));
    assert_eq!(analysis.main.name, PatternName::FollowingStrength);
    assert_eq!(analysis.main.priority, 10);
    assert_eq!(analysis.main.strength, 90.0);
    assert_eq!(analysis.assistants[0].name, PatternName::BuildingLu);
    assert_eq!(analysis.assistants[0].priority, 10);
    assert_eq!(analysis.yong_shen.god, UsefulGod::Companion);
}

/// Assistants stay sorted by priority, then strength.
#[test]
fn assistants_are_ranked() {
    let analysis = analyze_patterns(&chart(WOOD_CHART));
    for pair in analysis.assistants.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.priority > b.priority || (a.priority == b.priority && a.strength >= b.strength));
    }
    let names: Vec<PatternName> = analysis.assistants.iter().map(|p| p.name).collect();
    assert!(names.contains(&PatternName::Dominant));
    assert!(names.contains(&PatternName::EatingGod));
}

/// Candidates never include the fallback; resolution supplies it.
#[test]
fn fallback_only_from_resolution() {
    let found = detect_candidates(&chart(WOOD_CHART));
    assert!(found.iter().all(|p| p.name != PatternName::Mixed));
    let empty = resolve(Vec::new(), StrengthLevel::Balanced, Branch::Zi);
    assert_eq!(empty.main.name, PatternName::Mixed);
    assert_eq!(empty.main.strength, 60.0);
    assert!(empty.assistants.is_empty());
}

/// Factors open with strength and season and always cite the NaYin.
#[test]
fn factors_shape() {
    let analysis = analyze_patterns(&chart(WOOD_CHART));
    let names: Vec<&str> = analysis.factors.iter().map(|f| f.factor.as_str()).collect();
    assert_eq!(&names[..2], ["日主旺衰", "月令"]);
    assert_eq!(names.last(), Some(&"纳音五行"));
    assert_eq!(analysis.factors[0].contribution, 25);
}

/// The same matrix reads a decade and a year, only the label differs.
#[test]
fn scope_only_changes_label() {
    let gz: GanZhi = "壬子".parse().unwrap();
    let dy = period_effect(PatternName::DirectResource, gz, Element::Wood, PeriodScope::DaYun);
    let ln = period_effect(PatternName::DirectResource, gz, Element::Wood, PeriodScope::LiuNian);
    assert_eq!(dy.level, ln.level);
    assert_eq!(dy.level, EffectLevel::Good);
    assert_eq!(dy.effect.replacen("大运", "流年", 1), ln.effect);
}

/// A trend over generated decades has one point and key year per decade.
#[test]
fn trend_over_decades() {
    let c = chart(WOOD_CHART);
    let decades = generate_da_yun(&c, 1974, 1980, 6);
    let trend = pattern_trend(
        PatternName::DirectOfficer,
        c.day_element(),
        &decade_anchors(&decades),
    );
    assert_eq!(trend.points.len(), 6);
    assert_eq!(trend.key_years.len(), 6);
    assert_eq!(trend.key_years[0].year, 1980);
    assert!(trend.key_years[1].event.starts_with("从"));
    assert!(matches!(
        trend.verdict,
        EffectLevel::Good | EffectLevel::Bad | EffectLevel::Mixed
    ));
}

/// The analysis serializes with the pattern's Chinese name.
#[test]
fn analysis_serializes() {
    let analysis = analyze_patterns(&chart(WOOD_CHART));
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["main"]["name"], "从旺格");
    assert_eq!(json["yong_shen"]["god"], "比劫");
}
