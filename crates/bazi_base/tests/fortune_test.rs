//! Integration tests for the fortune periods.
//!
//! Commencement offsets are supplied directly; the jie-term distance that
//! normally produces them is exercised in the search crate.

use bazi_base::fortune::{FortuneOptions, liu_nian_in, month_pillars};
use bazi_base::{
    AnnotatedChart, Commencement, Direction, Gender, ShiShen, SolarDate, Star, YunSchool,
    build_fortune, dishi, generate_da_yun, generate_liu_nian, generate_liu_ri, generate_liu_shi,
    generate_liu_yue, generate_xiao_yun, parse_four_pillars,
};
use bazi_time::CivilTime;

fn chart(s: &str, gender: Gender) -> AnnotatedChart {
    AnnotatedChart::annotate(parse_four_pillars(s).unwrap(), gender)
}

/// Yin year (乙) reverses the direction for men and keeps it for women.
#[test]
fn yin_year_directions() {
    let male = chart("乙丑 戊寅 庚午 丙子", Gender::Male);
    let female = chart("乙丑 戊寅 庚午 丙子", Gender::Female);
    let m = generate_da_yun(&male, 1985, 1992, 2);
    let f = generate_da_yun(&female, 1985, 1992, 2);
    assert_eq!(m[0].facts.ganzhi.name(), "丁丑");
    assert_eq!(m[1].facts.ganzhi.name(), "丙子");
    assert_eq!(f[0].facts.ganzhi.name(), "己卯");
    assert_eq!(f[1].facts.ganzhi.name(), "庚辰");
}

/// Decades tile the timeline without gaps or overlaps.
#[test]
fn decades_are_contiguous() {
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Male);
    let dy = generate_da_yun(&c, 1984, 1991, 8);
    for pair in dy.windows(2) {
        assert_eq!(pair[0].end_year + 1, pair[1].start_year);
        assert_eq!(pair[0].end_age + 1, pair[1].start_age);
    }
    assert_eq!(dy[0].start_age, 8);
}

/// Period facts are taken relative to the Day Master.
#[test]
fn period_facts_relative_to_day_master() {
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Male);
    let dy = generate_da_yun(&c, 1984, 1990, 1);
    // 丁卯 for a 戊 Day Master: 丁 is 正印
    assert_eq!(dy[0].facts.stem_shishen, ShiShen::DirectResource);
    assert_eq!(dy[0].facts.nayin, "炉中火");
    assert!(!dy[0].facts.stars.contains(&Star::YiMa));
}

/// Decades and years read 地势 from their own stem, shorter periods from
/// the Day Master.
#[test]
fn stage_source_per_period_kind() {
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Male);
    let dm = c.day_master();
    for d in generate_da_yun(&c, 1984, 1990, 8) {
        let gz = d.facts.ganzhi;
        assert_eq!(d.facts.dishi, dishi(gz.stem(), gz.branch()));
    }
    for y in generate_liu_nian(&c, 1984, 1984..=2043) {
        let gz = y.facts.ganzhi;
        assert_eq!(y.facts.dishi, dishi(gz.stem(), gz.branch()));
    }
    for x in generate_xiao_yun(&c, 1984, 10) {
        assert_eq!(x.facts.dishi, dishi(dm, x.facts.ganzhi.branch()));
    }
    let months = generate_liu_yue(&c, 2024);
    for m in &months {
        assert_eq!(m.facts.dishi, dishi(dm, m.facts.ganzhi.branch()));
    }
    for d in generate_liu_ri(&c, &months[3]) {
        assert_eq!(d.facts.dishi, dishi(dm, d.facts.ganzhi.branch()));
    }
}

/// Every day of a sexagenary year appears once across its twelve months.
#[test]
fn days_tile_the_year() {
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Male);
    let days: Vec<SolarDate> = generate_liu_yue(&c, 2024)
        .iter()
        .flat_map(|m| generate_liu_ri(&c, m))
        .map(|d| d.date)
        .collect();
    assert_eq!(days.first(), Some(&SolarDate::new(2024, 2, 4)));
    assert_eq!(days.last(), Some(&SolarDate::new(2025, 2, 2)));
    for pair in days.windows(2) {
        assert_eq!(pair[0].add_days(1), pair[1]);
    }
    assert_eq!(days.len(), 365);
}

/// The two day-boundary schools share the eleven hours 丑 to 亥.
#[test]
fn hours_in_both_schools() {
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Male);
    let date = SolarDate::new(2024, 2, 4);
    let at_23 = generate_liu_shi(&c, date, true);
    let at_midnight = generate_liu_shi(&c, date, false);
    assert_eq!(at_23.len(), 12);
    assert_eq!(at_midnight.len(), 13);
    assert_eq!(at_23[1..], at_midnight[1..12]);
    assert_eq!(at_23[0].facts.ganzhi, at_midnight[0].facts.ganzhi);
    assert_eq!(at_23[0].date, SolarDate::new(2024, 2, 3));
    assert_eq!(at_midnight[12].facts.ganzhi, at_midnight[0].facts.ganzhi.step(12));
}

/// Childhood years run from the birth year with ages from 1.
#[test]
fn xiao_yun_ages() {
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Female);
    let xy = generate_xiao_yun(&c, 1984, 5);
    let ages: Vec<i32> = xy.iter().map(|x| x.age).collect();
    assert_eq!(ages, [1, 2, 3, 4, 5]);
    assert_eq!(xy[4].year, 1988);
    assert_eq!(xy[0].facts.ganzhi.name(), "己未");
}

/// Annual periods carry 太岁 and group under their decade.
#[test]
fn liu_nian_grouping() {
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Male);
    let dy = generate_da_yun(&c, 1984, 1990, 3);
    let ln = generate_liu_nian(&c, 1984, 1990..=2019);
    assert_eq!(ln.len(), 30);
    for d in &dy {
        let inside = liu_nian_in(&ln, d);
        assert_eq!(inside.len(), 10);
        assert_eq!(inside[0].year, d.start_year);
    }
    assert!(ln.iter().all(|y| y.facts.stars.contains(&Star::TaiSui)));
    assert_eq!(ln[0].facts.ganzhi.name(), "庚午");
}

/// Month pillars follow the five-tiger rule and step one place a month.
#[test]
fn month_pillars_step() {
    let p = month_pillars(1990);
    assert_eq!(p[0].name(), "戊寅");
    for pair in p.windows(2) {
        assert_eq!(pair[0].step(1), pair[1]);
    }
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Male);
    let months = generate_liu_yue(&c, 1990);
    assert_eq!(months[0].facts.ganzhi, p[0]);
    let first = months[0].span.unwrap();
    assert_eq!(first.jie, "立春");
    assert_eq!(first.start, SolarDate::new(1990, 2, 4));
}

/// The aggregate follows the commencement date and the options.
#[test]
fn build_with_options() {
    let c = chart("甲子 丙寅 戊辰 庚申", Gender::Male);
    let birth = CivilTime::new(1984, 3, 10, 12, 0, 0.0);
    let commencement = Commencement {
        years: 6,
        months: 2,
        days: 10,
        hours: 0,
        school: YunSchool::DaysAndShichen,
        estimated: false,
    };
    let options = FortuneOptions {
        da_yun_count: 4,
        xiao_yun_count: 6,
        liu_nian_span: 5,
        liu_yue_year: Some(2000),
    };
    let f = build_fortune(&c, &birth, commencement, &options);
    assert_eq!(f.direction, Direction::Forward);
    assert_eq!(f.commencement_date, SolarDate::new(1990, 5, 20));
    assert_eq!(f.da_yun.len(), 4);
    assert_eq!(f.da_yun[0].start_year, 1990);
    assert_eq!(f.xiao_yun.len(), 6);
    assert_eq!(f.liu_nian.len(), 5);
    assert!(f.liu_yue.iter().all(|m| m.year == 2000));
    let json = serde_json::to_value(&f).unwrap();
    assert_eq!(json["direction"], "顺行");
    assert_eq!(json["commencement_date"]["year"], 1990);
}
