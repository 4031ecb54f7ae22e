//! Pattern trend across the decade periods.

use serde::Serialize;

use super::config::PatternName;
use super::effect::{EffectLevel, PeriodEffect, PeriodScope, period_effect};
use crate::ganzhi::GanZhi;
use crate::wuxing::Element;

/// Effect of one decade period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub start_year: i32,
    pub ganzhi: GanZhi,
    pub effect: PeriodEffect,
}

/// A decade transition worth flagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyYear {
    pub year: i32,
    pub event: String,
    pub level: EffectLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternTrend {
    pub pattern: PatternName,
    pub points: Vec<TrendPoint>,
    pub key_years: Vec<KeyYear>,
    /// Good or Bad when that level outnumbers both others, else Mixed.
    pub verdict: EffectLevel,
    pub summary: String,
    pub suggestion: String,
}

/// Evaluate `pattern` against each decade `(start_year, pillar)` in order.
pub fn pattern_trend(
    pattern: PatternName,
    day: Element,
    decades: &[(i32, GanZhi)],
) -> PatternTrend {
    let p = pattern.name();
    let points: Vec<TrendPoint> = decades
        .iter()
        .map(|&(start_year, ganzhi)| TrendPoint {
            start_year,
            ganzhi,
            effect: period_effect(pattern, ganzhi, day, PeriodScope::DaYun),
        })
        .collect();

    let key_years: Vec<KeyYear> = points
        .iter()
        .enumerate()
        .map(|(i, pt)| {
            let event = match i.checked_sub(1).map(|j| points[j].ganzhi) {
                None => format!("进入{}大运", pt.ganzhi),
                Some(prev) => format!("从{prev}大运进入{}大运", pt.ganzhi),
            };
            KeyYear {
                year: pt.start_year,
                event,
                level: pt.effect.level,
            }
        })
        .collect();

    if points.is_empty() {
        return PatternTrend {
            pattern,
            points,
            key_years,
            verdict: EffectLevel::Neutral,
            summary: "无法分析格局趋势，数据不足。".to_owned(),
            suggestion: "无法提供建议，数据不足。".to_owned(),
        };
    }

    let count = |l: EffectLevel| points.iter().filter(|pt| pt.effect.level == l).count();
    let good = count(EffectLevel::Good);
    let bad = count(EffectLevel::Bad);
    let other = points.len() - good - bad;
    let n = points.len();

    let verdict = if good > bad && good > other {
        EffectLevel::Good
    } else if bad > good && bad > other {
        EffectLevel::Bad
    } else {
        EffectLevel::Mixed
    };
    let summary = match verdict {
        EffectLevel::Good => {
            format!("整体来看，{p}在未来{n}步大运中发展趋势良好，有利于事业发展和个人成长。")
        }
        EffectLevel::Bad => format!("整体来看，{p}在未来{n}步大运中发展趋势不佳，需要注意调整和应对。"),
        _ => format!("整体来看，{p}在未来{n}步大运中发展趋势起伏不定，需要根据具体年份灵活调整。"),
    };

    let years_at = |l: EffectLevel| {
        key_years
            .iter()
            .filter(|k| k.level == l)
            .map(|k| k.year.to_string())
            .collect::<Vec<_>>()
            .join("年、")
    };
    let (good_years, bad_years) = (years_at(EffectLevel::Good), years_at(EffectLevel::Bad));
    let mut suggestion;
    if good > bad {
        suggestion = format!("对于{p}，建议在有利时期积极发展事业，在不利时期注意调整和保守。");
        if !good_years.is_empty() {
            suggestion += &format!("特别是在{good_years}年等关键年份，可以有所作为。");
        }
        if !bad_years.is_empty() {
            suggestion += &format!("而在{bad_years}年等年份，需要特别谨慎。");
        }
    } else if bad > good {
        suggestion = format!("对于{p}，建议在不利时期保守行事，注意调整心态和方向。");
        if !bad_years.is_empty() {
            suggestion += &format!("特别是在{bad_years}年等关键年份，需要特别谨慎。");
        }
        if !good_years.is_empty() {
            suggestion += &format!("而在{good_years}年等年份，可以适度进取。");
        }
    } else {
        suggestion = format!(
            "对于{p}，建议根据具体年份灵活调整策略，在有利时期积极进取，在不利时期保守行事。"
        );
        if !good_years.is_empty() && !bad_years.is_empty() {
            suggestion += &format!("特别注意{good_years}年等有利年份和{bad_years}年等不利年份的变化。");
        }
    }

    PatternTrend {
        pattern,
        points,
        key_years,
        verdict,
        summary,
        suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gz(s: &str) -> GanZhi {
        s.parse().unwrap()
    }

    #[test]
    fn empty_input() {
        let t = pattern_trend(PatternName::DirectOfficer, Element::Wood, &[]);
        assert!(t.points.is_empty());
        assert_eq!(t.verdict, EffectLevel::Neutral);
        assert_eq!(t.summary, "无法分析格局趋势，数据不足。");
    }

    #[test]
    fn key_years_name_transitions() {
        let decades = [(1990, gz("壬子")), (2000, gz("癸丑"))];
        let t = pattern_trend(PatternName::DirectResource, Element::Wood, &decades);
        assert_eq!(t.key_years[0].event, "进入壬子大运");
        assert_eq!(t.key_years[1].event, "从壬子大运进入癸丑大运");
        assert_eq!(t.key_years[1].year, 2000);
        // water feeds wood twice
        assert_eq!(t.verdict, EffectLevel::Good);
        assert!(t.suggestion.contains("1990年、2000年"));
    }

    #[test]
    fn ties_are_mixed() {
        // metal restrains wood (bad), water feeds it (good)
        let decades = [(1990, gz("庚申")), (2000, gz("壬子"))];
        let t = pattern_trend(PatternName::DirectResource, Element::Wood, &decades);
        assert_eq!(t.verdict, EffectLevel::Mixed);
    }
}
