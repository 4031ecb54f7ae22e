//! Reduce candidates to one main pattern and ranked assistants.

use serde::Serialize;

use super::detect::Pattern;
use crate::branch::Branch;
use crate::strength::StrengthLevel;

/// Main pattern plus the remaining candidates in rank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternResolution {
    pub main: Pattern,
    pub assistants: Vec<Pattern>,
}

/// Rank by priority, then strength, both descending.
///
/// The sort is stable: candidates equal on both keys keep detection
/// order. An empty list resolves to the 杂气格 fallback, so the result
/// always has a main pattern.
pub fn resolve(
    mut candidates: Vec<Pattern>,
    level: StrengthLevel,
    month_branch: Branch,
) -> PatternResolution {
    if candidates.is_empty() {
        return PatternResolution {
            main: Pattern::fallback(level, month_branch),
            assistants: Vec::new(),
        };
    }
    candidates.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.strength.total_cmp(&a.strength))
    });
    let main = candidates.remove(0);
    PatternResolution {
        main,
        assistants: candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geju::config::PatternName;

    fn pattern(name: PatternName, strength: f64, priority: i32) -> Pattern {
        Pattern {
            name,
            strength,
            priority,
            detail: "",
        }
    }

    #[test]
    fn empty_resolves_to_fallback() {
        let r = resolve(Vec::new(), StrengthLevel::Balanced, Branch::Zi);
        assert_eq!(r.main.name, PatternName::Mixed);
        assert_eq!(r.main.strength, 60.0);
        assert!(r.assistants.is_empty());
    }

    #[test]
    fn priority_beats_strength() {
        let r = resolve(
            vec![
                pattern(PatternName::DirectOfficer, 80.0, 9),
                pattern(PatternName::WealthAndOfficer, 61.0, 10),
            ],
            StrengthLevel::Balanced,
            Branch::Zi,
        );
        assert_eq!(r.main.name, PatternName::WealthAndOfficer);
        assert_eq!(r.assistants[0].name, PatternName::DirectOfficer);
    }

    #[test]
    fn full_ties_keep_detection_order() {
        let r = resolve(
            vec![
                pattern(PatternName::DirectWealth, 70.0, 5),
                pattern(PatternName::IndirectWealth, 75.0, 5),
                pattern(PatternName::EatingGod, 70.0, 5),
            ],
            StrengthLevel::Balanced,
            Branch::Zi,
        );
        assert_eq!(r.main.name, PatternName::IndirectWealth);
        let rest: Vec<_> = r.assistants.iter().map(|p| p.name).collect();
        assert_eq!(rest, vec![PatternName::DirectWealth, PatternName::EatingGod]);
    }
}
