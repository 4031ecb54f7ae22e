//! Stem five-combinations and branch groupings (三合, 三会).

use crate::branch::Branch;
use crate::stem::Stem;
use crate::wuxing::Element;

/// Element produced when two stems combine (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
pub const fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    let (lo, hi) = if a.index() < b.index() {
        (a.index(), b.index())
    } else {
        (b.index(), a.index())
    };
    if hi - lo != 5 {
        return None;
    }
    Some(match lo {
        0 => Element::Earth,
        1 => Element::Metal,
        2 => Element::Water,
        3 => Element::Wood,
        _ => Element::Fire,
    })
}

/// Kind of three-branch grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchGroupKind {
    /// 三合: birth, peak and grave of an element.
    SanHe,
    /// 三会: the three branches of one season.
    SanHui,
}

impl BranchGroupKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SanHe => "三合局",
            Self::SanHui => "三会局",
        }
    }
}

/// Three-harmony frames.
pub const SANHE: [([Branch; 3], Element); 4] = [
    ([Branch::Yin, Branch::Wu, Branch::Xu], Element::Fire),
    ([Branch::Shen, Branch::Zi, Branch::Chen], Element::Water),
    ([Branch::Hai, Branch::Mao, Branch::Wei], Element::Wood),
    ([Branch::Si, Branch::You, Branch::Chou], Element::Metal),
];

/// Seasonal meetings.
pub const SANHUI: [([Branch; 3], Element); 4] = [
    ([Branch::Yin, Branch::Mao, Branch::Chen], Element::Wood),
    ([Branch::Si, Branch::Wu, Branch::Wei], Element::Fire),
    ([Branch::Shen, Branch::You, Branch::Xu], Element::Metal),
    ([Branch::Hai, Branch::Zi, Branch::Chou], Element::Water),
];

/// A grouping at least partly present among a chart's branches.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchGroup {
    pub kind: BranchGroupKind,
    pub element: Element,
    /// The full three-branch frame.
    pub members: [Branch; 3],
    /// Frame members that are present, in frame order.
    pub present: Vec<Branch>,
}

impl BranchGroup {
    pub fn is_complete(&self) -> bool {
        self.present.len() == 3
    }

    /// Frame label, e.g. "寅午戌三合火局".
    pub fn label(&self) -> String {
        let kind = match self.kind {
            BranchGroupKind::SanHe => "三合",
            BranchGroupKind::SanHui => "三会",
        };
        let frame: String = self.members.iter().map(|b| b.name()).collect();
        format!("{frame}{kind}{}局", self.element.name())
    }
}

/// Groupings with at least `min_present` of their three branches present.
pub fn branch_groups(branches: &[Branch], min_present: usize) -> Vec<BranchGroup> {
    let frames = SANHE
        .iter()
        .map(|f| (BranchGroupKind::SanHe, f))
        .chain(SANHUI.iter().map(|f| (BranchGroupKind::SanHui, f)));
    frames
        .filter_map(|(kind, (members, element))| {
            let present: Vec<Branch> = members
                .iter()
                .copied()
                .filter(|m| branches.contains(m))
                .collect();
            (present.len() >= min_present).then(|| BranchGroup {
                kind,
                element: *element,
                members: *members,
                present,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_combinations() {
        assert_eq!(stem_combination(Stem::Jia, Stem::Ji), Some(Element::Earth));
        assert_eq!(stem_combination(Stem::Geng, Stem::Yi), Some(Element::Metal));
        assert_eq!(stem_combination(Stem::Bing, Stem::Xin), Some(Element::Water));
        assert_eq!(stem_combination(Stem::Ding, Stem::Ren), Some(Element::Wood));
        assert_eq!(stem_combination(Stem::Gui, Stem::Wu), Some(Element::Fire));
        assert_eq!(stem_combination(Stem::Jia, Stem::Yi), None);
    }

    #[test]
    fn complete_and_partial_groups() {
        let branches = [Branch::Yin, Branch::Wu, Branch::Xu, Branch::Mao];
        let groups = branch_groups(&branches, 2);
        let fire = groups
            .iter()
            .find(|g| g.kind == BranchGroupKind::SanHe && g.element == Element::Fire)
            .unwrap();
        assert!(fire.is_complete());
        let wood = groups
            .iter()
            .find(|g| g.kind == BranchGroupKind::SanHui && g.element == Element::Wood)
            .unwrap();
        assert_eq!(wood.present, vec![Branch::Yin, Branch::Mao]);
        assert!(!wood.is_complete());
    }

    #[test]
    fn nothing_below_threshold() {
        assert!(branch_groups(&[Branch::Zi], 2).is_empty());
    }
}
