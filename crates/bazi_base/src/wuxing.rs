//! The five elements (WuXing), polarity, and the generating/restraining
//! cycles shared by every rule table in the crate.

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (Wood = 0).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generating order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Parse a single element character.
    pub fn from_name(s: &str) -> Option<Self> {
        ALL_ELEMENTS.iter().copied().find(|e| e.name() == s)
    }

    /// The element this one generates (木→火→土→金→水→木).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one restrains (木→土→水→火→金→木).
    pub const fn restrains(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that restrains this one.
    pub const fn restrained_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yin/Yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    /// Polarity of a stem or branch index: even is yang.
    pub const fn from_index(i: u8) -> Self {
        if i % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

/// How one element stands towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// `from` generates `to`.
    Generates,
    /// `to` generates `from`.
    GeneratedBy,
    /// `from` restrains `to`.
    Restrains,
    /// `to` restrains `from`.
    RestrainedBy,
}

impl ElementRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "同",
            Self::Generates => "生",
            Self::GeneratedBy => "被生",
            Self::Restrains => "克",
            Self::RestrainedBy => "被克",
        }
    }
}

/// Relation of `from` towards `to`.
pub const fn relation(from: Element, to: Element) -> ElementRelation {
    match (to.index() + 5 - from.index()) % 5 {
        0 => ElementRelation::Same,
        1 => ElementRelation::Generates,
        2 => ElementRelation::Restrains,
        3 => ElementRelation::RestrainedBy,
        _ => ElementRelation::GeneratedBy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Wood.generated_by(), Element::Water);
    }

    #[test]
    fn restraining_cycle() {
        assert_eq!(Element::Wood.restrains(), Element::Earth);
        assert_eq!(Element::Earth.restrains(), Element::Water);
        assert_eq!(Element::Water.restrains(), Element::Fire);
        assert_eq!(Element::Fire.restrains(), Element::Metal);
        assert_eq!(Element::Metal.restrains(), Element::Wood);
        assert_eq!(Element::Wood.restrained_by(), Element::Metal);
    }

    #[test]
    fn relation_is_five_valued() {
        let w = Element::Wood;
        assert_eq!(relation(w, Element::Wood), ElementRelation::Same);
        assert_eq!(relation(w, Element::Fire), ElementRelation::Generates);
        assert_eq!(relation(w, Element::Water), ElementRelation::GeneratedBy);
        assert_eq!(relation(w, Element::Earth), ElementRelation::Restrains);
        assert_eq!(relation(w, Element::Metal), ElementRelation::RestrainedBy);
    }

    #[test]
    fn names_roundtrip() {
        for e in ALL_ELEMENTS {
            assert_eq!(Element::from_name(e.name()), Some(e));
        }
        assert_eq!(Element::from_name("x"), None);
    }
}
