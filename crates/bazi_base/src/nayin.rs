//! NaYin: the thirty sound-element names, one per consecutive cycle pair.

use crate::ganzhi::GanZhi;
use crate::wuxing::Element;

const NAYIN_NAMES: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
    "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "砂中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// NaYin name of a pair.
pub const fn nayin(gz: GanZhi) -> &'static str {
    NAYIN_NAMES[(gz.cycle_index() / 2) as usize]
}

/// Element named by the last character of a NaYin.
pub fn nayin_element(gz: GanZhi) -> Element {
    let name = nayin(gz);
    name.chars()
        .last()
        .and_then(|c| Element::from_name(c.encode_utf8(&mut [0; 4])))
        .unwrap_or(Element::Earth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(nayin(GanZhi::from_cycle_index(0)), "海中金");
        assert_eq!(nayin(GanZhi::from_cycle_index(1)), "海中金");
        assert_eq!(nayin(GanZhi::from_cycle_index(58)), "大海水");
    }

    #[test]
    fn element_from_name() {
        let gz: GanZhi = "戊午".parse().unwrap();
        assert_eq!(nayin(gz), "天上火");
        assert_eq!(nayin_element(gz), Element::Fire);
    }

    #[test]
    fn every_name_ends_in_an_element() {
        for gz in GanZhi::all() {
            let last = nayin(gz).chars().last().unwrap().to_string();
            assert!(Element::from_name(&last).is_some(), "{gz}");
        }
    }
}
