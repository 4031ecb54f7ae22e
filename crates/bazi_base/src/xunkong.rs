//! Void branches (XunKong): the two branches left unpaired in a decade.

use crate::branch::Branch;
use crate::ganzhi::GanZhi;

/// First pair (甲X) of the decade containing `gz`.
pub const fn xun_head(gz: GanZhi) -> GanZhi {
    GanZhi::from_cycle_index((gz.cycle_index() / 10 * 10) as i64)
}

/// The two void branches of the decade containing `gz`.
pub const fn xunkong(gz: GanZhi) -> [Branch; 2] {
    let head = (gz.branch().index() as i64 - gz.stem().index() as i64).rem_euclid(12);
    [Branch::wrapping(head + 10), Branch::wrapping(head + 11)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jiazi_decade() {
        let gz: GanZhi = "丁卯".parse().unwrap();
        assert_eq!(xun_head(gz).name(), "甲子");
        assert_eq!(xunkong(gz), [Branch::Xu, Branch::Hai]);
    }

    #[test]
    fn jiayin_decade() {
        let gz: GanZhi = "癸亥".parse().unwrap();
        assert_eq!(xun_head(gz).name(), "甲寅");
        assert_eq!(xunkong(gz), [Branch::Zi, Branch::Chou]);
    }

    #[test]
    fn whole_decade_shares_voids() {
        let head = GanZhi::from_cycle_index(30);
        for i in 0..10 {
            assert_eq!(xunkong(head.step(i)), xunkong(head));
        }
    }
}
