//! Hidden stems (CangGan): the latent qi stored in each branch.
//!
//! Main qi first, then middle and residual qi.

use crate::branch::Branch;
use crate::stem::Stem;

/// Relative weight of main, middle and residual qi.
pub const HIDDEN_STEM_WEIGHTS: [f64; 3] = [1.0, 0.6, 0.3];

/// Hidden stems of a branch, main qi first.
pub const fn hidden_stems(branch: Branch) -> &'static [Stem] {
    use Stem::*;
    match branch {
        Branch::Zi => &[Gui],
        Branch::Chou => &[Ji, Gui, Xin],
        Branch::Yin => &[Jia, Bing, Wu],
        Branch::Mao => &[Yi],
        Branch::Chen => &[Wu, Yi, Gui],
        Branch::Si => &[Bing, Geng, Wu],
        Branch::Wu => &[Ding, Ji],
        Branch::Wei => &[Ji, Ding, Yi],
        Branch::Shen => &[Geng, Ren, Wu],
        Branch::You => &[Xin],
        Branch::Xu => &[Wu, Xin, Ding],
        Branch::Hai => &[Ren, Jia],
    }
}

/// Main-qi stem of a branch.
pub const fn main_qi(branch: Branch) -> Stem {
    hidden_stems(branch)[0]
}
