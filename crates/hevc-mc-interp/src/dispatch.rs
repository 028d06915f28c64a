//! 按分数相位选择滤波路径.
//!
//! - [`FilterPath`]: 由相位对决定走整像素、一维还是二维路径.
//! - 加速实现的亮度核按相位单态化, 通过下面的静态函数表索引,
//!   下标直接为相位 (0 为单位冲激, 与整像素路径等价).

use hevc_mc_core::PhasePair;

#[cfg(feature = "accel")]
use hevc_mc_core::RefPatch;

/// 一次块预测应走的滤波路径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPath {
    /// 整像素位置, 仅提升精度复制
    Pixels,
    /// 仅水平分数位置
    Horizontal(u8),
    /// 仅垂直分数位置
    Vertical(u8),
    /// 两个方向都是分数位置, 先水平后垂直
    Both(u8, u8),
}

impl FilterPath {
    /// 根据相位对选择路径
    pub fn select(phases: PhasePair) -> Self {
        match (phases.h, phases.v) {
            (0, 0) => Self::Pixels,
            (h, 0) => Self::Horizontal(h),
            (0, v) => Self::Vertical(v),
            (h, v) => Self::Both(h, v),
        }
    }
}

/// 亮度单态化核签名
#[cfg(feature = "accel")]
pub(crate) type QpelFn = fn(&mut [i16], usize, &RefPatch<'_>, usize, usize);

#[cfg(feature = "accel")]
use crate::accel::{qpel_h, qpel_hv, qpel_v};

#[cfg(feature = "accel")]
pub(crate) static QPEL_H_FNS: [QpelFn; 4] = [qpel_h::<0>, qpel_h::<1>, qpel_h::<2>, qpel_h::<3>];

#[cfg(feature = "accel")]
pub(crate) static QPEL_V_FNS: [QpelFn; 4] = [qpel_v::<0>, qpel_v::<1>, qpel_v::<2>, qpel_v::<3>];

#[cfg(feature = "accel")]
pub(crate) static QPEL_HV_FNS: [[QpelFn; 4]; 4] = [
    [qpel_hv::<0, 0>, qpel_hv::<0, 1>, qpel_hv::<0, 2>, qpel_hv::<0, 3>],
    [qpel_hv::<1, 0>, qpel_hv::<1, 1>, qpel_hv::<1, 2>, qpel_hv::<1, 3>],
    [qpel_hv::<2, 0>, qpel_hv::<2, 1>, qpel_hv::<2, 2>, qpel_hv::<2, 3>],
    [qpel_hv::<3, 0>, qpel_hv::<3, 1>, qpel_hv::<3, 2>, qpel_hv::<3, 3>],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_filter_path() {
        assert_eq!(FilterPath::select(PhasePair::new(0, 0)), FilterPath::Pixels);
        assert_eq!(FilterPath::select(PhasePair::new(1, 0)), FilterPath::Horizontal(1));
        assert_eq!(FilterPath::select(PhasePair::new(0, 3)), FilterPath::Vertical(3));
        assert_eq!(FilterPath::select(PhasePair::new(2, 7)), FilterPath::Both(2, 7));
    }
}
