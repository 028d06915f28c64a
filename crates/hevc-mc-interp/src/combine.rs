//! 预测合成: 把 14 位中间预测舍入裁剪为最终 8 位样本.
//!
//! - 单向: `(p + 32) >> 6`
//! - 双向平均: `(p0 + p1 + 64) >> 7`
//! - 显式加权 (单向/双向), 默认权重时与前两者逐位一致

use hevc_mc_core::pixel::{PRED_OFFSET, PRED_SHIFT, clip_pixel};

/// 单个列表的显式加权参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PredWeight {
    /// 权重 (已包含 `1 << log2_denom` 的基值)
    pub weight: i32,
    /// 偏移, 8 位样本尺度
    pub offset: i32,
}

impl PredWeight {
    pub fn new(weight: i32, offset: i32) -> Self {
        Self { weight, offset }
    }

    /// 默认权重: 等价于不加权
    pub fn identity(log2_denom: u8) -> Self {
        Self {
            weight: 1 << log2_denom,
            offset: 0,
        }
    }
}

#[inline(always)]
pub(crate) fn unweighted_sample(p: i16) -> u8 {
    clip_pixel((i32::from(p) + PRED_OFFSET) >> PRED_SHIFT)
}

#[inline(always)]
pub(crate) fn average_sample(p0: i16, p1: i16) -> u8 {
    let shift = PRED_SHIFT + 1;
    clip_pixel((i32::from(p0) + i32::from(p1) + (1 << (shift - 1))) >> shift)
}

#[inline(always)]
pub(crate) fn weighted_sample(p: i16, log2_denom: u8, w: PredWeight) -> u8 {
    let log2wd = u32::from(log2_denom) + PRED_SHIFT;
    let scaled = (i32::from(p) * w.weight + (1 << (log2wd - 1))) >> log2wd;
    clip_pixel(scaled + w.offset)
}

#[inline(always)]
pub(crate) fn weighted_bi_sample(
    p0: i16,
    p1: i16,
    log2_denom: u8,
    w0: PredWeight,
    w1: PredWeight,
) -> u8 {
    let log2wd = u32::from(log2_denom) + PRED_SHIFT;
    let sum = i32::from(p0) * w0.weight
        + i32::from(p1) * w1.weight
        + ((w0.offset + w1.offset + 1) << log2wd);
    clip_pixel(sum >> (log2wd + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unweighted_rounding() {
        assert_eq!(unweighted_sample(128 << 6), 128);
        assert_eq!(unweighted_sample((100 << 6) + 31), 100);
        assert_eq!(unweighted_sample((100 << 6) + 32), 101, "半值应向上舍入");
        assert_eq!(unweighted_sample(-4080), 0);
        assert_eq!(unweighted_sample(22440), 255);
    }

    #[test]
    fn test_average_equals_unweighted_for_equal_operands() {
        for p in (-6000i16..23000).step_by(7) {
            assert_eq!(
                average_sample(p, p),
                unweighted_sample(p),
                "相同输入的平均应退化为单向舍入: p={p}"
            );
        }
    }

    #[test]
    fn test_average_rounds_half_up() {
        // (6400 + 6464 + 64) >> 7 = 101
        assert_eq!(average_sample(100 << 6, 101 << 6), 101);
        assert_eq!(average_sample(0, 64), 1);
        assert_eq!(average_sample(0, 63), 0);
    }

    #[test]
    fn test_identity_weights_match_default_paths() {
        for denom in 0..=7u8 {
            let w = PredWeight::identity(denom);
            for p in (-4080i16..20400).step_by(13) {
                assert_eq!(weighted_sample(p, denom, w), unweighted_sample(p));
                let q = p.wrapping_add(777);
                assert_eq!(
                    weighted_bi_sample(p, q, denom, w, w),
                    average_sample(p, q),
                    "默认双向权重应等价于平均: denom={denom} p={p}"
                );
            }
        }
    }

    #[test]
    fn test_weighted_offset_and_scale() {
        // 权重 1/2 (denom=1, w=1), 偏移 +10
        let w = PredWeight::new(1, 10);
        assert_eq!(weighted_sample(200 << 6, 1, w), 110);
        // 只取列表 1: 双向权重和为 1 << (denom + 1)
        let w0 = PredWeight::new(0, 0);
        let w1 = PredWeight::new(4, 0);
        assert_eq!(weighted_bi_sample(10 << 6, 90 << 6, 1, w0, w1), 90);
    }
}
