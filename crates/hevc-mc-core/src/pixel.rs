//! 像素值域与中间预测精度.
//!
//! 单向插值结果保存在 14 位中间精度 (`i16`), 整像素样本 `c` 在该域中
//! 表示为 `c << PRED_SHIFT`. 最终舍入与裁剪推迟到预测合成阶段.

/// 样本位深
pub const BIT_DEPTH: u32 = 8;

/// 最大像素值
pub const MAX_PIXEL: i32 = (1 << BIT_DEPTH) - 1;

/// 中间预测精度 (位)
pub const PRED_PRECISION: u32 = 14;

/// 样本到中间精度的左移量, 也是单向合成时的右移量
pub const PRED_SHIFT: u32 = PRED_PRECISION - BIT_DEPTH;

/// 单向合成的舍入偏移
pub const PRED_OFFSET: i32 = 1 << (PRED_SHIFT - 1);

/// 将整数裁剪到 `[0, 255]`.
///
/// 超出范围时按符号饱和: 负数得 0, 大于 255 得 255.
#[inline(always)]
pub fn clip_pixel(v: i32) -> u8 {
    if v & !MAX_PIXEL != 0 {
        ((-v) >> 31) as u8
    } else {
        v as u8
    }
}

/// 将样本提升到中间预测精度
#[inline(always)]
pub fn widen_sample(sample: u8) -> i16 {
    (i16::from(sample)) << PRED_SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_pixel_in_range_unchanged() {
        for v in 0..=255 {
            assert_eq!(i32::from(clip_pixel(v)), v, "范围内的值应原样返回: {v}");
        }
    }

    #[test]
    fn test_clip_pixel_saturates() {
        assert_eq!(clip_pixel(-1), 0);
        assert_eq!(clip_pixel(-4096), 0);
        assert_eq!(clip_pixel(i32::MIN + 1), 0);
        assert_eq!(clip_pixel(256), 255);
        assert_eq!(clip_pixel(33150), 255);
        assert_eq!(clip_pixel(i32::MAX), 255);
    }

    #[test]
    fn test_widen_sample() {
        assert_eq!(widen_sample(0), 0);
        assert_eq!(widen_sample(128), 8192);
        assert_eq!(widen_sample(255), 16320);
    }
}
