//! HEVC 分数像素插值滤波器系数.
//!
//! 每组系数之和为 64, 第 0 组为整像素位置的单位冲激, 使二维路径在某一
//! 方向相位为 0 时退化为一维或整像素复制.

use hevc_mc_core::block::{EPEL_PHASES, QPEL_PHASES};

/// 亮度抽头数
pub const QPEL_TAPS: usize = 8;
/// 色度抽头数
pub const EPEL_TAPS: usize = 4;

/// 二维滤波第二遍的归一化右移量
pub const SECOND_PASS_SHIFT: u32 = 6;

/// 亮度 1/4 像素滤波器, 按相位 0..=3 索引
pub const QPEL_FILTERS: [[i16; QPEL_TAPS]; QPEL_PHASES + 1] = [
    [0, 0, 0, 64, 0, 0, 0, 0],
    [-1, 4, -10, 58, 17, -5, 1, 0],
    [-1, 4, -11, 40, 40, -11, 4, -1],
    [0, 1, -5, 17, 58, -10, 4, -1],
];

/// 色度 1/8 像素滤波器, 按相位 0..=7 索引
pub const EPEL_FILTERS: [[i16; EPEL_TAPS]; EPEL_PHASES + 1] = [
    [0, 64, 0, 0],
    [-2, 58, 10, -2],
    [-4, 54, 16, -2],
    [-6, 46, 28, -4],
    [-4, 36, 36, -4],
    [-4, 28, 46, -6],
    [-2, 16, 54, -4],
    [-2, 10, 58, -2],
];

/// 取亮度相位系数
#[inline(always)]
pub fn qpel_coeffs(phase: u8) -> &'static [i16; QPEL_TAPS] {
    debug_assert!(usize::from(phase) <= QPEL_PHASES, "亮度相位越界: {phase}");
    &QPEL_FILTERS[usize::from(phase)]
}

/// 取色度相位系数
#[inline(always)]
pub fn epel_coeffs(phase: u8) -> &'static [i16; EPEL_TAPS] {
    debug_assert!(usize::from(phase) <= EPEL_PHASES, "色度相位越界: {phase}");
    &EPEL_FILTERS[usize::from(phase)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_have_unit_dc_gain() {
        for (phase, c) in QPEL_FILTERS.iter().enumerate() {
            let sum: i32 = c.iter().map(|&v| i32::from(v)).sum();
            assert_eq!(sum, 64, "亮度相位 {phase} 系数和应为 64");
        }
        for (phase, c) in EPEL_FILTERS.iter().enumerate() {
            let sum: i32 = c.iter().map(|&v| i32::from(v)).sum();
            assert_eq!(sum, 64, "色度相位 {phase} 系数和应为 64");
        }
    }

    #[test]
    fn test_qpel_quarter_filters_are_mirrored() {
        let mut mirrored = QPEL_FILTERS[1];
        mirrored.reverse();
        assert_eq!(mirrored, QPEL_FILTERS[3], "1/4 与 3/4 相位应互为镜像");
    }

    #[test]
    fn test_epel_filters_are_mirrored() {
        for phase in 1..EPEL_PHASES {
            let mut mirrored = EPEL_FILTERS[phase];
            mirrored.reverse();
            assert_eq!(mirrored, EPEL_FILTERS[8 - phase], "色度相位 {phase} 镜像不匹配");
        }
    }
}
