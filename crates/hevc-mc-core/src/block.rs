//! 预测块几何、参考列表与分数相位.

use std::fmt;

/// 最大预测块边长
pub const MAX_PB_SIZE: usize = 64;

/// 亮度 8 抽头滤波器在块之前需要的边框样本数
pub const QPEL_MARGIN_BEFORE: usize = 3;
/// 亮度 8 抽头滤波器在块之后需要的边框样本数
pub const QPEL_MARGIN_AFTER: usize = 4;
/// 亮度滤波额外需要的行/列数
pub const QPEL_EXTRA: usize = QPEL_MARGIN_BEFORE + QPEL_MARGIN_AFTER;

/// 色度 4 抽头滤波器在块之前需要的边框样本数
pub const EPEL_MARGIN_BEFORE: usize = 1;
/// 色度 4 抽头滤波器在块之后需要的边框样本数
pub const EPEL_MARGIN_AFTER: usize = 2;
/// 色度滤波额外需要的行/列数
pub const EPEL_EXTRA: usize = EPEL_MARGIN_BEFORE + EPEL_MARGIN_AFTER;

/// 最大块对应的参考块边长 (64 + 7)
pub const QPEL_PATCH_SIZE: usize = MAX_PB_SIZE + QPEL_EXTRA;

/// 二维滤波中间缓冲区大小 (水平滤波结果, 行跨度为 `MAX_PB_SIZE`)
pub const MC_SCRATCH_SIZE: usize = (MAX_PB_SIZE + QPEL_EXTRA) * MAX_PB_SIZE;

/// 亮度相位个数 (1/4, 1/2, 3/4)
pub const QPEL_PHASES: usize = 3;
/// 色度相位个数 (1/8 ~ 7/8)
pub const EPEL_PHASES: usize = 7;

/// 预测块尺寸.
///
/// 上游调度按 "值减一" 编码宽高 (`u8` 可以表达 64), 插值核实际处理
/// `width + 1` x `height + 1` 个样本. 本类型保留该编码, 通过
/// [`width`](Self::width) / [`height`](Self::height) 给出样本数.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize {
    width_minus1: u8,
    height_minus1: u8,
}

impl BlockSize {
    /// 按上游编码 (宽高各减一) 创建
    pub fn from_minus_one(width_minus1: u8, height_minus1: u8) -> Self {
        debug_assert!(
            usize::from(width_minus1) < MAX_PB_SIZE && usize::from(height_minus1) < MAX_PB_SIZE,
            "块尺寸超过 {MAX_PB_SIZE}: {}x{}",
            usize::from(width_minus1) + 1,
            usize::from(height_minus1) + 1,
        );
        Self {
            width_minus1,
            height_minus1,
        }
    }

    /// 按样本数创建, 宽高取值 `1..=64`
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!((1..=MAX_PB_SIZE).contains(&width), "宽度越界: {width}");
        debug_assert!((1..=MAX_PB_SIZE).contains(&height), "高度越界: {height}");
        Self::from_minus_one((width - 1) as u8, (height - 1) as u8)
    }

    /// 上游编码的宽度 (样本数减一)
    pub fn width_minus1(&self) -> u8 {
        self.width_minus1
    }

    /// 上游编码的高度 (样本数减一)
    pub fn height_minus1(&self) -> u8 {
        self.height_minus1
    }

    /// 每行样本数
    pub fn width(&self) -> usize {
        usize::from(self.width_minus1) + 1
    }

    /// 行数
    pub fn height(&self) -> usize {
        usize::from(self.height_minus1) + 1
    }

    /// 样本总数
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }
}

impl fmt::Display for BlockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

/// 参考图像列表选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PredList {
    /// 列表 0
    #[default]
    L0,
    /// 列表 1
    L1,
}

impl PredList {
    /// 两个列表, 按索引顺序
    pub const ALL: [PredList; 2] = [PredList::L0, PredList::L1];

    /// 列表索引 (0 或 1)
    pub fn index(self) -> usize {
        match self {
            Self::L0 => 0,
            Self::L1 => 1,
        }
    }

    /// 从上游列表索引转换
    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::L0),
            1 => Some(Self::L1),
            _ => None,
        }
    }
}

/// 水平/垂直分数相位.
///
/// 0 表示该方向为整像素位置. 亮度相位取 `0..=3` (1/4 像素),
/// 色度相位取 `0..=7` (1/8 像素).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhasePair {
    /// 水平相位
    pub h: u8,
    /// 垂直相位
    pub v: u8,
}

impl PhasePair {
    pub fn new(h: u8, v: u8) -> Self {
        Self { h, v }
    }

    /// 由运动矢量分量提取亮度相位 (1/4 像素精度)
    pub fn from_luma_mv(mv_x: i32, mv_y: i32) -> Self {
        Self::new((mv_x & 3) as u8, (mv_y & 3) as u8)
    }

    /// 由运动矢量分量提取 4:2:0 色度相位 (1/8 像素精度)
    pub fn from_chroma_mv(mv_x: i32, mv_y: i32) -> Self {
        Self::new((mv_x & 7) as u8, (mv_y & 7) as u8)
    }

    /// 两个方向都在整像素位置
    pub fn is_integer(&self) -> bool {
        self.h == 0 && self.v == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size_plus_one_convention() {
        let bs = BlockSize::from_minus_one(3, 7);
        assert_eq!(bs.width(), 4);
        assert_eq!(bs.height(), 8);
        assert_eq!(bs.area(), 32);
        assert_eq!(bs, BlockSize::new(4, 8), "两种构造方式应等价");
        assert_eq!(bs.to_string(), "4x8");
    }

    #[test]
    fn test_block_size_max() {
        let bs = BlockSize::from_minus_one(63, 63);
        assert_eq!(bs.area(), MAX_PB_SIZE * MAX_PB_SIZE);
        assert_eq!(QPEL_PATCH_SIZE, 71);
    }

    #[test]
    fn test_pred_list_index() {
        assert_eq!(PredList::L0.index(), 0);
        assert_eq!(PredList::L1.index(), 1);
        assert_eq!(PredList::from_index(1), Some(PredList::L1));
        assert_eq!(PredList::from_index(2), None);
    }

    #[test]
    fn test_phase_from_mv() {
        assert_eq!(PhasePair::from_luma_mv(5, -1), PhasePair::new(1, 3));
        assert_eq!(PhasePair::from_chroma_mv(-3, 16), PhasePair::new(5, 0));
        assert!(PhasePair::from_luma_mv(8, -4).is_integer());
    }
}
