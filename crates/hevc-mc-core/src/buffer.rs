//! 参考块视图与预测缓冲区.
//!
//! 所有缓冲区由调用方分配并持有, 插值核只在单次调用内读写.

use crate::block::{BlockSize, MAX_PB_SIZE, PredList};

/// 单个预测平面的容量 (64x64)
pub const PRED_PLANE_SIZE: usize = MAX_PB_SIZE * MAX_PB_SIZE;

/// 参考块只读视图.
///
/// `data` 从边框区域左上角开始 (亮度为块左上角向左上各偏移 3 个样本,
/// 色度为各偏移 1 个样本). 调用方保证边框足够滤波器抽头访问.
#[derive(Debug, Clone, Copy)]
pub struct RefPatch<'a> {
    /// 行优先样本数据
    pub data: &'a [u8],
    /// 行跨度 (可大于逻辑宽度)
    pub stride: usize,
}

impl<'a> RefPatch<'a> {
    pub fn new(data: &'a [u8], stride: usize) -> Self {
        Self { data, stride }
    }

    /// 覆盖 `cols` x `rows` 区域所需的最小数据长度
    pub fn required_len(stride: usize, cols: usize, rows: usize) -> usize {
        if rows == 0 || cols == 0 {
            return 0;
        }
        (rows - 1) * stride + cols
    }

    /// 读取 `(x, y)` 处样本, 坐标相对边框左上角
    #[inline(always)]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// 返回第 `y` 行从 `x` 开始的切片
    #[inline(always)]
    pub fn row(&self, x: usize, y: usize) -> &'a [u8] {
        &self.data[y * self.stride + x..]
    }
}

/// 两个参考列表的 14 位中间预测.
///
/// 每个列表独立持有一个 64x64 平面, 由 [`PredList`] 选择.
#[derive(Debug, Clone)]
pub struct PredBuffers {
    lists: [Box<[i16]>; 2],
}

impl PredBuffers {
    pub fn new() -> Self {
        Self {
            lists: [
                vec![0i16; PRED_PLANE_SIZE].into_boxed_slice(),
                vec![0i16; PRED_PLANE_SIZE].into_boxed_slice(),
            ],
        }
    }

    /// 只读访问指定列表的平面
    pub fn list(&self, list: PredList) -> &[i16] {
        &self.lists[list.index()]
    }

    /// 可写访问指定列表的平面
    pub fn list_mut(&mut self, list: PredList) -> &mut [i16] {
        &mut self.lists[list.index()]
    }

    /// 同时只读访问两个列表
    pub fn pair(&self) -> (&[i16], &[i16]) {
        (&self.lists[0], &self.lists[1])
    }

    /// 指定列表中按块宽紧密排列的前 `area` 个样本
    pub fn block(&self, list: PredList, size: BlockSize) -> &[i16] {
        &self.lists[list.index()][..size.area()]
    }
}

impl Default for PredBuffers {
    fn default() -> Self {
        Self::new()
    }
}

/// 两个列表的最终 8 位预测样本.
///
/// 双向平均的结果固定写入 [`PredList::L0`].
#[derive(Debug, Clone)]
pub struct SampleBuffers {
    lists: [Box<[u8]>; 2],
}

impl SampleBuffers {
    pub fn new() -> Self {
        Self {
            lists: [
                vec![0u8; PRED_PLANE_SIZE].into_boxed_slice(),
                vec![0u8; PRED_PLANE_SIZE].into_boxed_slice(),
            ],
        }
    }

    pub fn list(&self, list: PredList) -> &[u8] {
        &self.lists[list.index()]
    }

    pub fn list_mut(&mut self, list: PredList) -> &mut [u8] {
        &mut self.lists[list.index()]
    }

    /// 指定列表中按块宽紧密排列的前 `area` 个样本
    pub fn block(&self, list: PredList, size: BlockSize) -> &[u8] {
        &self.lists[list.index()][..size.area()]
    }
}

impl Default for SampleBuffers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pred_buffers_lists_are_independent() {
        let mut bufs = PredBuffers::new();
        bufs.list_mut(PredList::L1)[0] = 77;
        assert_eq!(bufs.list(PredList::L0)[0], 0, "写入 L1 不应影响 L0");
        let (l0, l1) = bufs.pair();
        assert_eq!((l0[0], l1[0]), (0, 77));
        assert_eq!(l0.len(), PRED_PLANE_SIZE);
    }

    #[test]
    fn test_ref_patch_access() {
        let data: Vec<u8> = (0..20).collect();
        let patch = RefPatch::new(&data, 5);
        assert_eq!(patch.at(2, 3), 17);
        assert_eq!(&patch.row(1, 2)[..3], &[11, 12, 13]);
        assert_eq!(RefPatch::required_len(5, 4, 4), 19);
        assert_eq!(RefPatch::required_len(71, 71, 71), 71 * 71);
    }

    #[test]
    fn test_block_view_len() {
        let bufs = SampleBuffers::new();
        assert_eq!(bufs.block(PredList::L0, BlockSize::new(8, 4)).len(), 32);
    }
}
