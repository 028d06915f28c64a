//! 面向上游调度的运动补偿入口.
//!
//! 每个方法对应一次块预测调用: 读取带边框的参考块, 写入由
//! [`PredList`] 选择的中间预测平面. 目标平面按块宽紧密排列.

use std::fmt;

use hevc_mc_core::{BlockSize, McResult, PhasePair, PredBuffers, PredList, RefPatch, SampleBuffers};

use crate::backend::{InterpConfig, REFERENCE_KERNELS, select_kernels};
use crate::combine::PredWeight;
use crate::dispatch::FilterPath;
use crate::kernels::InterpKernels;

/// 运动补偿插值器
///
/// 只持有所选插值核的静态引用, 可自由复制并跨线程共享.
#[derive(Clone, Copy)]
pub struct Interpolator {
    kernels: &'static dyn InterpKernels,
}

impl fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolator")
            .field("kernels", &self.kernels.name())
            .finish()
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::reference()
    }
}

impl Interpolator {
    /// 按配置创建
    pub fn new(config: &InterpConfig) -> McResult<Self> {
        Ok(Self {
            kernels: select_kernels(config.backend)?,
        })
    }

    /// 使用参考实现
    pub fn reference() -> Self {
        Self {
            kernels: &REFERENCE_KERNELS,
        }
    }

    /// 使用指定的插值核
    pub fn with_kernels(kernels: &'static dyn InterpKernels) -> Self {
        Self { kernels }
    }

    /// 当前插值核名称
    pub fn backend_name(&self) -> &'static str {
        self.kernels.name()
    }

    /// 底层插值核
    pub fn kernels(&self) -> &'static dyn InterpKernels {
        self.kernels
    }

    pub fn put_qpel_pixels(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels
            .put_qpel_pixels(dst.list_mut(list), w, src, w, h);
    }

    pub fn put_qpel_h(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
        mx: u8,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels.put_qpel_h(dst.list_mut(list), w, src, w, h, mx);
    }

    pub fn put_qpel_v(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
        my: u8,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels.put_qpel_v(dst.list_mut(list), w, src, w, h, my);
    }

    pub fn put_qpel_hv(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
        phases: PhasePair,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels
            .put_qpel_hv(dst.list_mut(list), w, src, w, h, phases.h, phases.v);
    }

    pub fn put_epel_pixels(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels
            .put_epel_pixels(dst.list_mut(list), w, src, w, h);
    }

    pub fn put_epel_h(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
        mx: u8,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels.put_epel_h(dst.list_mut(list), w, src, w, h, mx);
    }

    pub fn put_epel_v(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
        my: u8,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels.put_epel_v(dst.list_mut(list), w, src, w, h, my);
    }

    pub fn put_epel_hv(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
        phases: PhasePair,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels
            .put_epel_hv(dst.list_mut(list), w, src, w, h, phases.h, phases.v);
    }

    /// 亮度块预测: 按相位对选择整像素 / 水平 / 垂直 / 二维路径
    pub fn predict_luma(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
        phases: PhasePair,
    ) {
        match FilterPath::select(phases) {
            FilterPath::Pixels => self.put_qpel_pixels(dst, list, src, size),
            FilterPath::Horizontal(mx) => self.put_qpel_h(dst, list, src, size, mx),
            FilterPath::Vertical(my) => self.put_qpel_v(dst, list, src, size, my),
            FilterPath::Both(..) => self.put_qpel_hv(dst, list, src, size, phases),
        }
    }

    /// 色度块预测: 按相位对选择路径
    pub fn predict_chroma(
        &self,
        dst: &mut PredBuffers,
        list: PredList,
        src: &RefPatch<'_>,
        size: BlockSize,
        phases: PhasePair,
    ) {
        match FilterPath::select(phases) {
            FilterPath::Pixels => self.put_epel_pixels(dst, list, src, size),
            FilterPath::Horizontal(mx) => self.put_epel_h(dst, list, src, size, mx),
            FilterPath::Vertical(my) => self.put_epel_v(dst, list, src, size, my),
            FilterPath::Both(..) => self.put_epel_hv(dst, list, src, size, phases),
        }
    }

    /// 单向预测输出: 读取 `list` 的中间预测, 写入 `list` 的输出平面
    pub fn put_unweighted_pred(
        &self,
        dst: &mut SampleBuffers,
        src: &PredBuffers,
        size: BlockSize,
        list: PredList,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels
            .put_unweighted_pred(dst.list_mut(list), w, src.list(list), w, w, h);
    }

    /// 双向平均输出, 结果写入 [`PredList::L0`]
    pub fn put_weighted_pred_avg(&self, dst: &mut SampleBuffers, src: &PredBuffers, size: BlockSize) {
        let (w, h) = (size.width(), size.height());
        let (src0, src1) = src.pair();
        self.kernels
            .put_weighted_pred_avg(dst.list_mut(PredList::L0), w, src0, src1, w, w, h);
    }

    /// 单向显式加权输出
    pub fn put_weighted_pred(
        &self,
        dst: &mut SampleBuffers,
        src: &PredBuffers,
        size: BlockSize,
        list: PredList,
        log2_denom: u8,
        weight: PredWeight,
    ) {
        let (w, h) = (size.width(), size.height());
        self.kernels.put_weighted_pred(
            dst.list_mut(list),
            w,
            src.list(list),
            w,
            w,
            h,
            log2_denom,
            weight,
        );
    }

    /// 双向显式加权输出, 结果写入 [`PredList::L0`]
    pub fn put_weighted_pred_bi(
        &self,
        dst: &mut SampleBuffers,
        src: &PredBuffers,
        size: BlockSize,
        log2_denom: u8,
        weights: [PredWeight; 2],
    ) {
        let (w, h) = (size.width(), size.height());
        let (src0, src1) = src.pair();
        self.kernels.put_weighted_pred_bi(
            dst.list_mut(PredList::L0),
            w,
            src0,
            src1,
            w,
            w,
            h,
            log2_denom,
            weights,
        );
    }
}
