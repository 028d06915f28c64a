//! 插值核统一接口.
//!
//! 参考实现与加速实现都实现 [`InterpKernels`], 由 [`crate::backend`]
//! 按配置选择. 所有方法都是无状态纯变换, 只写目标区域.
//!
//! # 约定
//! - `src` 从边框左上角开始, 亮度边框为 3 (前) / 4 (后), 色度为 1 / 2.
//! - `width` / `height` 为样本数 (上游 `+1` 之后的值), 不超过 64.
//! - 中间预测为 14 位精度, 不做舍入与裁剪.
//! - 参数越界属于调用方违约, 仅在 debug 构建中断言.

use hevc_mc_core::RefPatch;

use crate::combine::PredWeight;

pub trait InterpKernels: Send + Sync {
    /// 实现名称, 用于日志与诊断
    fn name(&self) -> &'static str;

    /// 亮度整像素复制 (提升到中间精度)
    fn put_qpel_pixels(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
    );

    /// 亮度水平 8 抽头滤波
    fn put_qpel_h(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        mx: u8,
    );

    /// 亮度垂直 8 抽头滤波
    fn put_qpel_v(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        my: u8,
    );

    /// 亮度先水平后垂直的可分离滤波
    #[allow(clippy::too_many_arguments)]
    fn put_qpel_hv(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        mx: u8,
        my: u8,
    );

    /// 色度整像素复制
    fn put_epel_pixels(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
    );

    /// 色度水平 4 抽头滤波
    fn put_epel_h(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        mx: u8,
    );

    /// 色度垂直 4 抽头滤波
    fn put_epel_v(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        my: u8,
    );

    /// 色度可分离二维滤波
    #[allow(clippy::too_many_arguments)]
    fn put_epel_hv(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        mx: u8,
        my: u8,
    );

    /// 单向预测: 舍入裁剪单个列表的中间预测
    #[allow(clippy::too_many_arguments)]
    fn put_unweighted_pred(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[i16],
        src_stride: usize,
        width: usize,
        height: usize,
    );

    /// 双向预测: 两个列表舍入平均
    #[allow(clippy::too_many_arguments)]
    fn put_weighted_pred_avg(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src0: &[i16],
        src1: &[i16],
        src_stride: usize,
        width: usize,
        height: usize,
    );

    /// 单向显式加权预测
    #[allow(clippy::too_many_arguments)]
    fn put_weighted_pred(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[i16],
        src_stride: usize,
        width: usize,
        height: usize,
        log2_denom: u8,
        weight: PredWeight,
    );

    /// 双向显式加权预测
    #[allow(clippy::too_many_arguments)]
    fn put_weighted_pred_bi(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src0: &[i16],
        src1: &[i16],
        src_stride: usize,
        width: usize,
        height: usize,
        log2_denom: u8,
        weights: [PredWeight; 2],
    );
}

/// 检查目标与参考块尺寸 (仅 debug 构建)
#[inline(always)]
pub(crate) fn debug_check_filter_args(
    dst: &[i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
    extra: usize,
) {
    debug_assert!(
        (1..=hevc_mc_core::MAX_PB_SIZE).contains(&width)
            && (1..=hevc_mc_core::MAX_PB_SIZE).contains(&height),
        "块尺寸越界: {width}x{height}"
    );
    debug_assert!(dst_stride >= width, "目标行跨度 {dst_stride} 小于宽度 {width}");
    debug_assert!(
        dst.len() >= (height - 1) * dst_stride + width,
        "目标缓冲区过小: len={}",
        dst.len()
    );
    debug_assert!(src.stride >= width + extra, "参考块行跨度不足边框");
    debug_assert!(
        src.data.len() >= RefPatch::required_len(src.stride, width + extra, height + extra),
        "参考块缺少边框样本: len={}",
        src.data.len()
    );
}
