//! 参考插值核.
//!
//! 逐样本计算, 系数在运行时查表. 不追求速度, 作为加速实现的对照基准,
//! 在未编译加速实现时也作为回退路径.

use hevc_mc_core::RefPatch;
use hevc_mc_core::block::{
    EPEL_EXTRA, EPEL_MARGIN_BEFORE, MAX_PB_SIZE, MC_SCRATCH_SIZE, QPEL_EXTRA, QPEL_MARGIN_BEFORE,
};
use hevc_mc_core::pixel::widen_sample;

use crate::combine::{
    PredWeight, average_sample, unweighted_sample, weighted_bi_sample, weighted_sample,
};
use crate::filters::{SECOND_PASS_SHIFT, epel_coeffs, qpel_coeffs};
use crate::kernels::{InterpKernels, debug_check_filter_args};

/// 参考实现
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceKernels;

/// 在参考块上沿一个方向做 FIR 卷积.
///
/// `(x, y)` 为第一个抽头的位置, `(dx, dy)` 为抽头步进.
#[inline]
fn filter_patch(src: &RefPatch<'_>, coeffs: &[i16], x: usize, y: usize, dx: usize, dy: usize) -> i32 {
    coeffs
        .iter()
        .enumerate()
        .map(|(k, &c)| i32::from(c) * i32::from(src.at(x + k * dx, y + k * dy)))
        .sum()
}

#[allow(clippy::too_many_arguments)]
fn put_pixels(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
    margin: usize,
) {
    for y in 0..height {
        for x in 0..width {
            dst[y * dst_stride + x] = widen_sample(src.at(x + margin, y + margin));
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn put_filter_1d(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
    coeffs: &[i16],
    margin: usize,
    vertical: bool,
) {
    for y in 0..height {
        for x in 0..width {
            let sum = if vertical {
                filter_patch(src, coeffs, x + margin, y, 0, 1)
            } else {
                filter_patch(src, coeffs, x, y + margin, 1, 0)
            };
            dst[y * dst_stride + x] = sum as i16;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn put_filter_2d(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
    coeffs_h: &[i16],
    coeffs_v: &[i16],
    extra: usize,
) {
    // 水平滤波覆盖垂直抽头所需的全部行
    let mut tmp = [0i32; MC_SCRATCH_SIZE];
    for y in 0..height + extra {
        for x in 0..width {
            tmp[y * MAX_PB_SIZE + x] = filter_patch(src, coeffs_h, x, y, 1, 0);
        }
    }
    for y in 0..height {
        for x in 0..width {
            let sum: i32 = coeffs_v
                .iter()
                .enumerate()
                .map(|(k, &c)| i32::from(c) * tmp[(y + k) * MAX_PB_SIZE + x])
                .sum();
            dst[y * dst_stride + x] = (sum >> SECOND_PASS_SHIFT) as i16;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn put_combined<F>(
    dst: &mut [u8],
    dst_stride: usize,
    src_stride: usize,
    width: usize,
    height: usize,
    mut sample: F,
) where
    F: FnMut(usize) -> u8,
{
    for y in 0..height {
        for x in 0..width {
            dst[y * dst_stride + x] = sample(y * src_stride + x);
        }
    }
}

impl InterpKernels for ReferenceKernels {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn put_qpel_pixels(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
    ) {
        debug_check_filter_args(dst, dst_stride, src, width, height, QPEL_EXTRA);
        put_pixels(dst, dst_stride, src, width, height, QPEL_MARGIN_BEFORE);
    }

    fn put_qpel_h(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        mx: u8,
    ) {
        debug_check_filter_args(dst, dst_stride, src, width, height, QPEL_EXTRA);
        let coeffs = qpel_coeffs(mx);
        put_filter_1d(dst, dst_stride, src, width, height, coeffs, QPEL_MARGIN_BEFORE, false);
    }

    fn put_qpel_v(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        my: u8,
    ) {
        debug_check_filter_args(dst, dst_stride, src, width, height, QPEL_EXTRA);
        let coeffs = qpel_coeffs(my);
        put_filter_1d(dst, dst_stride, src, width, height, coeffs, QPEL_MARGIN_BEFORE, true);
    }

    fn put_qpel_hv(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        mx: u8,
        my: u8,
    ) {
        debug_check_filter_args(dst, dst_stride, src, width, height, QPEL_EXTRA);
        put_filter_2d(
            dst,
            dst_stride,
            src,
            width,
            height,
            qpel_coeffs(mx),
            qpel_coeffs(my),
            QPEL_EXTRA,
        );
    }

    fn put_epel_pixels(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
    ) {
        debug_check_filter_args(dst, dst_stride, src, width, height, EPEL_EXTRA);
        put_pixels(dst, dst_stride, src, width, height, EPEL_MARGIN_BEFORE);
    }

    fn put_epel_h(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        mx: u8,
    ) {
        debug_check_filter_args(dst, dst_stride, src, width, height, EPEL_EXTRA);
        let coeffs = epel_coeffs(mx);
        put_filter_1d(dst, dst_stride, src, width, height, coeffs, EPEL_MARGIN_BEFORE, false);
    }

    fn put_epel_v(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        my: u8,
    ) {
        debug_check_filter_args(dst, dst_stride, src, width, height, EPEL_EXTRA);
        let coeffs = epel_coeffs(my);
        put_filter_1d(dst, dst_stride, src, width, height, coeffs, EPEL_MARGIN_BEFORE, true);
    }

    fn put_epel_hv(
        &self,
        dst: &mut [i16],
        dst_stride: usize,
        src: &RefPatch<'_>,
        width: usize,
        height: usize,
        mx: u8,
        my: u8,
    ) {
        debug_check_filter_args(dst, dst_stride, src, width, height, EPEL_EXTRA);
        put_filter_2d(
            dst,
            dst_stride,
            src,
            width,
            height,
            epel_coeffs(mx),
            epel_coeffs(my),
            EPEL_EXTRA,
        );
    }

    fn put_unweighted_pred(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src: &[i16],
        src_stride: usize,
        width: usize,
        height: usize,
    ) {
        put_combined(dst, dst_stride, src_stride, width, height, |i| {
            unweighted_sample(src[i])
        });
    }

    fn put_weighted_pred_avg(
        &self,
        dst: &mut [u8],
        dst_stride: usize,
        src0: &[i16],
        src1: &[i16],
        src_stride: usize,
        width: usize,
        height: usize,
    ) {
        put_combined(dst, dst_stride, src_stride, width, height, |i| {
            average_sample(src0[i], src1[i])
        });
    }

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
    ) {
        put_combined(dst, dst_stride, src_stride, width, height, |i| {
            weighted_sample(src[i], log2_denom, weight)
        });
    }

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
    ) {
        put_combined(dst, dst_stride, src_stride, width, height, |i| {
            weighted_bi_sample(src0[i], src1[i], log2_denom, weights[0], weights[1])
        });
    }
}
