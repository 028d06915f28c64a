//! 加速插值核.
//!
//! 亮度滤波按相位单态化 (const generic), 系数在编译期确定; 内层循环以
//! 整行切片和固定宽度抽头窗口组织, 便于编译器向量化. 通过
//! [`crate::dispatch`] 中的函数表按相位选择具体变体.
//!
//! 色度只有 4 个抽头, 使用一个接收相位参数的通用核.
//!
//! 输出必须与 [`crate::reference::ReferenceKernels`] 逐位一致.

use hevc_mc_core::RefPatch;
use hevc_mc_core::block::{
    EPEL_EXTRA, EPEL_MARGIN_BEFORE, MAX_PB_SIZE, MC_SCRATCH_SIZE, QPEL_EXTRA, QPEL_MARGIN_BEFORE,
    QPEL_PHASES,
};
use hevc_mc_core::pixel::widen_sample;

use crate::combine::{
    PredWeight, average_sample, unweighted_sample, weighted_bi_sample, weighted_sample,
};
use crate::dispatch::{QPEL_H_FNS, QPEL_HV_FNS, QPEL_V_FNS};
use crate::filters::{EPEL_TAPS, QPEL_FILTERS, QPEL_TAPS, SECOND_PASS_SHIFT, epel_coeffs};
use crate::kernels::{InterpKernels, debug_check_filter_args};

/// 加速实现
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceleratedKernels;

#[inline(always)]
fn dot8<T: Copy + Into<i32>>(c: &[i16; QPEL_TAPS], s: &[T]) -> i32 {
    let s = &s[..QPEL_TAPS];
    let tap = |k: usize| -> i32 { i32::from(c[k]) * Into::<i32>::into(s[k]) };
    tap(0) + tap(1) + tap(2) + tap(3) + tap(4) + tap(5) + tap(6) + tap(7)
}

#[inline(always)]
fn dot4<T: Copy + Into<i32>>(c: &[i16; EPEL_TAPS], s: &[T]) -> i32 {
    let s = &s[..EPEL_TAPS];
    let tap = |k: usize| -> i32 { i32::from(c[k]) * Into::<i32>::into(s[k]) };
    tap(0) + tap(1) + tap(2) + tap(3)
}

/// 参考块第 `y` 行从 `x` 开始的 `len` 个样本
#[inline(always)]
fn patch_row<'a>(src: &RefPatch<'a>, x: usize, y: usize, len: usize) -> &'a [u8] {
    let start = y * src.stride + x;
    &src.data[start..start + len]
}

#[inline(always)]
fn dst_row(dst: &mut [i16], dst_stride: usize, y: usize, width: usize) -> &mut [i16] {
    let start = y * dst_stride;
    &mut dst[start..start + width]
}

fn qpel_pixels(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
) {
    for y in 0..height {
        let row = patch_row(src, QPEL_MARGIN_BEFORE, y + QPEL_MARGIN_BEFORE, width);
        for (d, &s) in dst_row(dst, dst_stride, y, width).iter_mut().zip(row) {
            *d = widen_sample(s);
        }
    }
}

/// 亮度水平滤波, 相位 `F`
pub(crate) fn qpel_h<const F: usize>(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
) {
    let c = &QPEL_FILTERS[F];
    for y in 0..height {
        let row = patch_row(src, 0, y + QPEL_MARGIN_BEFORE, width + QPEL_EXTRA);
        for (d, win) in dst_row(dst, dst_stride, y, width)
            .iter_mut()
            .zip(row.windows(QPEL_TAPS))
        {
            *d = dot8(c, win) as i16;
        }
    }
}

/// 亮度垂直滤波, 相位 `F`
pub(crate) fn qpel_v<const F: usize>(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
) {
    let c = &QPEL_FILTERS[F];
    for y in 0..height {
        let rows: [&[u8]; QPEL_TAPS] =
            std::array::from_fn(|k| patch_row(src, QPEL_MARGIN_BEFORE, y + k, width));
        for (x, d) in dst_row(dst, dst_stride, y, width).iter_mut().enumerate() {
            let col: [u8; QPEL_TAPS] = std::array::from_fn(|k| rows[k][x]);
            *d = dot8(c, &col) as i16;
        }
    }
}

/// 亮度二维滤波, 水平相位 `FX`, 垂直相位 `FY`
pub(crate) fn qpel_hv<const FX: usize, const FY: usize>(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
) {
    let ch = &QPEL_FILTERS[FX];
    let cv = &QPEL_FILTERS[FY];
    let mut tmp = [0i16; MC_SCRATCH_SIZE];

    for (y, tmp_row) in tmp
        .chunks_exact_mut(MAX_PB_SIZE)
        .take(height + QPEL_EXTRA)
        .enumerate()
    {
        let row = patch_row(src, 0, y, width + QPEL_EXTRA);
        for (t, win) in tmp_row[..width].iter_mut().zip(row.windows(QPEL_TAPS)) {
            *t = dot8(ch, win) as i16;
        }
    }

    for y in 0..height {
        let rows: [&[i16]; QPEL_TAPS] = std::array::from_fn(|k| {
            let start = (y + k) * MAX_PB_SIZE;
            &tmp[start..start + width]
        });
        for (x, d) in dst_row(dst, dst_stride, y, width).iter_mut().enumerate() {
            let col: [i16; QPEL_TAPS] = std::array::from_fn(|k| rows[k][x]);
            *d = (dot8(cv, &col) >> SECOND_PASS_SHIFT) as i16;
        }
    }
}

fn epel_pixels(dst: &mut [i16], dst_stride: usize, src: &RefPatch<'_>, width: usize, height: usize) {
    for y in 0..height {
        let row = patch_row(src, EPEL_MARGIN_BEFORE, y + EPEL_MARGIN_BEFORE, width);
        for (d, &s) in dst_row(dst, dst_stride, y, width).iter_mut().zip(row) {
            *d = widen_sample(s);
        }
    }
}

fn epel_h(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
    c: &[i16; EPEL_TAPS],
) {
    for y in 0..height {
        let row = patch_row(src, 0, y + EPEL_MARGIN_BEFORE, width + EPEL_EXTRA);
        for (d, win) in dst_row(dst, dst_stride, y, width)
            .iter_mut()
            .zip(row.windows(EPEL_TAPS))
        {
            *d = dot4(c, win) as i16;
        }
    }
}

fn epel_v(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
    c: &[i16; EPEL_TAPS],
) {
    for y in 0..height {
        let rows: [&[u8]; EPEL_TAPS] =
            std::array::from_fn(|k| patch_row(src, EPEL_MARGIN_BEFORE, y + k, width));
        for (x, d) in dst_row(dst, dst_stride, y, width).iter_mut().enumerate() {
            let col: [u8; EPEL_TAPS] = std::array::from_fn(|k| rows[k][x]);
            *d = dot4(c, &col) as i16;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn epel_hv(
    dst: &mut [i16],
    dst_stride: usize,
    src: &RefPatch<'_>,
    width: usize,
    height: usize,
    ch: &[i16; EPEL_TAPS],
    cv: &[i16; EPEL_TAPS],
) {
    let mut tmp = [0i16; MC_SCRATCH_SIZE];

    for (y, tmp_row) in tmp
        .chunks_exact_mut(MAX_PB_SIZE)
        .take(height + EPEL_EXTRA)
        .enumerate()
    {
        let row = patch_row(src, 0, y, width + EPEL_EXTRA);
        for (t, win) in tmp_row[..width].iter_mut().zip(row.windows(EPEL_TAPS)) {
            *t = dot4(ch, win) as i16;
        }
    }

    for y in 0..height {
        let rows: [&[i16]; EPEL_TAPS] = std::array::from_fn(|k| {
            let start = (y + k) * MAX_PB_SIZE;
            &tmp[start..start + width]
        });
        for (x, d) in dst_row(dst, dst_stride, y, width).iter_mut().enumerate() {
            let col: [i16; EPEL_TAPS] = std::array::from_fn(|k| rows[k][x]);
            *d = (dot4(cv, &col) >> SECOND_PASS_SHIFT) as i16;
        }
    }
}

/// 按行合成, `op` 接收同一行的源样本下标
#[inline(always)]
fn combine_rows<F>(
    dst: &mut [u8],
    dst_stride: usize,
    src_stride: usize,
    width: usize,
    height: usize,
    mut op: F,
) where
    F: FnMut(&mut [u8], std::ops::Range<usize>),
{
    for y in 0..height {
        let start = y * dst_stride;
        let src_start = y * src_stride;
        op(&mut dst[start..start + width], src_start..src_start + width);
    }
}

impl InterpKernels for AcceleratedKernels {
    fn name(&self) -> &'static str {
        "accelerated"
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
        qpel_pixels(dst, dst_stride, src, width, height);
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
        QPEL_H_FNS[usize::from(mx)](dst, dst_stride, src, width, height);
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
        QPEL_V_FNS[usize::from(my)](dst, dst_stride, src, width, height);
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
        debug_assert!(
            usize::from(mx) <= QPEL_PHASES && usize::from(my) <= QPEL_PHASES,
            "亮度相位越界: ({mx}, {my})"
        );
        QPEL_HV_FNS[usize::from(mx)][usize::from(my)](dst, dst_stride, src, width, height);
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
        epel_pixels(dst, dst_stride, src, width, height);
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
        epel_h(dst, dst_stride, src, width, height, epel_coeffs(mx));
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
        epel_v(dst, dst_stride, src, width, height, epel_coeffs(my));
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
        epel_hv(dst, dst_stride, src, width, height, epel_coeffs(mx), epel_coeffs(my));
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
        combine_rows(dst, dst_stride, src_stride, width, height, |out, range| {
            for (d, &s) in out.iter_mut().zip(&src[range]) {
                *d = unweighted_sample(s);
            }
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
        combine_rows(dst, dst_stride, src_stride, width, height, |out, range| {
            let row0 = &src0[range.clone()];
            let row1 = &src1[range];
            for ((d, &a), &b) in out.iter_mut().zip(row0).zip(row1) {
                *d = average_sample(a, b);
            }
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
        combine_rows(dst, dst_stride, src_stride, width, height, |out, range| {
            for (d, &s) in out.iter_mut().zip(&src[range]) {
                *d = weighted_sample(s, log2_denom, weight);
            }
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
        let [w0, w1] = weights;
        combine_rows(dst, dst_stride, src_stride, width, height, |out, range| {
            let row0 = &src0[range.clone()];
            let row1 = &src1[range];
            for ((d, &a), &b) in out.iter_mut().zip(row0).zip(row1) {
                *d = weighted_bi_sample(a, b, log2_denom, w0, w1);
            }
        });
    }
}
