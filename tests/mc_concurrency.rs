//! 多线程并发预测.
//!
//! 插值核无共享可变状态, 各线程持有各自的缓冲区即可并行处理不同的块.
//! 并行结果必须与串行结果逐样本一致.

use hevc_mc::core::block::QPEL_EXTRA;
use hevc_mc::core::{BlockSize, PhasePair, PredBuffers, PredList, RefPatch, SampleBuffers};
use hevc_mc::interp::{BackendKind, InterpConfig, Interpolator};
use rayon::prelude::*;

const FRAME_SIZE: usize = 256;
const BLOCK: usize = 16;

/// 一个待预测的块: 位置与两个列表的运动矢量 (1/4 像素)
#[derive(Clone, Copy)]
struct BlockJob {
    x: usize,
    y: usize,
    mv0: (i32, i32),
    mv1: (i32, i32),
}

fn make_frame() -> Vec<u8> {
    let mut state = 0x1234_5678u32;
    (0..FRAME_SIZE * FRAME_SIZE)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

fn make_jobs() -> Vec<BlockJob> {
    let mut jobs = Vec::new();
    // 留出足够边界, 运动后参考块仍在帧内
    for by in (1..FRAME_SIZE / BLOCK - 1).step_by(2) {
        for bx in (1..FRAME_SIZE / BLOCK - 1).step_by(2) {
            let k = (bx * 7 + by * 3) as i32;
            jobs.push(BlockJob {
                x: bx * BLOCK,
                y: by * BLOCK,
                mv0: (k % 9 - 4, (k / 3) % 9 - 4),
                mv1: ((k / 5) % 9 - 4, k % 7 - 3),
            });
        }
    }
    jobs
}

fn extract(frame: &[u8], x: usize, y: usize, mv: (i32, i32)) -> (Vec<u8>, PhasePair) {
    let cols = BLOCK + QPEL_EXTRA;
    let x0 = (x as i32 + (mv.0 >> 2) - 3) as usize;
    let y0 = (y as i32 + (mv.1 >> 2) - 3) as usize;
    let mut patch = Vec::with_capacity(cols * cols);
    for row in 0..cols {
        let start = (y0 + row) * FRAME_SIZE + x0;
        patch.extend_from_slice(&frame[start..start + cols]);
    }
    (patch, PhasePair::from_luma_mv(mv.0, mv.1))
}

fn predict_block(interp: &Interpolator, frame: &[u8], job: BlockJob) -> Vec<u8> {
    let size = BlockSize::new(BLOCK, BLOCK);
    let stride = BLOCK + QPEL_EXTRA;
    let mut preds = PredBuffers::new();
    let mut out = SampleBuffers::new();
    for (list, mv) in [(PredList::L0, job.mv0), (PredList::L1, job.mv1)] {
        let (patch, phases) = extract(frame, job.x, job.y, mv);
        interp.predict_luma(&mut preds, list, &RefPatch::new(&patch, stride), size, phases);
    }
    interp.put_weighted_pred_avg(&mut out, &preds, size);
    out.block(PredList::L0, size).to_vec()
}

fn run_parallel_vs_serial(kind: BackendKind) {
    let interp = Interpolator::new(&InterpConfig { backend: kind }).expect("创建插值器失败");
    let frame = make_frame();
    let jobs = make_jobs();

    let serial: Vec<Vec<u8>> = jobs.iter().map(|&job| predict_block(&interp, &frame, job)).collect();
    let parallel: Vec<Vec<u8>> = jobs
        .par_iter()
        .map(|&job| predict_block(&interp, &frame, job))
        .collect();

    assert_eq!(serial.len(), parallel.len());
    for (i, (s, p)) in serial.iter().zip(&parallel).enumerate() {
        assert_eq!(s, p, "{kind} 后端第 {i} 个块并行结果与串行不一致");
    }
}

#[test]
fn test_parallel_reference_matches_serial() {
    run_parallel_vs_serial(BackendKind::Reference);
}

#[test]
fn test_parallel_auto_matches_serial() {
    run_parallel_vs_serial(BackendKind::Auto);
}

#[test]
fn test_interpolator_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Interpolator>();
}
