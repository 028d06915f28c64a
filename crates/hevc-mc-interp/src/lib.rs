//! # hevc-mc-interp
//!
//! HEVC 分数像素运动补偿插值库.
//!
//! - 亮度 8 抽头 1/4 像素滤波 (qpel), 色度 4 抽头 1/8 像素滤波 (epel)
//! - 水平、垂直、先水平后垂直三种滤波路径, 以及整像素复制路径
//! - 单向/双向预测合成 (含显式加权)
//! - 参考实现与按相位特化的加速实现, 由配置选择
//!
//! 插值结果保存为 14 位中间精度, 最终舍入与裁剪在合成阶段完成.
//!
//! ```
//! use hevc_mc_core::{BlockSize, PhasePair, PredBuffers, PredList, RefPatch, SampleBuffers};
//! use hevc_mc_interp::{InterpConfig, Interpolator};
//!
//! let interp = Interpolator::new(&InterpConfig::default()).unwrap();
//! let patch = vec![128u8; 71 * 71];
//! let src = RefPatch::new(&patch, 71);
//! let size = BlockSize::from_minus_one(7, 7);
//!
//! let mut preds = PredBuffers::new();
//! let mut out = SampleBuffers::new();
//! interp.predict_luma(&mut preds, PredList::L0, &src, size, PhasePair::new(1, 2));
//! interp.put_unweighted_pred(&mut out, &preds, size, PredList::L0);
//! assert!(out.block(PredList::L0, size).iter().all(|&v| v == 128));
//! ```

#[cfg(feature = "accel")]
pub mod accel;
pub mod backend;
pub mod combine;
pub mod dispatch;
pub mod filters;
pub mod interpolator;
pub mod kernels;
pub mod reference;


#[cfg(feature = "accel")]
pub use accel::AcceleratedKernels;
pub use backend::{BackendKind, InterpConfig, is_acceleration_available, select_kernels};
pub use combine::PredWeight;
pub use dispatch::FilterPath;
pub use interpolator::Interpolator;
pub use kernels::InterpKernels;
pub use reference::ReferenceKernels;
