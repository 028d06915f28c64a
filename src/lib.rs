//! # hevc-mc
//!
//! 纯 Rust 实现的 HEVC 分数像素运动补偿.
//!
//! 上游调度 (解码器或数据流运行时) 为每个预测块提供带边框的参考块、
//! 块尺寸、分数相位与参考列表索引, 本库完成:
//! - **插值**: 亮度 8 抽头 (1/4 像素) 与色度 4 抽头 (1/8 像素) 滤波
//! - **合成**: 单向舍入、双向平均与显式加权
//! - **后端选择**: 参考实现 / 加速实现, 可由配置或环境变量指定
//!
//! # 快速开始
//!
//! ```rust
//! use hevc_mc::core::{BlockSize, PhasePair, PredBuffers, PredList, RefPatch, SampleBuffers};
//!
//! let interp = hevc_mc::default_interpolator();
//! let patch = vec![90u8; 71 * 71];
//! let src = RefPatch::new(&patch, 71);
//! let size = BlockSize::new(16, 16);
//!
//! let mut preds = PredBuffers::new();
//! interp.predict_luma(&mut preds, PredList::L0, &src, size, PhasePair::new(2, 0));
//! interp.predict_luma(&mut preds, PredList::L1, &src, size, PhasePair::new(0, 3));
//!
//! let mut out = SampleBuffers::new();
//! interp.put_weighted_pred_avg(&mut out, &preds, size);
//! assert!(out.block(PredList::L0, size).iter().all(|&v| v == 90));
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `hevc-mc-core` | 错误类型、像素裁剪、块几何、缓冲区 |
//! | `hevc-mc-interp` | 插值核、相位分发、预测合成、后端选择 |

/// 核心类型
pub use hevc_mc_core as core;

/// 插值与合成
pub use hevc_mc_interp as interp;

pub mod config;
pub mod logging;

use log::info;

pub use config::AppConfig;
pub use hevc_mc_interp::{Interpolator, is_acceleration_available};

/// 获取版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// 按默认配置创建插值器 (有加速实现时使用加速实现)
pub fn default_interpolator() -> Interpolator {
    Interpolator::new(&interp::InterpConfig::default()).unwrap_or_else(|_| Interpolator::reference())
}

/// 按应用配置创建插值器
pub fn build_interpolator(config: &AppConfig) -> hevc_mc_core::McResult<Interpolator> {
    let interp = Interpolator::new(&config.interp)?;
    info!(
        "hevc-mc {} 插值后端: {} (加速实现{})",
        version(),
        interp.backend_name(),
        if is_acceleration_available() {
            "可用"
        } else {
            "不可用"
        }
    );
    Ok(interp)
}
